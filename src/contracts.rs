//! Contract-based validation for the move transition.
//!
//! Contracts define correctness through preconditions and
//! postconditions, formalizing the Hoare-style reasoning
//! {P} action {Q} for applying a move to the game.

use crate::action::MoveRejection;
use crate::game::Game;
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::position::Position;
use crate::rules;
use tracing::instrument;

/// A contract defines preconditions and postconditions for a state
/// transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the displayed board has no winner yet.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Checks that the board at the cursor has no completed line.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveRejection> {
        match rules::check_winner(game.board()) {
            Some(winner) => Err(MoveRejection::GameWon(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: the target square must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks that the position is unoccupied on the displayed board.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &Game) -> Result<(), MoveRejection> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejection::CellOccupied(pos))
        }
    }
}

/// Composite precondition: a move is legal if no winner exists and
/// the target square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    ///
    /// The winner check runs first, so a move onto an occupied square
    /// of a finished game reports the finished game, matching the
    /// precedence of the status derivation.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &Game) -> Result<(), MoveRejection> {
        NoWinnerYet::check(game)?;
        CellIsEmpty::check(pos, game)?;
        Ok(())
    }
}

/// Contract for move application.
///
/// Preconditions:
/// - No winner on the displayed board
/// - Target square is empty
///
/// Postconditions:
/// - History still grows one mark at a time
/// - Turn parity still matches index parity
/// - Cursor remains in bounds
pub struct MoveContract;

impl Contract<Game, Position> for MoveContract {
    fn pre(game: &Game, pos: &Position) -> Result<(), MoveRejection> {
        LegalMove::check(*pos, game)
    }

    fn post(_before: &Game, after: &Game) -> Result<(), Vec<InvariantViolation>> {
        GameInvariants::check_all(after)
    }
}

/// Asserts that all game invariants hold (debug builds only).
#[instrument(skip(game))]
pub fn assert_invariants(game: &Game) {
    debug_assert!(
        GameInvariants::check_all(game).is_ok(),
        "game invariants violated"
    );
}
