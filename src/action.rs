//! Move rejection classification.
//!
//! The play boundary is a silent no-op on invalid input: an ignored
//! move surfaces nothing to the caller. The rejection reason still
//! exists as a typed value so the validation query and debug logs
//! can name it.

use crate::position::Position;
use crate::types::Player;

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The square at the position is already occupied.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The displayed board already has a winner.
    #[display("game already won by {}", _0)]
    GameWon(Player),
}

impl std::error::Error for MoveRejection {}
