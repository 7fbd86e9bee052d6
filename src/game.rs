//! Game state manager: move history and the display cursor.
//!
//! The manager owns the full board history and a cursor selecting
//! which entry is displayed. Everything else the presentation layer
//! needs (whose turn it is, status, winning line, move list) is
//! derived from those two fields on read, never stored, so derived
//! state cannot drift out of sync with the history.

use crate::action::MoveRejection;
use crate::contracts::{self, Contract, LegalMove, MoveContract};
use crate::position::Position;
use crate::rules::{self, WinLine};
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A tic-tac-toe game with a rewindable move history.
///
/// The history is a linear timeline: entry 0 is the empty board and
/// entry `i` the board after the `i`-th move. Jumping moves only the
/// cursor; playing from a rewound position truncates the timeline at
/// the cursor and appends, discarding the abandoned branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// One board per move, plus the initial empty board.
    pub(crate) history: Vec<Board>,
    /// Index of the displayed history entry.
    pub(crate) current: usize,
}

impl Game {
    /// Creates a new game: a single empty board, cursor at 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current: 0,
        }
    }

    /// Returns the board at the cursor.
    pub fn board(&self) -> &Board {
        &self.history[self.current]
    }

    /// Returns the full board history.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the index of the displayed move.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Returns the number of history entries (moves played plus one).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns the player to move at the cursor.
    ///
    /// Derived from cursor parity: X on even indices, O on odd.
    pub fn to_move(&self) -> Player {
        Player::on_move(self.current)
    }

    /// Checks whether a move at the position would be applied.
    ///
    /// Exposes the play preconditions as a query so a caller can
    /// grey out dead cells without attempting the move.
    #[instrument(skip(self))]
    pub fn validate(&self, pos: Position) -> Result<(), MoveRejection> {
        LegalMove::check(pos, self)
    }

    /// Plays a move at the given position.
    ///
    /// If the displayed board already has a winner or the square is
    /// occupied, the move is silently ignored. Otherwise the cursor
    /// board is copied, the mark of the player to move is placed,
    /// the history is truncated at the cursor and the new board
    /// appended, and the cursor advances to it. Any rewound "future"
    /// entries are discarded; the timeline stays linear.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn play(&mut self, pos: Position) {
        if let Err(rejection) = MoveContract::pre(self, &pos) {
            debug!(%rejection, "move ignored");
            return;
        }

        let mut next = self.board().clone();
        next.set(pos, Square::Occupied(self.to_move()));

        self.history.truncate(self.current + 1);
        self.history.push(next);
        self.current = self.history.len() - 1;

        contracts::assert_invariants(self);
    }

    /// Plays a move given a raw cell index (0-8).
    ///
    /// Out-of-range indices are ignored, like any other invalid move.
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) {
        match Position::from_index(index) {
            Some(pos) => self.play(pos),
            None => debug!(index, "cell index out of range, move ignored"),
        }
    }

    /// Moves the cursor to a history entry without altering history.
    ///
    /// Earlier moves stay revisitable after a jump precisely because
    /// nothing is deleted here. Callers only ever hold indices drawn
    /// from [`Game::move_labels`], so an out-of-range index has no
    /// legitimate source; it is ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        if index >= self.history.len() {
            debug!(index, len = self.history.len(), "jump ignored");
            return;
        }
        self.current = index;
    }

    /// Derives the status of the displayed board.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        if let Some(win) = rules::winning_line(self.board()) {
            GameStatus::Won(win.player)
        } else if rules::is_full(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.to_move(),
            }
        }
    }

    /// Derives the status text for the displayed board.
    ///
    /// `"Winner: X"`, `"Next player: O"`, or `"Draw"`.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// Returns the winning line on the displayed board, if any.
    ///
    /// The triple of positions is the highlight contract for the
    /// presentation layer.
    pub fn winning_line(&self) -> Option<WinLine> {
        rules::winning_line(self.board())
    }

    /// Labels every history entry for a move-list display.
    ///
    /// A pure projection of the history length: yields
    /// `(0, "Go to game start")` followed by `(i, "Go to move #i")`
    /// for each later entry. Restartable by calling again.
    pub fn move_labels(&self) -> impl Iterator<Item = (usize, String)> {
        (0..self.history.len()).map(|index| {
            let label = if index == 0 {
                "Go to game start".to_string()
            } else {
                format!("Go to move #{}", index)
            };
            (index, label)
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.history_len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_move_labels() {
        let mut game = Game::new();
        game.play(Position::Center);
        game.play(Position::TopLeft);

        let labels: Vec<_> = game.move_labels().collect();
        assert_eq!(
            labels,
            vec![
                (0, "Go to game start".to_string()),
                (1, "Go to move #1".to_string()),
                (2, "Go to move #2".to_string()),
            ]
        );

        // Restartable: a fresh call yields the same projection
        assert_eq!(game.move_labels().count(), 3);
    }

    #[test]
    fn test_play_index_out_of_range_is_ignored() {
        let mut game = Game::new();
        game.play_index(9);
        assert_eq!(game.history_len(), 1);

        game.play_index(4);
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut game = Game::new();
        game.play(Position::Center);
        game.jump_to(5);
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_validate_matches_play() {
        let mut game = Game::new();
        assert!(game.validate(Position::Center).is_ok());
        game.play(Position::Center);
        assert_eq!(
            game.validate(Position::Center),
            Err(MoveRejection::CellOccupied(Position::Center))
        );
    }
}
