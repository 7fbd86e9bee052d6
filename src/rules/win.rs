//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight candidate winning lines, in scan priority order:
/// rows top to bottom, then columns left to right, then the main
/// diagonal, then the anti diagonal.
///
/// A legally reached board has at most one winning line, but the
/// fixed order makes the detector deterministic on any board,
/// including synthetic ones with several complete lines.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed three-in-a-row.
///
/// The triple is reported so the presentation layer can highlight
/// the winning cells; it is derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    /// The player who completed the line.
    pub player: Player,
    /// The three positions forming the line.
    pub line: [Position; 3],
}

/// Finds the first winning line on the board.
///
/// Scans [`LINES`] in priority order and returns the first line whose
/// three squares are occupied by the same player, or `None` if no
/// line is complete. Pure and deterministic.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinLine> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some(WinLine { player, line });
            }
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|win| win.player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(board: &mut Board, player: Player, positions: &[Position]) {
        for pos in positions {
            board.set(*pos, Square::Occupied(player));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut board = Board::new();
            fill(&mut board, Player::X, &line);
            let win = winning_line(&board).expect("line should win");
            assert_eq!(win.player, Player::X);
            assert_eq!(win.line, line);
        }
    }

    #[test]
    fn test_winner_for_o() {
        let mut board = Board::new();
        fill(
            &mut board,
            Player::O,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        );
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new();
        fill(&mut board, Player::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        fill(&mut board, Player::X, &[Position::TopLeft, Position::TopRight]);
        fill(&mut board, Player::O, &[Position::TopCenter]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_scan_order_breaks_ties() {
        // Synthetic board where X completes both the top row and the
        // left column. The row scans first.
        let mut board = Board::new();
        fill(
            &mut board,
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        let win = winning_line(&board).expect("winner expected");
        assert_eq!(
            win.line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_detector_is_pure() {
        let mut board = Board::new();
        fill(
            &mut board,
            Player::O,
            &[Position::TopCenter, Position::Center, Position::BottomCenter],
        );
        assert_eq!(winning_line(&board), winning_line(&board));
    }
}
