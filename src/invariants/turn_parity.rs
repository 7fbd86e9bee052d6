//! Turn parity invariant: players strictly alternate, X first.

use super::Invariant;
use crate::game::Game;
use crate::types::Player;

/// Invariant: the board at history index `i` holds exactly
/// `ceil(i / 2)` X marks and `floor(i / 2)` O marks.
///
/// This is the structural form of strict alternation: X plays the
/// even-indexed moves and O the odd-indexed ones, so mark counts are
/// fully determined by the entry's index.
pub struct TurnParityInvariant;

impl Invariant<Game> for TurnParityInvariant {
    fn holds(game: &Game) -> bool {
        game.history().iter().enumerate().all(|(i, board)| {
            board.count(Player::X) == i.div_ceil(2) && board.count(Player::O) == i / 2
        })
    }

    fn description() -> &'static str {
        "Mark counts at history index i match strict X-first alternation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Square;

    #[test]
    fn test_new_game_holds() {
        let game = Game::new();
        assert!(TurnParityInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_alternating_moves() {
        let mut game = Game::new();
        game.play(Position::TopLeft);
        game.play(Position::Center);
        game.play(Position::TopRight);
        game.play(Position::BottomLeft);
        assert!(TurnParityInvariant::holds(&game));
    }

    #[test]
    fn test_double_mark_violates() {
        let mut game = Game::new();
        game.play(Position::TopLeft);

        // Corrupt the latest board with an extra X
        let last = game.history.len() - 1;
        game.history[last].set(Position::Center, Square::Occupied(Player::X));

        assert!(!TurnParityInvariant::holds(&game));
    }
}
