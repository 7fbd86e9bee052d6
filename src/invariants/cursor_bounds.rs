//! Cursor bounds invariant: the displayed move always exists.

use super::Invariant;
use crate::game::Game;

/// Invariant: the history cursor indexes an existing entry.
///
/// `history` is never empty (it always contains the initial empty
/// board), and `current` stays strictly below its length through
/// every play and jump.
pub struct CursorBoundsInvariant;

impl Invariant<Game> for CursorBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "History cursor is within bounds"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_new_game_holds() {
        let game = Game::new();
        assert!(CursorBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_play_and_jump() {
        let mut game = Game::new();
        game.play(Position::Center);
        game.play(Position::TopLeft);
        game.jump_to(0);
        assert!(CursorBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_out_of_bounds_cursor_violates() {
        let mut game = Game::new();
        game.current = 1;
        assert!(!CursorBoundsInvariant::holds(&game));
    }
}
