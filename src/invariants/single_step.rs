//! Single-step invariant: consecutive history boards differ in
//! exactly one square, which goes from empty to occupied.

use super::Invariant;
use crate::game::Game;
use crate::position::Position;
use crate::types::Square;
use strum::IntoEnumIterator;

/// Invariant: each history entry extends the previous by one mark.
///
/// Boards are only ever appended by applying a single move, so any
/// two consecutive entries differ in exactly one square and that
/// square transitions from empty to a player's mark. Marks are never
/// moved or erased within the timeline.
pub struct SingleStepInvariant;

impl Invariant<Game> for SingleStepInvariant {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let mut changed = 0;
            let mut legal = true;
            for pos in Position::iter() {
                if before.get(pos) != after.get(pos) {
                    changed += 1;
                    if before.get(pos) != Square::Empty || after.get(pos) == Square::Empty {
                        legal = false;
                    }
                }
            }
            changed == 1 && legal
        })
    }

    fn description() -> &'static str {
        "Consecutive history boards differ by exactly one new mark"
    }
}
