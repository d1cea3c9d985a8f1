//! Starting board invariant: history entry 0 is the empty board.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: the first history entry is the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<GameEngine> for StartsEmptyInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.board_at(0).is_some_and(|board| board.is_blank())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
