//! Cursor invariant: the current move names an existing history entry.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: `current_move < history length`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameEngine> for CursorInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.current_move < engine.history.len()
    }

    fn description() -> &'static str {
        "Current move points at an existing history entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_through_jumps() {
        let mut engine = GameEngine::new();
        for cell in [0, 4, 8] {
            engine.play(cell).unwrap();
        }
        for target in 0..engine.len() {
            engine.jump_to(target).unwrap();
            assert!(CursorInBoundsInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_dangling_cursor_violates() {
        let mut engine = GameEngine::new();
        engine.current_move = 1;
        assert!(!CursorInBoundsInvariant::holds(&engine));
    }
}
