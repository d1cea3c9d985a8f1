//! Step invariant: consecutive history entries differ by one new mark.

use super::super::{GameEngine, Player, Square};
use super::Invariant;

/// Invariant: entry `k` is entry `k - 1` plus exactly one mark.
///
/// The added mark fills a previously empty cell and belongs to the player
/// whose turn it was, so X places on odd entries and O on even ones.
pub struct SingleMarkStepInvariant;

impl Invariant<GameEngine> for SingleMarkStepInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history
            .boards()
            .windows(2)
            .enumerate()
            .all(|(moves_made, pair)| {
                let [before, after] = pair else {
                    return false;
                };
                match before.diff(after).as_slice() {
                    [pos] => {
                        before.get(*pos) == Square::Empty
                            && after.get(*pos)
                                == Square::Occupied(Player::to_move_after(moves_made))
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark for the player to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_played_game_holds() {
        let mut engine = GameEngine::new();
        for cell in [4, 0, 8, 2, 6] {
            engine.play(cell).unwrap();
        }
        assert!(SingleMarkStepInvariant::holds(&engine));
    }

    #[test]
    fn test_wrong_player_violates() {
        let mut engine = GameEngine::new();
        engine.play(4).unwrap();
        engine.history.boards_mut()[1] = Board::new().with_mark(Position::Center, Player::O);
        assert!(!SingleMarkStepInvariant::holds(&engine));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let mut engine = GameEngine::new();
        engine.play(4).unwrap();
        engine.history.boards_mut()[1] = Board::new()
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::X);
        assert!(!SingleMarkStepInvariant::holds(&engine));
    }

    #[test]
    fn test_repeated_board_violates() {
        let mut engine = GameEngine::new();
        engine.play(4).unwrap();
        engine.history.boards_mut()[1] = Board::new();
        assert!(!SingleMarkStepInvariant::holds(&engine));
    }
}
