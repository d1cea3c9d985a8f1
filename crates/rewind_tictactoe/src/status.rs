//! Derived, display-ready views of a position: status line and move labels.

use super::Player;
use serde::{Deserialize, Serialize};

/// Status of the position currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winner yet; the carried player moves next.
    NextPlayer(Player),
    /// The carried player completed a line.
    Winner(Player),
    /// Board is full with no winner.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Winner(player) => Some(*player),
            GameStatus::NextPlayer(_) | GameStatus::Draw => None,
        }
    }

    /// Returns true once no further move can be placed on this board.
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::NextPlayer(player) => write!(f, "Next player: {player}"),
            GameStatus::Winner(player) => write!(f, "Winner: {player}"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Label for one history entry, used to build the jump list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveLabel {
    /// Entry 0, the empty board.
    GameStart,
    /// Entry `n` for `n > 0`.
    Move(usize),
}

impl MoveLabel {
    /// Label for history index `index`.
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => MoveLabel::GameStart,
            n => MoveLabel::Move(n),
        }
    }
}

impl std::fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveLabel::GameStart => write!(f, "Game start"),
            MoveLabel::Move(n) => write!(f, "Move #{n}"),
        }
    }
}

/// Returns the label for history index `index`.
pub fn move_label(index: usize) -> MoveLabel {
    MoveLabel::for_index(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::NextPlayer(Player::X).to_string(), "Next player: X");
        assert_eq!(GameStatus::Winner(Player::O).to_string(), "Winner: O");
        assert_eq!(GameStatus::Draw.to_string(), "Draw");
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::Winner(Player::X).winner(), Some(Player::X));
        assert_eq!(GameStatus::NextPlayer(Player::X).winner(), None);
        assert!(!GameStatus::NextPlayer(Player::O).is_finished());
        assert!(GameStatus::Draw.is_finished());
    }

    #[test]
    fn test_move_labels() {
        assert_eq!(move_label(0), MoveLabel::GameStart);
        assert_eq!(move_label(3), MoveLabel::Move(3));
        assert_eq!(move_label(0).to_string(), "Game start");
        assert_eq!(move_label(7).to_string(), "Move #7");
    }
}
