//! Tic-tac-toe engine with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw checks over a single [`Board`]
//! - **History**: one linear timeline of immutable board snapshots
//! - **Engine**: [`GameEngine`] owns the history and a cursor into it, and
//!   exposes `play`, `jump_to` and `restart`
//! - **Invariants**: first-class checks that hold after every operation
//!
//! Jumping back and playing a different move discards the old future
//! (branch-overwrite); the history never forks.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     engine.play(cell).unwrap();
//! }
//! assert_eq!(engine.status(), GameStatus::Winner(Player::X));
//!
//! engine.jump_to(1).unwrap();
//! engine.play(8).unwrap();
//! assert_eq!(engine.len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod history;
mod position;
mod status;
mod types;

pub mod invariants;
pub mod rules;

pub use engine::{EngineOptions, EngineSnapshot, GameEngine, PlayOutcome, Rejection};
pub use error::EngineError;
pub use history::HistoryEntry;
pub use position::Position;
pub use rules::evaluate_winner;
pub use status::{GameStatus, MoveLabel, move_label};
pub use types::{Board, Player, Square};
