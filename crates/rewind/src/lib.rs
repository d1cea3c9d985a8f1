//! Terminal front end for the rewind tic-tac-toe engine.
//!
//! The engine in `rewind_tictactoe` owns every game decision. This crate
//! only turns text into engine calls and engine outputs into text:
//!
//! - **Command**: parse one input line into a [`UserCommand`]
//! - **Session**: apply commands to a [`GameEngine`](rewind_tictactoe::GameEngine)
//! - **Render**: format boards, status and the jump list
//! - **Config**: TOML settings with defaults

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod render;
mod session;

pub use cli::{Cli, Command, DEFAULT_CONFIG};
pub use command::{CommandError, HELP, UserCommand};
pub use config::{AppConfig, ConfigError};
pub use render::{render_board, render_history, render_outcome, render_position};
pub use session::{Flow, Session};
