//! Command-line interface for rewind.

use clap::{Parser, Subcommand};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG: &str = "rewind.toml";

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (interactive play when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Run each argument as a command line, then exit
    Script {
        /// Command lines, e.g. "play 4" "jump 0" show
        #[arg(required = true)]
        commands: Vec<String>,
    },
}
