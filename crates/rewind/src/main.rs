//! Rewind - tic-tac-toe with time travel.

use anyhow::Result;
use clap::Parser;
use rewind::{AppConfig, Cli, Command, DEFAULT_CONFIG, Session};
use std::io::Write;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref(), Path::new(DEFAULT_CONFIG))?;
    initialize_tracing(config.log_filter());

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_interactive(config),
        Command::Script { commands } => run_script(config, commands),
    }
}

/// Logs go to stderr so they never mix with game output.
fn initialize_tracing(fallback_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Tracing initialized");
}

/// Play on stdin/stdout until quit or EOF.
#[instrument(skip(config))]
fn run_interactive(config: AppConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Rewind tic-tac-toe. Type 'help' for commands.")?;
    Session::new(config).run(stdin.lock(), &mut out, true)?;
    Ok(())
}

/// Run the given command lines and exit.
#[instrument(skip(config))]
fn run_script(config: AppConfig, commands: Vec<String>) -> Result<()> {
    let input = commands.join("\n");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    Session::new(config).run(input.as_bytes(), &mut out, false)?;
    out.flush()?;
    Ok(())
}
