//! Interactive session: reads command lines, drives the engine, writes text.

use crate::command::{HELP, UserCommand};
use crate::config::AppConfig;
use crate::render::{render_history, render_outcome, render_position};
use rewind_tictactoe::GameEngine;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop reading.
    Quit,
}

/// One game session bound to a configuration.
#[derive(Debug, Clone)]
pub struct Session {
    engine: GameEngine,
    config: AppConfig,
}

impl Session {
    /// Creates a session at the empty board.
    #[instrument(skip(config))]
    pub fn new(config: AppConfig) -> Self {
        Self {
            engine: GameEngine::with_options(config.engine_options()),
            config,
        }
    }

    /// The engine driven by this session.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Parses and executes one line, writing the response to `out`.
    ///
    /// Blank lines are ignored. Parse errors are reported to `out` and the
    /// session continues.
    #[instrument(skip(self, out))]
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> std::io::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        match line.parse::<UserCommand>() {
            Ok(command) => self.execute(command, out),
            Err(e) => {
                warn!(error = %e, "Could not parse command");
                writeln!(out, "error: {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Executes a parsed command, writing the response to `out`.
    #[instrument(skip(self, out))]
    pub fn execute(&mut self, command: UserCommand, out: &mut impl Write) -> std::io::Result<Flow> {
        let show_indices = *self.config.show_indices();
        match command {
            UserCommand::Play(cell) => match self.engine.play(cell) {
                Ok(outcome) => {
                    writeln!(out, "{}", render_outcome(&outcome))?;
                    if outcome.is_placed() {
                        writeln!(out, "{}", render_position(&self.engine, show_indices))?;
                    }
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            UserCommand::Jump(index) => match self.engine.jump_to(index) {
                Ok(()) => {
                    writeln!(out, "At {}", GameEngine::move_label(index))?;
                    writeln!(out, "{}", render_position(&self.engine, show_indices))?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            UserCommand::Restart => {
                self.engine.restart();
                writeln!(out, "{}", render_position(&self.engine, show_indices))?;
            }
            UserCommand::Show => {
                writeln!(out, "{}", render_position(&self.engine, show_indices))?;
            }
            UserCommand::History => {
                let entries = self.engine.history();
                writeln!(out, "{}", render_history(&entries, self.engine.current_move()))?;
            }
            UserCommand::Json => {
                let json = serde_json::to_string_pretty(&self.engine.snapshot())
                    .map_err(std::io::Error::other)?;
                writeln!(out, "{json}")?;
            }
            UserCommand::Help => writeln!(out, "{HELP}")?,
            UserCommand::Quit => {
                debug!("Quit requested");
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Runs until `quit` or end of input.
    ///
    /// The prompt is written before each line when `interactive` is set.
    #[instrument(skip(self, input, out))]
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write, interactive: bool) -> std::io::Result<()> {
        info!("Session started");
        if interactive {
            writeln!(out, "{}", render_position(&self.engine, *self.config.show_indices()))?;
            write!(out, "{}", self.config.prompt())?;
            out.flush()?;
        }

        for line in input.lines() {
            if self.handle_line(&line?, out)? == Flow::Quit {
                break;
            }
            if interactive {
                write!(out, "{}", self.config.prompt())?;
                out.flush()?;
            }
        }
        if interactive {
            writeln!(out)?;
        }

        info!(moves = self.engine.current_move(), "Session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{GameStatus, Player};

    fn run_lines(session: &mut Session, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            session.handle_line(line, &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut session = Session::new(AppConfig::default());
        assert_eq!(run_lines(&mut session, &["", "   "]), "");
    }

    #[test]
    fn test_play_and_win() {
        let mut session = Session::new(AppConfig::default());
        let text = run_lines(&mut session, &["play 0", "4", "play top-center", "5", "play 2"]);
        assert!(text.contains("X takes Top-right (move #5)"));
        assert_eq!(session.engine().status(), GameStatus::Winner(Player::X));

        let text = run_lines(&mut session, &["play 3"]);
        assert_eq!(text, "Nothing happens: X has already won this board\n");
    }

    #[test]
    fn test_errors_are_reported_and_session_continues() {
        let mut session = Session::new(AppConfig::default());
        let text = run_lines(&mut session, &["dance", "jump 3", "play 9"]);
        assert_eq!(
            text,
            "error: Unknown command 'dance' (try 'help')\n\
             error: Move 3 is out of range (history has 1 entries)\n\
             error: Cell 9 is off the board (cells are 0-8)\n"
        );
        assert_eq!(session.engine().len(), 1);
    }

    #[test]
    fn test_quit_stops_run() {
        let mut session = Session::new(AppConfig::default());
        let input = "play 4\nquit\nplay 0\n".as_bytes();
        let mut out = Vec::new();
        session.run(input, &mut out, false).unwrap();
        assert_eq!(session.engine().current_move(), 1);
    }

    #[test]
    fn test_jump_forward_uses_neutral_wording() {
        let mut session = Session::new(AppConfig::default());
        run_lines(&mut session, &["play 0", "play 4", "play 8", "jump 0"]);
        let text = run_lines(&mut session, &["jump 2"]);
        assert!(text.starts_with("At Move #2\n"));
        assert!(!text.contains("Back to"));
    }

    #[test]
    fn test_interactive_end_of_input_ends_line() {
        let mut session = Session::new(AppConfig::default());
        let mut out = Vec::new();
        session.run("play 4\n".as_bytes(), &mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("> \n"));
    }
}
