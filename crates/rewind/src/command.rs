//! Line commands typed at the prompt.

use rewind_tictactoe::Position;
use std::str::FromStr;
use tracing::instrument;

/// One parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    /// Place the next mark at a raw cell index.
    ///
    /// The index is passed to the engine unchecked so off-board numbers
    /// surface as engine errors.
    Play(usize),
    /// Move the cursor to a history entry.
    Jump(usize),
    /// Start over from the empty board.
    Restart,
    /// Print the board and status.
    Show,
    /// Print the jump list.
    History,
    /// Print the engine snapshot as JSON.
    Json,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// Error parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Nothing but whitespace.
    #[display("Empty command")]
    Empty,

    /// First word is not a known command.
    #[display("Unknown command '{_0}' (try 'help')")]
    Unknown(String),

    /// Command needs an argument that was not given.
    #[display("'{command}' needs {expected}")]
    MissingArgument {
        /// Command word as typed.
        command: String,
        /// What the argument should be.
        expected: &'static str,
    },

    /// Argument is neither a number nor a cell name.
    #[display("'{_0}' is not a cell (use 0-8 or a name like 'center')")]
    BadCell(String),

    /// Argument is not a history index.
    #[display("'{_0}' is not a move number")]
    BadMove(String),
}

impl std::error::Error for CommandError {}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  play <cell>    place the next mark (cell 0-8 or a name like 'center')
  <cell>         same as play
  jump <move>    go back (or forward) to a history entry
  restart        clear the board and history
  show           print the board and status
  history        list history entries
  json           print the full game snapshot as JSON
  help           show this list
  quit           leave";

fn parse_cell(arg: &str) -> Result<usize, CommandError> {
    if let Ok(cell) = arg.parse::<usize>() {
        return Ok(cell);
    }
    Position::from_label_or_number(arg)
        .map(Position::to_index)
        .ok_or_else(|| CommandError::BadCell(arg.to_string()))
}

impl FromStr for UserCommand {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let keyword = word.to_lowercase();

        match keyword.as_str() {
            "" => Err(CommandError::Empty),
            "play" | "p" if rest.is_empty() => Err(CommandError::MissingArgument {
                command: word.to_string(),
                expected: "a cell",
            }),
            "play" | "p" => parse_cell(rest).map(UserCommand::Play),
            "jump" | "goto" | "j" if rest.is_empty() => Err(CommandError::MissingArgument {
                command: word.to_string(),
                expected: "a move number",
            }),
            "jump" | "goto" | "j" => rest
                .parse::<usize>()
                .map(UserCommand::Jump)
                .map_err(|_| CommandError::BadMove(rest.to_string())),
            "restart" | "new" => Ok(UserCommand::Restart),
            "show" | "board" => Ok(UserCommand::Show),
            "history" | "moves" => Ok(UserCommand::History),
            "json" => Ok(UserCommand::Json),
            "help" | "?" => Ok(UserCommand::Help),
            "quit" | "exit" | "q" => Ok(UserCommand::Quit),
            _ => parse_cell(line)
                .map(UserCommand::Play)
                .map_err(|_| CommandError::Unknown(word.to_string())),
        }
    }
}
