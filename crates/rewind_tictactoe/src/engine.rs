//! The game engine: history, cursor and the three mutators.
//!
//! [`GameEngine`] is the single source of truth for a session. Callers place
//! marks with [`GameEngine::play`], move the cursor with
//! [`GameEngine::jump_to`] and start over with [`GameEngine::restart`];
//! everything else (board, turn, winner, status, jump list) is derived from
//! the history and cursor on demand.

use super::history::{History, HistoryEntry};
use super::invariants::{EngineInvariants, InvariantSet};
use super::rules::{evaluate_winner, is_draw, winning_line};
use super::{Board, EngineError, GameStatus, MoveLabel, Player, Position};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Behaviour switches for a [`GameEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(prefix = "with_")]
pub struct EngineOptions {
    /// Report [`GameStatus::Draw`] for a full board with no winner.
    ///
    /// When off, a full board keeps reporting the next player.
    pub draw_detection: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            draw_detection: true,
        }
    }
}

/// Why a [`GameEngine::play`] call left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// The board already has a winner.
    GameOver(Player),
    /// The cell already holds a mark.
    Occupied(Position),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::GameOver(winner) => write!(f, "{winner} has already won this board"),
            Rejection::Occupied(pos) => write!(f, "{pos} is already taken"),
        }
    }
}

/// Result of a [`GameEngine::play`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// A mark was placed and appended to history.
    Placed {
        /// Player whose mark was placed.
        player: Player,
        /// Cell that received the mark.
        position: Position,
        /// History index of the new board.
        move_number: usize,
        /// Future entries dropped by branching from a rewound position.
        discarded: usize,
    },
    /// Nothing changed.
    Ignored(Rejection),
}

impl PlayOutcome {
    /// Returns true if the board changed.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed { .. })
    }
}

/// Serializable view of everything the presentation layer reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct EngineSnapshot {
    /// Board at the cursor.
    board: Board,
    /// Cursor position.
    current_move: usize,
    /// Whether X moves next.
    x_is_next: bool,
    /// Status of the board at the cursor.
    status: GameStatus,
    /// Completed line on the board at the cursor, if any.
    winning_line: Option<[Position; 3]>,
    /// Jump list.
    history: Vec<HistoryEntry>,
}

/// Tic-tac-toe session with linear history and time travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) history: History,
    pub(crate) current_move: usize,
    options: EngineOptions,
}

impl GameEngine {
    /// Creates an engine at the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    /// Creates an engine with explicit options.
    #[instrument]
    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            history: History::new(),
            current_move: 0,
            options,
        }
    }

    /// Options this engine was built with.
    pub fn options(&self) -> EngineOptions {
        self.options
    }

    // ─────────────────────────────────────────────────────────────
    //  Mutators
    // ─────────────────────────────────────────────────────────────

    /// Attempts to place the next player's mark at `cell` (0-8).
    ///
    /// Playing on an occupied cell or on a board that already has a winner is
    /// not an error: the call returns [`PlayOutcome::Ignored`] and changes
    /// nothing. Playing from a rewound position discards every entry after
    /// the cursor before the new board is appended.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CellOutOfRange`] if `cell > 8`.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, cell: usize) -> Result<PlayOutcome, EngineError> {
        let position = Position::from_index(cell).ok_or_else(|| EngineError::cell_out_of_range(cell))?;
        Ok(self.place(position))
    }

    /// Same as [`play`](Self::play) for a named cell, which cannot be off the board.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn place(&mut self, position: Position) -> PlayOutcome {
        let board = *self.current_board();

        if let Some(winner) = evaluate_winner(&board) {
            debug!(%winner, "Board already won, ignoring move");
            return PlayOutcome::Ignored(Rejection::GameOver(winner));
        }
        if !board.is_empty(position) {
            debug!(%position, "Cell occupied, ignoring move");
            return PlayOutcome::Ignored(Rejection::Occupied(position));
        }

        let player = self.next_player();
        let next = board.with_mark(position, player);
        let discarded = self.history.branch_from(self.current_move, next);
        self.current_move = self.history.len() - 1;

        info!(
            %player,
            %position,
            move_number = self.current_move,
            discarded,
            "Mark placed"
        );
        self.debug_check();

        PlayOutcome::Placed {
            player,
            position,
            move_number: self.current_move,
            discarded,
        }
    }

    /// Moves the cursor to history entry `index` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MoveOutOfRange`] if `index` is not an existing
    /// entry; the cursor is left where it was.
    #[instrument(skip(self), fields(current_move = self.current_move, len = self.history.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), EngineError> {
        if index >= self.history.len() {
            return Err(EngineError::move_out_of_range(index, self.history.len()));
        }
        self.current_move = index;
        info!(current_move = index, "Jumped");
        self.debug_check();
        Ok(())
    }

    /// Clears history back to the empty board.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.history.reset();
        self.current_move = 0;
        info!("Game restarted");
        self.debug_check();
    }

    // ─────────────────────────────────────────────────────────────
    //  Derived reads
    // ─────────────────────────────────────────────────────────────

    /// Board at the cursor.
    pub fn current_board(&self) -> &Board {
        // `current_move < history.len()` is an engine invariant.
        &self.history.boards()[self.current_move]
    }

    /// Board at history entry `index`, if it exists.
    pub fn board_at(&self, index: usize) -> Option<&Board> {
        self.history.get(index)
    }

    /// Cursor position (number of moves on the shown board).
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Number of history entries, including the starting board.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; history starts with the empty board.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// True when X moves next at the cursor.
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// Player who moves next at the cursor.
    pub fn next_player(&self) -> Player {
        Player::to_move_after(self.current_move)
    }

    /// Winner of the board at the cursor.
    pub fn winner(&self) -> Option<Player> {
        evaluate_winner(self.current_board())
    }

    /// Status of the board at the cursor.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(winner) = evaluate_winner(board) {
            GameStatus::Winner(winner)
        } else if self.options.draw_detection && is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(self.next_player())
        }
    }

    /// Human-readable status line.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// Label for history entry `index`.
    pub fn move_label(index: usize) -> MoveLabel {
        MoveLabel::for_index(index)
    }

    /// Jump list, one entry per history index in ascending order.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.entries().collect()
    }

    /// Everything the presentation layer needs in one value.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            board: *self.current_board(),
            current_move: self.current_move,
            x_is_next: self.x_is_next(),
            status: self.status(),
            winning_line: winning_line(self.current_board()).map(|(_, line)| line),
            history: self.history(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Invariants
    // ─────────────────────────────────────────────────────────────

    /// Checks all engine invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvariantViolation`] listing every failed invariant.
    #[instrument(skip(self))]
    pub fn verify(&self) -> Result<(), EngineError> {
        EngineInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            EngineError::InvariantViolation(descriptions)
        })
    }

    fn debug_check(&self) {
        if cfg!(debug_assertions) {
            if let Err(e) = self.verify() {
                panic!("{e}");
            }
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
