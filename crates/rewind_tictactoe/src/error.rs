//! Engine error types.

use tracing::instrument;

/// Error returned by engine operations that can only fail through caller bugs.
///
/// Occupied cells and finished games are not errors; see
/// [`PlayOutcome::Ignored`](crate::PlayOutcome::Ignored).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Jump target does not name an existing history entry.
    #[display("Move {requested} is out of range (history has {len} entries)")]
    MoveOutOfRange {
        /// Requested history index.
        requested: usize,
        /// Number of history entries at the time of the call.
        len: usize,
    },

    /// Cell index is not on the board.
    #[display("Cell {_0} is off the board (cells are 0-8)")]
    CellOutOfRange(usize),

    /// An engine invariant was violated.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}

impl EngineError {
    /// Creates an out-of-range jump error.
    #[track_caller]
    #[instrument]
    pub fn move_out_of_range(requested: usize, len: usize) -> Self {
        let loc = std::panic::Location::caller();
        tracing::error!(
            requested,
            len,
            file = loc.file(),
            line = loc.line(),
            "Jump target outside history"
        );
        Self::MoveOutOfRange { requested, len }
    }

    /// Creates an off-board cell error.
    #[track_caller]
    #[instrument]
    pub fn cell_out_of_range(cell: usize) -> Self {
        let loc = std::panic::Location::caller();
        tracing::error!(
            cell,
            file = loc.file(),
            line = loc.line(),
            "Cell index outside board"
        );
        Self::CellOutOfRange(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EngineError::move_out_of_range(5, 3).to_string(),
            "Move 5 is out of range (history has 3 entries)"
        );
        assert_eq!(
            EngineError::cell_out_of_range(9).to_string(),
            "Cell 9 is off the board (cells are 0-8)"
        );
    }
}
