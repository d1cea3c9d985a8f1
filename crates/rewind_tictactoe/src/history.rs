//! Linear move history with branch-overwrite.
//!
//! The history is a single timeline of board snapshots. Entry 0 is always the
//! empty board and entry `k` is the board after `k` moves. Branching from an
//! earlier entry drops everything after it before the new board is appended,
//! so there is never more than one future.

use super::{Board, MoveLabel};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One row of the jump list: history index, its label and the board at that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct HistoryEntry {
    /// History index (number of moves made).
    index: usize,
    /// Display label for the index.
    label: MoveLabel,
    /// Board snapshot at this index.
    board: Board,
}

/// Ordered board snapshots along the active timeline.
///
/// Only reachable through [`GameEngine`](crate::GameEngine), which always
/// builds it with [`History::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct History {
    boards: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Number of entries, including the starting board.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false; the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Board after `index` moves.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// All snapshots in order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    #[cfg(test)]
    pub(crate) fn boards_mut(&mut self) -> &mut Vec<Board> {
        &mut self.boards
    }

    /// Most recent snapshot on the timeline.
    #[cfg(test)]
    pub(crate) fn latest(&self) -> &Board {
        // Never empty: `new` seeds one board and `branch_from` keeps at least `from + 1`.
        &self.boards[self.boards.len() - 1]
    }

    /// Keeps entries `0..=from`, appends `board`, and returns how many entries were dropped.
    ///
    /// `from` must be a valid index; the engine validates its cursor before calling.
    #[instrument(skip(self, board), fields(len = self.boards.len()))]
    pub fn branch_from(&mut self, from: usize, board: Board) -> usize {
        let keep = from + 1;
        let discarded = self.boards.len().saturating_sub(keep);
        self.boards.truncate(keep);
        self.boards.push(board);
        if discarded > 0 {
            debug!(from, discarded, "Overwrote future history");
        }
        discarded
    }

    /// Drops everything but the starting board.
    pub fn reset(&mut self) {
        self.boards.clear();
        self.boards.push(Board::new());
    }

    /// Jump-list entries in ascending index order.
    pub fn entries(&self) -> impl Iterator<Item = HistoryEntry> + '_ {
        self.boards
            .iter()
            .enumerate()
            .map(|(index, board)| HistoryEntry::new(index, MoveLabel::for_index(index), *board))
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
