//! Plain-text rendering of engine outputs.
//!
//! Nothing here decides anything about the game; it only formats what the
//! engine reports.

use rewind_tictactoe::rules::winning_line;
use rewind_tictactoe::{Board, GameEngine, HistoryEntry, PlayOutcome, Player, Position, Square};

/// Renders a board as a 3x3 grid.
///
/// Empty cells show their index when `show_indices` is set, otherwise a blank.
pub fn render_board(board: &Board, show_indices: bool) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    match board.square(index) {
                        Some(Square::Occupied(Player::X)) => " X ".to_string(),
                        Some(Square::Occupied(Player::O)) => " O ".to_string(),
                        _ if show_indices => format!(" {index} "),
                        _ => "   ".to_string(),
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// Renders the board at the cursor followed by the status line.
pub fn render_position(engine: &GameEngine, show_indices: bool) -> String {
    let mut out = render_board(engine.current_board(), show_indices);
    out.push('\n');
    out.push_str(&engine.status_text());
    if let Some((_, line)) = winning_line(engine.current_board()) {
        let names: Vec<&str> = line.iter().map(Position::label).collect();
        out.push_str(&format!(" ({})", names.join(", ")));
    }
    out
}

/// Renders the jump list, marking the entry at the cursor.
pub fn render_history(entries: &[HistoryEntry], current_move: usize) -> String {
    entries
        .iter()
        .map(|entry| {
            let marker = if *entry.index() == current_move { '>' } else { ' ' };
            format!("{marker} {:>2}. {}", entry.index(), entry.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line description of a play outcome.
pub fn render_outcome(outcome: &PlayOutcome) -> String {
    match outcome {
        PlayOutcome::Placed {
            player,
            position,
            move_number,
            discarded: 0,
        } => format!("{player} takes {position} (move #{move_number})"),
        PlayOutcome::Placed {
            player,
            position,
            move_number,
            discarded,
        } => format!(
            "{player} takes {position} (move #{move_number}, {discarded} later move(s) discarded)"
        ),
        PlayOutcome::Ignored(reason) => format!("Nothing happens: {reason}"),
    }
}
