//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// The eight winning lines, scanned in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and the player who owns it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let sq = board.get(a);
        let player = sq.player()?;
        (sq == board.get(b) && sq == board.get(c)).then_some((player, [a, b, c]))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn evaluate_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, cells: &[Position]) -> Board {
        cells
            .iter()
            .fold(Board::new(), |board, pos| board.with_mark(*pos, player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for player in [Player::X, Player::O] {
            for line in LINES {
                let board = board_with(player, &line);
                assert_eq!(evaluate_winner(&board), Some(player), "line {line:?}");
                assert_eq!(winning_line(&board), Some((player, line)));
            }
        }
    }

    #[test]
    fn test_line_wins_with_noise_elsewhere() {
        // O holds the left column, X is scattered elsewhere.
        let board = board_with(
            Player::O,
            &[Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
        )
        .with_mark(Position::TopCenter, Player::X)
        .with_mark(Position::Center, Player::X)
        .with_mark(Position::BottomRight, Player::X);
        assert_eq!(evaluate_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(evaluate_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter])
            .with_mark(Position::TopRight, Player::O);
        assert_eq!(evaluate_winner(&board), None);
    }
}
