//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Position};
use tracing::instrument;

/// The 8 winning combinations, in the order they are checked.
pub const WINNING_COMBINATIONS: [[Position; 3]; 8] = [
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

/// Iterates every combination fully held by a single mark, in check order.
pub fn completed_lines(board: &Board) -> impl Iterator<Item = (Mark, [Position; 3])> + '_ {
    WINNING_COMBINATIONS.into_iter().filter_map(move |line| {
        let [a, b, c] = line;
        match board.get(a) {
            Cell::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}

/// Returns the first completed combination and the mark holding it.
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, [Position; 3])> {
    completed_lines(board).next()
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark holds all three cells of a combination,
/// `None` otherwise. Combinations are checked rows first, then columns,
/// then diagonals.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}
