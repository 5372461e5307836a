//! Line capture resolution.
//!
//! A placement captures every maximal run of opponent pieces that starts
//! next to the placed piece and is closed off by a piece of the placing
//! color. Runs that reach the board edge or an empty cell capture nothing.

use super::super::{Board, Cell, Color, Direction, Position};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Walks from `origin` in `direction` and returns the opponent run it brackets.
///
/// The result is empty unless the contiguous opponent run is followed
/// immediately by a piece of `color`. The origin cell itself is not inspected.
pub fn scan_direction(
    board: &Board,
    origin: Position,
    color: Color,
    direction: Direction,
) -> Vec<Position> {
    let opponent = color.opponent();
    let mut run = Vec::new();
    let mut cursor = origin.step(direction);

    while let Some(pos) = cursor {
        match board.get(pos) {
            Cell::Occupied(c) if c == opponent => {
                run.push(pos);
                cursor = pos.step(direction);
            }
            Cell::Occupied(_) => return run,
            Cell::Empty => break,
        }
    }

    Vec::new()
}

/// Finds every position that would flip if `color` were placed at `pos`.
///
/// Does not look at whether `pos` itself is free; callers check occupancy.
#[instrument(skip(board))]
pub fn captured_positions(board: &Board, pos: Position, color: Color) -> Vec<Position> {
    Direction::iter()
        .flat_map(|direction| scan_direction(board, pos, color, direction))
        .collect()
}

/// Checks if placing `color` at `pos` captures at least one piece.
pub fn has_capture(board: &Board, pos: Position, color: Color) -> bool {
    Direction::iter().any(|direction| !scan_direction(board, pos, color, direction).is_empty())
}

/// Counts how many pieces placing `color` at `pos` would flip.
pub fn count_captures(board: &Board, pos: Position, color: Color) -> usize {
    captured_positions(board, pos, color).len()
}

/// Places `color` at `pos` and flips the given captured positions.
///
/// `captured` is expected to come from [`captured_positions`] on the same board.
pub fn execute_captures(board: &mut Board, pos: Position, color: Color, captured: &[Position]) {
    board.place(pos, color);
    for &flip in captured {
        board.place(flip, color);
    }
}
