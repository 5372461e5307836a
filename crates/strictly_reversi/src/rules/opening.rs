//! Opening placement rules.
//!
//! The first moves of a game do not capture. They fill the four centre
//! cells, one per move, in any order.

use super::super::Position;

/// Number of opening moves that bypass capture rules.
pub const OPENING_MOVES: u32 = 4;

/// Lower of the two central row/column indices.
const CENTER_LOW: usize = 3;
/// Upper of the two central row/column indices.
const CENTER_HIGH: usize = 4;

/// Checks if `pos` is one of the four centre cells.
pub fn is_center(pos: Position) -> bool {
    let central = |i: usize| i == CENTER_LOW || i == CENTER_HIGH;
    central(pos.x()) && central(pos.y())
}

/// The four centre cells in row-major order.
pub fn center_cells() -> impl Iterator<Item = Position> {
    Position::all().filter(|pos| is_center(*pos))
}
