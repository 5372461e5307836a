//! Compass directions used for line scans.

use serde::{Deserialize, Serialize};

/// One of the eight compass directions on the board.
///
/// North is towards row 0, east towards column 7.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Direction {
    /// Towards row 0.
    North,
    /// Towards row 0 and column 7.
    NorthEast,
    /// Towards column 7.
    East,
    /// Towards row 7 and column 7.
    SouthEast,
    /// Towards row 7.
    South,
    /// Towards row 7 and column 0.
    SouthWest,
    /// Towards column 0.
    West,
    /// Towards row 0 and column 0.
    NorthWest,
}

impl Direction {
    /// Unit step `(dx, dy)` for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }
}
