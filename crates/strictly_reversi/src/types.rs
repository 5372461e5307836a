//! Core domain types for reversi.

use super::action::MoveError;
use super::direction::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board edge length. The board is always square and never resized.
pub const BOARD_SIZE: usize = 8;

/// Color of a player and of the pieces they own.
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
pub enum Color {
    /// Black (moves first).
    Black,
    /// White (moves second).
    White,
}

impl Color {
    /// Returns the opposing color.
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// A cell on the reversi board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No piece.
    #[default]
    Empty,
    /// Cell holds a piece of the given color.
    Occupied(Color),
}

impl Cell {
    /// Returns the color of the piece in this cell, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(color) => Some(color),
        }
    }

    /// Checks if the cell holds no piece.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// An on-board coordinate.
///
/// `x` is the column (growing east), `y` is the row (growing south).
/// A `Position` can only be built for coordinates inside the board, so
/// holding one is proof that bounds were checked. Deserialization goes
/// through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    x: u8,
    y: u8,
}

/// Unchecked coordinates as they arrive over the wire.
#[derive(Deserialize)]
struct RawPosition {
    x: i32,
    y: i32,
}

impl TryFrom<RawPosition> for Position {
    type Error = MoveError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.x, raw.y).ok_or(MoveError::OutOfBounds(raw.x, raw.y))
    }
}

impl Position {
    /// Creates a position, returning `None` when either coordinate is off the board.
    pub fn new(x: i32, y: i32) -> Option<Self> {
        let x = u8::try_from(x).ok()?;
        let y = u8::try_from(y).ok()?;
        if usize::from(x) < BOARD_SIZE && usize::from(y) < BOARD_SIZE {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Column index.
    pub fn x(self) -> usize {
        usize::from(self.x)
    }

    /// Row index.
    pub fn y(self) -> usize {
        usize::from(self.y)
    }

    /// The neighbouring position one step in `direction`, or `None` at the edge.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        Self::new(i32::from(self.x) + dx, i32::from(self.y) + dy)
    }

    /// All 64 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8).flat_map(|y| (0..BOARD_SIZE as u8).map(move |x| Position { x, y }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 8x8 reversi board.
///
/// The board performs no legality checks of its own; it only stores cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed as `cells[x][y]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.at(pos.x(), pos.y())
    }

    /// Gets the cell at raw column and row indices.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not below [`BOARD_SIZE`].
    pub fn at(&self, x: usize, y: usize) -> Cell {
        self.cells[x][y]
    }

    /// Overwrites the cell at `pos` with a piece of `color`.
    pub fn place(&mut self, pos: Position, color: Color) {
        self.cells[pos.x()][pos.y()] = Cell::Occupied(color);
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Iterates over every cell with its position, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::all().map(move |pos| (pos, self.get(pos)))
    }

    /// Number of pieces of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.cells()
            .filter(|(_, cell)| cell.color() == Some(color))
            .count()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells().filter(|(_, cell)| !cell.is_empty()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for x in 0..BOARD_SIZE {
            write!(f, " {}", x)?;
        }
        for y in 0..BOARD_SIZE {
            write!(f, "\n{}", y)?;
            for x in 0..BOARD_SIZE {
                let symbol = match self.cells[x][y] {
                    Cell::Empty => '.',
                    Cell::Occupied(Color::Black) => 'B',
                    Cell::Occupied(Color::White) => 'W',
                };
                write!(f, " {}", symbol)?;
            }
        }
        Ok(())
    }
}
