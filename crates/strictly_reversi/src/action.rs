//! First-class action types for reversi.
//!
//! Moves are domain events, not side effects. They carry an on-board
//! position, so a `Move` value has already passed the bounds check.

use super::{Color, Phase, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in reversi: a player placing a piece at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Color,
    /// The position where the player places their piece.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Color, position: Position) -> Self {
        Self { player, position }
    }

    /// Builds a move from raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if either coordinate is off the board.
    pub fn at(player: Color, x: i32, y: i32) -> Result<Self, MoveError> {
        Position::new(x, y)
            .map(|position| Self::new(player, position))
            .ok_or(MoveError::OutOfBounds(x, y))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// What a committed move did to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Phase the move was played under.
    pub phase: Phase,
    /// Opponent pieces turned over, in scan order. Always empty in the opening.
    pub flipped: Vec<Position>,
}

impl MoveOutcome {
    /// Number of pieces captured.
    pub fn captured(&self) -> usize {
        self.flipped.len()
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The given color is not the one to move.
    #[display("It's not {}'s turn", _0)]
    OutOfTurn(Color),

    /// Coordinates lie outside the 8x8 board.
    #[display("Coordinates ({}, {}) are off the board", _0, _1)]
    OutOfBounds(i32, i32),

    /// An opening move targeted a cell outside the centre four.
    #[display("Opening moves must be placed in the centre, not at {}", _0)]
    IllegalOpeningMove(Position),

    /// The target cell already holds a piece.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The move would not capture any opponent piece.
    #[display("Move at {} captures no pieces", _0)]
    NoCapture(Position),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
