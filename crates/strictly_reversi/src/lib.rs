//! Strictly Reversi - rule engine for reversi
//!
//! Pure game logic for an 8x8 line-capture game: move validation,
//! capture resolution, turn tracking and stone tallies. Front-ends,
//! transports and opponents are left to the host.
//!
//! # Architecture
//!
//! - **Types**: [`Color`], [`Cell`], [`Position`], [`Board`]
//! - **Rules**: pure functions for captures, the opening and mobility ([`rules`])
//! - **Contracts**: preconditions that validate a move before anything changes
//! - **Invariants**: properties checked on every candidate after-state
//! - **Game**: the engine that ties them together ([`Game`])
//!
//! # Example
//!
//! ```
//! use strictly_reversi::{Cell, Color, Game};
//!
//! # fn main() -> Result<(), strictly_reversi::MoveError> {
//! let mut game = Game::new();
//!
//! // The first four moves fill the centre.
//! game.make_move(Color::Black, 3, 3)?;
//! game.make_move(Color::White, 3, 4)?;
//! game.make_move(Color::Black, 4, 3)?;
//! game.make_move(Color::White, 4, 4)?;
//!
//! // From then on every move must capture.
//! let outcome = game.make_move(Color::Black, 4, 5)?;
//! assert_eq!(outcome.captured(), 1);
//! assert_eq!(game.cell_at(4, 4), Cell::Occupied(Color::Black));
//! assert_eq!(game.black_stone_count(), 4);
//! assert_eq!(game.white_stone_count(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod direction;
mod game;
mod invariants;
mod phases;
pub mod rules;
mod types;

// Crate-level exports - Core types
pub use direction::Direction;
pub use types::{BOARD_SIZE, Board, Cell, Color, Position};

// Crate-level exports - Actions and errors
pub use action::{Move, MoveError, MoveOutcome};

// Crate-level exports - Game engine
pub use game::Game;
pub use phases::Phase;

// Crate-level exports - Configuration
pub use config::{ConfigError, OpeningRule, RulesConfig};

// Crate-level exports - Contracts
pub use contracts::{
    CapturesPieces, Contract, LegalMove, LegalPlacement, MoveContract, OpeningPlacement,
    PlayersTurn, WithinBounds,
};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, ReversiInvariants, TallyMatchesBoardInvariant,
};
