//! Game rules for reversi.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! the game state so contracts can compose them.

pub mod capture;
pub mod mobility;
pub mod opening;

pub use capture::{
    captured_positions, count_captures, execute_captures, has_capture, scan_direction,
};
pub use mobility::{is_legal_placement, legal_moves};
pub use opening::{OPENING_MOVES, center_cells, is_center};
