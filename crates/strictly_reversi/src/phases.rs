//! Game phases.
//!
//! The phase is not stored; it follows from how many moves have been made.

use super::rules::OPENING_MOVES;
use serde::{Deserialize, Serialize};

/// Which rule set governs the next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// Placement on the centre cells, no captures.
    Opening,
    /// Every move must capture.
    Main,
}

impl Phase {
    /// Phase for a game that has completed `turn` moves.
    pub fn for_turn(turn: u32) -> Self {
        if turn < OPENING_MOVES {
            Phase::Opening
        } else {
            Phase::Main
        }
    }

    /// Returns true during the opening.
    pub fn is_opening(&self) -> bool {
        matches!(self, Phase::Opening)
    }
}
