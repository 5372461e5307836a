//! Alternating turn invariant: players alternate Black, White, Black, ...

use super::super::{Color, Game};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Black moves on even turn numbers and White on odd ones, so the
/// mover always follows from the turn counter.
pub struct AlternatingTurnInvariant;

fn mover_for_turn(turn: u32) -> Color {
    if turn % 2 == 0 {
        Color::Black
    } else {
        Color::White
    }
}

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        let first_turn = game.turn().saturating_sub(history.len() as u32);

        let history_alternates = history
            .iter()
            .zip(first_turn..)
            .all(|(mov, turn)| mov.player == mover_for_turn(turn));

        history_alternates && game.next_to_move() == mover_for_turn(game.turn())
    }

    fn description() -> &'static str {
        "Players alternate turns (Black, White, Black, ...)"
    }
}
