//! History consistency invariant: the counter and history describe the board.

use super::super::Game;
use super::Invariant;

/// Invariant: History and turn counter agree with the board.
///
/// - The counter equals the preset turns plus the recorded moves.
/// - Every recorded move's cell is occupied; pieces are flipped, never removed.
/// - The board holds exactly one piece per turn, since captures only recolor.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        let initial_turn = game.config().opening().initial_turn();

        let counter_matches = game.turn() == initial_turn + history.len() as u32;
        let cells_kept = history
            .iter()
            .all(|mov| !game.board().is_empty(mov.position));
        let one_piece_per_turn = game.board().occupied() == game.turn() as usize;

        counter_matches && cells_kept && one_piece_per_turn
    }

    fn description() -> &'static str {
        "Turn counter and move history match the board"
    }
}
