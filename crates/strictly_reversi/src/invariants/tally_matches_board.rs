//! Stone tally invariant: running counts agree with the board.

use super::super::{Color, Game};
use super::Invariant;
use tracing::warn;

/// Invariant: Each color's tally equals its pieces on the board.
///
/// Together these imply the two tallies sum to the number of occupied cells.
pub struct TallyMatchesBoardInvariant;

impl Invariant<Game> for TallyMatchesBoardInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let black = board.count(Color::Black);
        let white = board.count(Color::White);

        let valid = game.black_stone_count() as usize == black
            && game.white_stone_count() as usize == white;
        if !valid {
            warn!(
                black_tally = game.black_stone_count(),
                white_tally = game.white_stone_count(),
                black,
                white,
                "Stone tally out of step with board"
            );
        }
        valid
    }

    fn description() -> &'static str {
        "Stone tallies match the pieces on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(TallyMatchesBoardInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_capture_keeps_tally() {
        let mut game = Game::new();
        game.make_move(Color::Black, 3, 3).unwrap();
        game.make_move(Color::White, 3, 4).unwrap();
        game.make_move(Color::Black, 4, 3).unwrap();
        game.make_move(Color::White, 4, 4).unwrap();
        game.make_move(Color::Black, 4, 5).unwrap();

        assert!(TallyMatchesBoardInvariant::holds(&game));
        assert_eq!(
            (game.black_stone_count() + game.white_stone_count()) as usize,
            game.board().occupied()
        );
    }

    #[test]
    fn test_stale_tally_violates() {
        let mut game = Game::new();
        game.make_move(Color::Black, 4, 4).unwrap();

        game.black_stones = 0;

        assert!(!TallyMatchesBoardInvariant::holds(&game));
    }
}
