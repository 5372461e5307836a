//! Shared helpers for integration tests.

use strictly_reversi::{Color, Game};
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Game after the four opening moves (B 3,3) (W 3,4) (B 4,3) (W 4,4).
pub fn opened_game() -> Game {
    let mut game = Game::new();
    game.make_move(Color::Black, 3, 3).expect("opening move");
    game.make_move(Color::White, 3, 4).expect("opening move");
    game.make_move(Color::Black, 4, 3).expect("opening move");
    game.make_move(Color::White, 4, 4).expect("opening move");
    game
}
