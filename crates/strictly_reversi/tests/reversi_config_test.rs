//! Tests for rules configuration and game persistence.

mod common;

use common::{init_tracing, opened_game};
use std::io::Write;
use strictly_reversi::{Color, Game, Move, OpeningRule, Phase, RulesConfig};

#[test]
fn test_load_config_from_file() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "opening = \"preset\"").unwrap();
    writeln!(file, "verify_invariants = true").unwrap();

    let config = RulesConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.opening(), OpeningRule::Preset);
    assert!(*config.verify_invariants());

    let game = Game::with_config(config);
    assert_eq!(game.phase(), Phase::Main);
    assert_eq!(game.black_stone_count(), 2);
    assert_eq!(game.white_stone_count(), 2);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = RulesConfig::from_file(dir.path().join("rules.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "verify_invariants = \"sometimes\"").unwrap();

    let err = RulesConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_game_survives_json_round_trip() {
    let mut game = opened_game();
    game.make_move(Color::Black, 4, 5).unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let mut restored: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);

    // The restored game keeps playing under the same rules.
    restored.make_move(Color::White, 5, 6).unwrap();
    assert_eq!(restored.turn(), 6);
    assert_eq!(restored.config(), game.config());
}

#[test]
fn test_opening_rule_names() {
    assert_eq!(OpeningRule::Placement.to_string(), "placement");
    assert_eq!(
        serde_json::to_string(&OpeningRule::Preset).unwrap(),
        "\"preset\""
    );
}

#[test]
fn test_off_board_move_fails_to_load() {
    let json = r#"[
        {"player":"Black","position":{"x":3,"y":3}},
        {"player":"White","position":{"x":3,"y":4}},
        {"player":"Black","position":{"x":4,"y":3}},
        {"player":"White","position":{"x":4,"y":4}},
        {"player":"Black","position":{"x":200,"y":0}}
    ]"#;

    let err = serde_json::from_str::<Vec<Move>>(json).unwrap_err();
    assert!(err.to_string().contains("(200, 0) are off the board"), "{}", err);

    // The same history without the stray move loads and replays.
    let saved = serde_json::to_string(opened_game().history()).unwrap();
    let valid: Vec<Move> = serde_json::from_str(&saved).unwrap();
    let game = Game::replay(&valid).unwrap();
    assert_eq!(game.turn(), 4);
}

#[test]
fn test_saved_game_with_off_board_history_is_rejected() {
    let game = opened_game();
    let mut value = serde_json::to_value(&game).unwrap();
    value["history"][0]["position"]["x"] = serde_json::json!(8);

    assert!(serde_json::from_value::<Game>(value).is_err());
}
