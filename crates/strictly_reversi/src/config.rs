//! Rule configuration for a reversi game.

use super::rules::OPENING_MOVES;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How a game's first pieces reach the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OpeningRule {
    /// Players fill the four centre cells over the first four moves.
    #[default]
    Placement,
    /// The four centre cells start filled in the standard diagonal pattern
    /// and the first move must already capture.
    Preset,
}

impl OpeningRule {
    /// Turn counter a fresh game starts at under this rule.
    pub fn initial_turn(self) -> u32 {
        match self {
            OpeningRule::Placement => 0,
            OpeningRule::Preset => OPENING_MOVES,
        }
    }
}

/// Rule configuration for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Opening variant.
    #[serde(default)]
    opening: OpeningRule,

    /// Check invariants on the after-state of every move before committing it.
    #[serde(default = "default_verify_invariants")]
    verify_invariants: bool,
}

fn default_verify_invariants() -> bool {
    cfg!(debug_assertions)
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            opening: OpeningRule::default(),
            verify_invariants: default_verify_invariants(),
        }
    }
}

impl RulesConfig {
    /// Returns this config with a different opening rule.
    pub fn with_opening(mut self, opening: OpeningRule) -> Self {
        self.opening = opening;
        self
    }

    /// Returns this config with invariant checking switched on or off.
    pub fn with_verify_invariants(mut self, verify: bool) -> Self {
        self.verify_invariants = verify;
        self
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(
            opening = %config.opening,
            verify_invariants = config.verify_invariants,
            "Parsed rules config"
        );
        Ok(config)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(opening = %config.opening, "Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = RulesConfig::from_toml_str("").unwrap();
        assert_eq!(config, RulesConfig::default());
        assert_eq!(*config.opening(), OpeningRule::Placement);
    }

    #[test]
    fn test_parse_preset_opening() {
        let config = RulesConfig::from_toml_str(
            r#"
            opening = "preset"
            verify_invariants = true
            "#,
        )
        .unwrap();
        assert_eq!(*config.opening(), OpeningRule::Preset);
        assert!(*config.verify_invariants());
    }

    #[test]
    fn test_unknown_opening_is_rejected() {
        let err = RulesConfig::from_toml_str(r#"opening = "random""#).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_builders() {
        let config = RulesConfig::default()
            .with_opening(OpeningRule::Preset)
            .with_verify_invariants(false);
        assert_eq!(*config.opening(), OpeningRule::Preset);
        assert!(!*config.verify_invariants());
    }
}
