use std::path::Path;

use crate::ai::TieBreak;
use crate::error::ConfigError;
use crate::game::{Mark, DEFAULT_HEIGHT, DEFAULT_WIDTH, LINE_LENGTH};

/// Deepest look-ahead accepted from configuration. The search is
/// exponential in ply with no pruning.
pub const MAX_PLY: usize = 8;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub agent: AgentConfig,
}

/// Board dimensions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Settings for the automated player.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Side the agent plays; the human takes the other one.
    pub side: Mark,
    pub tie_break: TieBreak,
    /// Half-moves of look-ahead
    pub ply: usize,
    /// Seed for `random` tie-breaks; OS entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            side: Mark::O,
            tie_break: TieBreak::Random,
            ply: 4,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be > 0".into()));
        }
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be > 0".into()));
        }
        if self.board.width < LINE_LENGTH && self.board.height < LINE_LENGTH {
            return Err(ConfigError::Validation(format!(
                "board must be at least {LINE_LENGTH} wide or {LINE_LENGTH} tall"
            )));
        }
        if !self.agent.side.is_side() {
            return Err(ConfigError::Validation(
                "agent.side must be \"X\" or \"O\"".into(),
            ));
        }
        if self.agent.ply > MAX_PLY {
            return Err(ConfigError::Validation(format!(
                "agent.ply must be <= {MAX_PLY}"
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
