use std::fs;
use std::path::Path;

use crate::error::ConfigError;

const DEFAULT_DIFFICULTY: u32 = 3;
const DEFAULT_RANDOM_MOVE_THRESHOLD: u32 = 1;
const DEFAULT_MAX_PLIES: u32 = 200;

/// Settings for the computer opponent. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth in plies.
    pub difficulty: u32,
    /// At or below this difficulty the AI plays a random legal move instead of searching.
    pub random_move_threshold: u32,
    /// Seed for the random tier; entropy when absent.
    pub seed: Option<u64>,
    /// Ply limit for self-play in the demo binary.
    pub max_plies: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            difficulty: DEFAULT_DIFFICULTY,
            random_move_threshold: DEFAULT_RANDOM_MOVE_THRESHOLD,
            seed: None,
            max_plies: DEFAULT_MAX_PLIES,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<EngineConfig, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<EngineConfig, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config = EngineConfig::from_json(&text)?;
        log::debug!("Loaded engine config: {:?}", config);
        Ok(config)
    }

    pub fn with_difficulty(mut self, difficulty: u32) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn uses_random_moves(&self) -> bool {
        self.difficulty <= self.random_move_threshold
    }
}
