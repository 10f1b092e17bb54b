//! Generator configuration
//!
//! A `GeneratorConfig` can be built in code or read from JSON. Missing
//! fields fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted width or height
pub const MAX_DIMENSION: usize = 4096;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid dimensions {width}x{height}: each side must be between 1 and {MAX_DIMENSION}")]
    InvalidDimensions { width: usize, height: usize },
}

/// Parameters that fully determine a generated dungeon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub max_room_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 79,
            height: 41,
            seed: 0,
            max_room_attempts: 200,
        }
    }
}

impl GeneratorConfig {
    /// Parse a JSON document and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON file and validate it
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = |side: usize| (1..=MAX_DIMENSION).contains(&side);
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }
}
