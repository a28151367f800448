use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DrillConfig, ExpandConfig, ScoreConfig};
use crate::errors::ConfigError;

/// Aggregate configuration for the whole query path: drill, expand, score.
///
/// Loadable from TOML; always validate before use so a bad config fails at
/// construction rather than mid-query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub drill: DrillConfig,
    pub expand: ExpandConfig,
    pub score: ScoreConfig,
}

impl RetrievalConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.drill.validate()?;
        self.expand.validate()?;
        self.score.validate()
    }

    /// Parse and validate from a TOML string.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML config file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}
