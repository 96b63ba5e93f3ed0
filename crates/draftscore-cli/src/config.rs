//! Configuration for the draftscore CLI.
//!
//! Loaded from an optional `draftscore.yaml` / `draftscore.json`. Every
//! field has a default, so an empty file is a valid configuration. Command
//! line flags override file values.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use draftscore_core::RubricId;

/// Errors that can occur while loading the CLI configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    ValidationError(String),
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Rubric used when `--rubric` is not given
    #[serde(default = "default_rubric")]
    pub default_rubric: RubricId,

    /// Total score at or above which `score` exits 0
    #[serde(default = "default_min_score")]
    pub min_score: u32,

    /// Number of issues printed in text output
    #[serde(default = "default_issue_limit")]
    pub issue_limit: usize,

    /// Print dimension indicators by default
    #[serde(default)]
    pub explain: bool,
}

fn default_rubric() -> RubricId {
    RubricId::Adr
}

fn default_min_score() -> u32 {
    70
}

fn default_issue_limit() -> usize {
    5
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_rubric: default_rubric(),
            min_score: default_min_score(),
            issue_limit: default_issue_limit(),
            explain: false,
        }
    }
}

impl CliConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty YAML document deserializes as unit, not as an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load by extension: `.json` is JSON, anything else is YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            Self::from_json_file(path)
        } else {
            Self::from_yaml_file(path)
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_score > 100 {
            return Err(ConfigError::ValidationError(format!(
                "min_score must be between 0 and 100, got {}",
                self.min_score
            )));
        }
        Ok(())
    }
}
