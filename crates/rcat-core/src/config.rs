//! Configuration for the recipe catalog.
//!
//! - [`StorageConfig`] - where the catalog lives and how it is written
//! - [`PromptConfig`] - interactive prompt settings
//! - [`Config`] - root configuration combining both
//!
//! Every section uses `#[serde(default)]`, so a config file only needs the
//! keys it overrides.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest accepted indentation width for the catalog file.
pub const MAX_INDENT: usize = 16;

/// Settings for the on-disk catalog.
///
/// # Examples
///
/// ```
/// use rcat_core::StorageConfig;
///
/// let config = StorageConfig::default();
/// assert_eq!(config.data_file, "recipes.json");
/// assert_eq!(config.indent, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Catalog file loaded at startup and written on save.
    pub data_file: Utf8PathBuf,

    /// Spaces per indentation level in the written file.
    pub indent: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: Utf8PathBuf::from("recipes.json"),
            indent: 4,
        }
    }
}

/// Settings for the interactive prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Word that ends ingredient entry. Compared case-insensitively.
    pub done_sentinel: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            done_sentinel: "done".to_owned(),
        }
    }
}

/// Root configuration for rcat.
///
/// # Examples
///
/// ```
/// use rcat_core::Config;
///
/// let config: Config = serde_json::from_str(r#"{"storage": {"indent": 2}}"#).unwrap();
/// assert_eq!(config.storage.indent, 2);
/// assert_eq!(config.prompt.done_sentinel, "done");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog storage configuration.
    pub storage: StorageConfig,

    /// Prompt configuration.
    pub prompt: PromptConfig,
}

impl Config {
    /// Reads and validates a JSON configuration file.
    pub fn from_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks option values that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prompt.done_sentinel.trim().is_empty() {
            return Err(ConfigError::InvalidOption {
                option: "prompt.done_sentinel".to_owned(),
                reason: "must not be empty".to_owned(),
            });
        }
        if self.storage.indent > MAX_INDENT {
            return Err(ConfigError::InvalidOption {
                option: "storage.indent".to_owned(),
                reason: format!("must be at most {MAX_INDENT}"),
            });
        }
        if self.storage.data_file.as_str().is_empty() {
            return Err(ConfigError::InvalidOption {
                option: "storage.data_file".to_owned(),
                reason: "must not be empty".to_owned(),
            });
        }
        Ok(())
    }
}
