//! Dictionary file configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the dictionary lives and how it is written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Dictionary file used when no `--dict` is given
    pub path: PathBuf,

    /// Whether exports are pretty-printed
    pub pretty_export: bool,

    /// Whether one-shot mutating commands save the dictionary file afterwards
    pub autosave: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("dictionary.json"),
            pretty_export: true,
            autosave: true,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary.path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
