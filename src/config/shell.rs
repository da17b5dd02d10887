//! Interactive shell configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Interactive shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Prompt printed before each command
    pub prompt: String,

    /// Maximum result lines printed per command (0 for unlimited)
    pub max_results: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "huaolelo> ".to_string(),
            max_results: 0,
        }
    }
}

impl Validate for ShellConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.prompt.contains('\n') {
            return Err(ConfigError::ValidationError(
                "shell.prompt must be a single line".to_string(),
            ));
        }
        Ok(())
    }
}
