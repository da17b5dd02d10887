//! Keypad layout configuration module.
//!
//! The layout is a table of digit keys to letters. File and environment keys
//! are strings, so each key must be exactly one digit character.

use super::{ConfigResult, Validate};
use crate::data_structures::word_trie::keypad::STANDARD_LAYOUT;
use crate::data_structures::KeypadLayout;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keypad configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeypadConfig {
    /// Letters per digit key
    pub layout: BTreeMap<String, String>,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            layout: STANDARD_LAYOUT
                .iter()
                .map(|(digit, letters)| (digit.to_string(), letters.to_string()))
                .collect(),
        }
    }
}

impl KeypadConfig {
    /// Builds the keypad layout this configuration describes.
    pub fn to_layout(&self) -> ConfigResult<KeypadLayout> {
        let mut pairs = Vec::with_capacity(self.layout.len());
        for (key, letters) in &self.layout {
            let mut chars = key.chars();
            let digit = match (chars.next(), chars.next()) {
                (Some(digit), None) => digit,
                _ => {
                    return Err(ConfigError::ValueOutOfRange {
                        key: format!("keypad.layout.{key}"),
                        message: "keys must be a single digit".to_string(),
                    })
                }
            };
            pairs.push((digit, letters.as_str()));
        }

        KeypadLayout::from_pairs(pairs).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

impl Validate for KeypadConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.layout.is_empty() {
            return Err(ConfigError::ValidationError(
                "keypad.layout must define at least one key".to_string(),
            ));
        }
        self.to_layout().map(|_| ())
    }
}
