//! Dictionary file import and export.
//!
//! The persisted format is a single flat JSON object mapping each word to its
//! integer frequency, with no nesting or metadata:
//!
//! ```json
//! { "cat": 5, "car": 4 }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::store::StoreError;

/// Result type for dictionary file operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Reads and validates a dictionary file.
///
/// # Errors
///
/// * [`StoreError::CannotOpen`] if the file cannot be read
/// * [`StoreError::Malformed`] if it is not a flat object of words to
///   positive integers
pub fn load(path: &Path) -> StoreResult<BTreeMap<String, u64>> {
    let text = fs::read_to_string(path).map_err(|source| StoreError::CannotOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse(&text).map_err(|reason| StoreError::Malformed {
        path: path.to_path_buf(),
        reason,
    })?;

    info!(path = %path.display(), words = entries.len(), "loaded dictionary file");
    Ok(entries)
}

/// Like [`load`], but a missing file is an empty dictionary.
pub fn load_or_default(path: &Path) -> StoreResult<BTreeMap<String, u64>> {
    match load(path) {
        Err(StoreError::CannotOpen { source, .. }) if source.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "dictionary file missing, starting empty");
            Ok(BTreeMap::new())
        }
        other => other,
    }
}

/// Writes `entries` as a flat JSON object, keys in lexicographic order.
pub fn save(path: &Path, entries: &BTreeMap<String, u64>, pretty: bool) -> StoreResult<()> {
    let mut text = if pretty {
        serde_json::to_string_pretty(entries)?
    } else {
        serde_json::to_string(entries)?
    };
    text.push('\n');

    fs::write(path, text).map_err(|source| StoreError::CannotWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), words = entries.len(), "saved dictionary file");
    Ok(())
}

/// Parses dictionary text, describing the first problem found.
pub fn parse(text: &str) -> Result<BTreeMap<String, u64>, String> {
    let document: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    let Value::Object(object) = document else {
        return Err("top level must be an object of word to frequency".to_string());
    };

    let mut entries = BTreeMap::new();
    let mut total: u64 = 0;
    for (word, value) in object {
        if word.is_empty() {
            return Err("empty word".to_string());
        }
        match value.as_u64() {
            Some(freq) if freq > 0 => {
                total = total
                    .checked_add(freq)
                    .ok_or_else(|| format!("frequency total exceeds {}", u64::MAX))?;
                entries.insert(word, freq);
            }
            _ => return Err(format!("frequency of '{word}' is not a positive integer: {value}")),
        }
    }

    Ok(entries)
}
