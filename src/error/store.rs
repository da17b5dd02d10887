//! Dictionary file error module.
//!
//! Errors raised while importing or exporting the flat `word -> frequency`
//! JSON file.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a dictionary file.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The file could not be opened or read.
    #[error("cannot open {path}: {source}")]
    CannotOpen {
        /// The file that was requested
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// The file was read but is not a flat word to positive integer mapping.
    #[error("malformed dictionary {path}: {reason}")]
    Malformed {
        /// The file that was parsed
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// The file could not be written.
    #[error("cannot write {path}: {source}")]
    CannotWrite {
        /// The file that was targeted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// The dictionary could not be encoded.
    #[error("cannot encode dictionary: {0}")]
    Encode(#[from] serde_json::Error),
}
