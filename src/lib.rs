//! Huaolelo Predictive-Text Dictionary Library
//!
//! This library contains the core components of Huaolelo: the word trie and
//! its query algorithms, the dictionary actions front ends call, the JSON
//! dictionary store, the interactive shell, and configuration.
//!
//! # Architecture
//!
//! - [`data_structures::WordTrie`] is the engine. It is synchronous,
//!   single-owner, and reports absence through plain return values.
//! - [`dictionary::Dictionary`] applies user-level preconditions and renders
//!   results as messages.
//! - [`shell::Shell`] and the `huaolelo` binary are thin text front ends.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod shell;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Huaolelo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
///
/// Routes reported errors to the tracing framework.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
