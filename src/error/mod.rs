//! Error module for Huaolelo.
//!
//! This module provides the error handling framework for the whole crate:
//! one error enum per concern, a crate-level enum aggregating them, and a
//! pluggable reporter that routes errors to the tracing framework.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use thiserror::Error;

use crate::data_structures::{KeypadError, WordTrieError};

pub mod config;
pub mod dictionary;
pub mod store;

/// Result type alias used throughout Huaolelo.
pub type HuaoleloResult<T> = Result<T, HuaoleloError>;

/// Core error enum for Huaolelo.
#[derive(Error, Debug)]
pub enum HuaoleloError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A dictionary action was rejected.
    #[error(transparent)]
    Dictionary(#[from] dictionary::DictionaryError),

    /// Reading or writing a dictionary file failed.
    #[error(transparent)]
    Store(#[from] store::StoreError),

    /// A trie query produced a diagnostic.
    #[error(transparent)]
    Trie(#[from] WordTrieError),

    /// A keypad layout could not be built.
    #[error("Keypad error: {0}")]
    Keypad(#[from] KeypadError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: HuaoleloError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<E: Into<HuaoleloError>, S: Into<String>>(error: E, component: S) -> Self {
        Self {
            error: error.into(),
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// Error reporter that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Holder for the process-wide error reporter.
#[derive(Debug, Default)]
pub struct ErrorReporting {
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl ErrorReporting {
    /// Set the reporter errors are routed to.
    pub fn set_reporter(&mut self, reporter: Arc<dyn ErrorReporter>) {
        self.reporter = Some(reporter);
    }

    /// Report an error with context.
    pub fn report(&self, context: ErrorContext) {
        if let Some(reporter) = &self.reporter {
            reporter.report(context);
        } else {
            // Fallback to standard error output if no reporter is configured
            eprintln!("Error: {context}");
        }
    }
}

static ERROR_REPORTING: Lazy<RwLock<ErrorReporting>> = Lazy::new(Default::default);

/// Set the global error reporter.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    ERROR_REPORTING.write().set_reporter(reporter);
}

/// Report an error through the global error reporter.
pub fn report_error(context: ErrorContext) {
    ERROR_REPORTING.read().report(context);
}
