//! Test modules for Huaolelo.
//!
//! This module contains the cross-component testing infrastructure:
//! - Configuration loading and validation tests
//! - Error reporting tests
//! - Dictionary action tests, including file import and export
//! - Test fixtures and utilities
//!
//! Data structure tests live next to the code they cover.

pub mod dictionary_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, frequency_strategy, word_strategy, TestFixture};
