//! Test modules for Trieful.
//!
//! This module contains the crate-internal testing infrastructure:
//! - Property-based tests for the trie engine using proptest
//! - Configuration loading tests against temporary files
//! - Error conversion tests
//! - Test fixtures and utilities


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, dotted_path_strategy, word_strategy, TestFixture};
