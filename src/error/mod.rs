//! Error module for Trieful.
//!
//! This module provides the application-level error type for the `trieful`
//! tool. Trie operations report their own [`TrieError`]; configuration
//! loading reports [`config::ConfigError`]. Both convert into
//! [`TriefulError`] so the binary can propagate everything with `?`.

use std::fmt::{Display, Formatter};

use thiserror::Error;

pub use crate::data_structures::trie::TrieError;

pub mod config;

/// Result type alias used throughout the Trieful tool.
pub type TriefulResult<T> = Result<T, TriefulError>;

/// Core error enum for Trieful.
#[derive(Error, Debug)]
pub enum TriefulError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors reported by trie operations.
    #[error("Trie error: {0}")]
    Trie(#[from] TrieError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors while rendering output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// An error together with where it happened.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: TriefulError,

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
    pub fn new<S: Into<String>>(error: TriefulError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Logs the error through `tracing` and hands it back.
    pub fn report(self) -> TriefulError {
        tracing::error!(
            error = %self.error,
            component = %self.component,
            details = self.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
        self.error
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
