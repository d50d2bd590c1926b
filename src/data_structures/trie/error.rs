//! Error types for the trie.
//!
//! This module defines the error types that can occur during trie operations.
//! Lookups and removals of missing paths are not errors; they report absence
//! through their return values instead.

/// Errors that can occur in trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum TrieError {
    /// Two tries with different configurations were merged.
    #[error("Cannot merge tries with different {component}: {left} vs {right}")]
    ConfigMismatch {
        /// The configuration part that differs.
        component: &'static str,
        /// The receiver's setting.
        left: String,
        /// The operand's setting.
        right: String,
    },

    /// A value was omitted but the trie has no default value configured.
    #[error("No value given and no default value configured")]
    NoDefaultValue,
}

/// Result type for trie operations
pub type TrieResult<T> = Result<T, TrieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrieError::ConfigMismatch {
            component: "store strategy",
            left: "count".to_string(),
            right: "append".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot merge tries with different store strategy: count vs append"
        );

        let err = TrieError::NoDefaultValue;
        assert_eq!(err.to_string(), "No value given and no default value configured");
    }
}
