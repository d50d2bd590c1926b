//! Trieful Library
//!
//! This library contains a generalized prefix tree (trie) that maps paths to
//! stored values, together with the file and environment configuration used
//! by the `trieful` command line tool. The library can be used on its own as
//! a dependency by other projects.
//!
//! # Architecture
//!
//! - Paths are split into components by a pluggable key codec
//! - Every node's value is maintained by a configurable store strategy
//! - Tries with the same configuration can be merged and combined
//! - Explicit error types with propagation through `Result`

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Trieful.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
