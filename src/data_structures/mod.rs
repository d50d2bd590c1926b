//! Data structures for Trieful.
//!
//! This module contains the generalized prefix tree and the pieces it is
//! configured with: key codecs that split paths into components and store
//! strategies that decide what a path holds.

pub mod trie;

// Re-export common data structures
pub use trie::{
    KeyCodec, Scope, SequenceKey, StoreKind, StoreStrategy, Stored, TextKey, Trie, TrieConfig,
    TrieError, TrieResult,
};
