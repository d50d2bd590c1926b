// Copyright (c) 2025 Trieful Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the trie.

use std::fmt;

use super::codec::{KeyCodec, TextKey};
use super::store::StoreStrategy;

/// Configuration for a [`Trie`](super::Trie).
///
/// The codec and store strategy together form the trie's identity for
/// merging: two tries are compatible only when both compare equal. The
/// default value takes no part in that comparison.
pub struct TrieConfig<C = TextKey, V = usize> {
    /// Splits paths into components and joins them back
    pub(crate) codec: C,

    /// Maintains the value slot at every node
    pub(crate) store: StoreStrategy<V>,

    /// Value used when an add or remove is given no explicit value
    pub(crate) default_value: Option<V>,
}

impl<C: Default, V> TrieConfig<C, V> {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - codec: the codec's own default (`TextKey::Chars` for strings)
    /// - store: `StoreStrategy::Append`
    /// - default_value: None
    pub fn new() -> Self {
        Self {
            codec: C::default(),
            store: StoreStrategy::default(),
            default_value: None,
        }
    }
}

impl<C, V> TrieConfig<C, V> {
    /// Create a default configuration around a codec that has no default.
    pub fn for_codec(codec: C) -> Self {
        Self {
            codec,
            store: StoreStrategy::default(),
            default_value: None,
        }
    }

    /// Set the key codec.
    pub fn with_codec(mut self, codec: C) -> Self {
        self.codec = codec;
        self
    }

    /// Set the store strategy.
    pub fn with_store(mut self, store: StoreStrategy<V>) -> Self {
        self.store = store;
        self
    }

    /// Set the value used when adds and removes omit one.
    pub fn with_default_value(mut self, value: V) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Get the key codec
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Get the store strategy
    pub fn store(&self) -> &StoreStrategy<V> {
        &self.store
    }

    /// Get the default value, if configured
    pub fn default_value(&self) -> Option<&V> {
        self.default_value.as_ref()
    }
}

impl<C: KeyCodec, V> TrieConfig<C, V> {
    /// Whether two configurations describe the same trie layout.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.codec == other.codec && self.store == other.store
    }
}

impl<C: Default, V> Default for TrieConfig<C, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clone, V: Clone> Clone for TrieConfig<C, V> {
    fn clone(&self) -> Self {
        Self {
            codec: self.codec.clone(),
            store: self.store.clone(),
            default_value: self.default_value.clone(),
        }
    }
}

impl<C: fmt::Debug, V: fmt::Debug> fmt::Debug for TrieConfig<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieConfig")
            .field("codec", &self.codec)
            .field("store", &self.store.kind())
            .field("default_value", &self.default_value)
            .finish()
    }
}
