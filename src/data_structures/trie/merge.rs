// Copyright (c) 2025 Trieful Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Merging tries with other tries and with flat `(path, value)` collections.
//!
//! Merging is ordinary adding: every value of the operand goes through
//! [`Trie::add`] on the receiver, so the receiver's store strategy decides
//! how it combines with what is already there.

use std::borrow::Borrow;

use super::codec::KeyCodec;
use super::error::{TrieError, TrieResult};
use super::Trie;

impl<C: KeyCodec, V: Clone + PartialEq> Trie<C, V> {
    /// Adds every stored value of `other` into this trie.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If every value was added.
    /// * `Err(TrieError::ConfigMismatch)` - If the tries use different codecs
    ///   or store strategies. The receiver is left untouched.
    pub fn merge(&mut self, other: &Self) -> TrieResult<()> {
        self.ensure_compatible(other)?;

        let before = self.len();
        for (path, stored) in other.items() {
            for value in stored.as_slice() {
                self.add(path.borrow(), value.clone());
            }
        }

        tracing::debug!(
            merged = other.len(),
            new_paths = self.len() - before,
            "merged trie"
        );
        Ok(())
    }

    /// Returns a copy of this trie with every stored value of `other` added.
    ///
    /// # Returns
    ///
    /// * `Ok(Trie)` - The combined trie; neither operand changes.
    /// * `Err(TrieError::ConfigMismatch)` - If the tries use different codecs
    ///   or store strategies.
    pub fn combine(&self, other: &Self) -> TrieResult<Self> {
        self.ensure_compatible(other)?;
        let mut combined = self.clone();
        combined.merge(other)?;
        Ok(combined)
    }

    /// Adds every `(path, value)` pair of a flat collection.
    pub fn merge_entries<I, P>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (P, V)>,
        P: Borrow<C::Path>,
    {
        for (path, value) in entries {
            self.add(path.borrow(), value);
        }
    }

    fn ensure_compatible(&self, other: &Self) -> TrieResult<()> {
        let mismatch = if self.config.codec != other.config.codec {
            Some((
                "key codec",
                format!("{:?}", self.config.codec),
                format!("{:?}", other.config.codec),
            ))
        } else if self.config.store != other.config.store {
            Some((
                "store strategy",
                self.config.store.kind().to_string(),
                other.config.store.kind().to_string(),
            ))
        } else {
            None
        };

        match mismatch {
            Some((component, left, right)) => {
                tracing::debug!(component, %left, %right, "refusing to merge tries");
                Err(TrieError::ConfigMismatch {
                    component,
                    left,
                    right,
                })
            }
            None => Ok(()),
        }
    }
}

impl<C, V, P> Extend<(P, V)> for Trie<C, V>
where
    C: KeyCodec,
    V: Clone + PartialEq,
    P: Borrow<C::Path>,
{
    fn extend<I: IntoIterator<Item = (P, V)>>(&mut self, iter: I) {
        self.merge_entries(iter);
    }
}

impl<C, V, P> FromIterator<(P, V)> for Trie<C, V>
where
    C: KeyCodec + Default,
    V: Clone + PartialEq,
    P: Borrow<C::Path>,
{
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.merge_entries(iter);
        trie
    }
}
