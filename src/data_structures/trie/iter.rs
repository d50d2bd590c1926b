// Copyright (c) 2025 Trieful Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lazy, ordered traversals over stored paths.
//!
//! Traversal keeps an explicit stack of `(key, node)` frames instead of
//! recursing, so trie depth is bounded only by memory. Children are pushed in
//! descending component order, which makes the pop order a lexicographic
//! pre-order walk: a path is produced before any path it prefixes.

use std::iter::FusedIterator;

use super::codec::KeyCodec;
use super::node::TrieNode;
use super::store::{Slot, StoreStrategy, Stored};

type Frame<'a, C, V> = (
    Vec<<C as KeyCodec>::Component>,
    &'a TrieNode<<C as KeyCodec>::Component, V>,
);

/// Depth-first walk yielding the key and slot of every stored node.
struct Walk<'a, C: KeyCodec, V> {
    stack: Vec<Frame<'a, C, V>>,
}

impl<'a, C: KeyCodec, V> Walk<'a, C, V> {
    fn new(start: Option<Frame<'a, C, V>>) -> Self {
        Self {
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a, C: KeyCodec, V> Iterator for Walk<'a, C, V> {
    type Item = (Vec<C::Component>, &'a Slot<V>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, node)) = self.stack.pop() {
            let mut children: Vec<_> = node.children.iter().collect();
            children.sort_unstable_by(|a, b| b.0.cmp(a.0));
            for (component, child) in children {
                let mut child_key = Vec::with_capacity(key.len() + 1);
                child_key.extend_from_slice(&key);
                child_key.push(component.clone());
                self.stack.push((child_key, child));
            }

            if let Some(slot) = &node.slot {
                return Some((key, slot));
            }
        }
        None
    }
}

/// Iterator over stored paths, in lexicographic component order.
///
/// Created by [`Trie::paths`](super::Trie::paths) and
/// [`Trie::paths_with_prefix`](super::Trie::paths_with_prefix).
pub struct Paths<'a, C: KeyCodec, V> {
    codec: &'a C,
    walk: Walk<'a, C, V>,
}

impl<'a, C: KeyCodec, V> Paths<'a, C, V> {
    pub(crate) fn new(codec: &'a C, start: Option<Frame<'a, C, V>>) -> Self {
        Self {
            codec,
            walk: Walk::new(start),
        }
    }
}

impl<C: KeyCodec, V> Iterator for Paths<'_, C, V> {
    type Item = C::Owned;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk
            .next()
            .map(|(key, _)| self.codec.key_to_path(&key))
    }
}

impl<C: KeyCodec, V> FusedIterator for Paths<'_, C, V> {}

/// Iterator over `(path, value)` pairs, in the same order as [`Paths`].
///
/// Created by [`Trie::items`](super::Trie::items) and
/// [`Trie::items_with_prefix`](super::Trie::items_with_prefix).
pub struct Items<'a, C: KeyCodec, V> {
    codec: &'a C,
    store: &'a StoreStrategy<V>,
    walk: Walk<'a, C, V>,
}

impl<'a, C: KeyCodec, V> Items<'a, C, V> {
    pub(crate) fn new(
        codec: &'a C,
        store: &'a StoreStrategy<V>,
        start: Option<Frame<'a, C, V>>,
    ) -> Self {
        Self {
            codec,
            store,
            walk: Walk::new(start),
        }
    }
}

impl<'a, C: KeyCodec, V> Iterator for Items<'a, C, V> {
    type Item = (C::Owned, Stored<'a, V>);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, slot) = self.walk.next()?;
        Some((self.codec.key_to_path(&key), self.store.get(slot)))
    }
}

impl<C: KeyCodec, V> FusedIterator for Items<'_, C, V> {}
