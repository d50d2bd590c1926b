//! Node implementation for the trie.
//!
//! This module provides the `TrieNode` structure used by the trie engine.
//! Nodes own their children outright, keyed by path component, and an
//! optional value slot maintained by the configured store strategy.

use std::hash::Hash;

use hashbrown::HashMap;

use super::store::Slot;

/// A node in the trie.
///
/// A node is either structural (no slot, at least one child) or a leaf (has a
/// slot, any number of children). A node with neither is garbage and never
/// survives a trie operation.
#[derive(Debug, Clone)]
pub(crate) struct TrieNode<K, V> {
    /// Map of path components to child nodes
    pub children: HashMap<K, TrieNode<K, V>>,

    /// Values stored at exactly this path
    pub slot: Option<Slot<V>>,
}

impl<K, V> TrieNode<K, V> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            slot: None,
        }
    }

    /// Whether the node holds neither a value nor children.
    pub fn is_empty(&self) -> bool {
        self.slot.is_none() && self.children.is_empty()
    }
}

impl<K: Eq + Hash, V> TrieNode<K, V> {
    /// Follows `key` down from this node.
    pub fn descend(&self, key: &[K]) -> Option<&Self> {
        let mut node = self;
        for component in key {
            node = node.children.get(component)?;
        }
        Some(node)
    }

    /// Follows `key` down from this node, mutably.
    pub fn descend_mut(&mut self, key: &[K]) -> Option<&mut Self> {
        let mut node = self;
        for component in key {
            node = node.children.get_mut(component)?;
        }
        Some(node)
    }

    /// Number of nodes holding a slot in the subtree rooted here, this node
    /// included.
    pub fn stored_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.slot.is_some() {
                count += 1;
            }
            stack.extend(node.children.values());
        }
        count
    }
}

impl<K, V> Default for TrieNode<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(depth: usize) -> TrieNode<usize, u8> {
        let mut root = TrieNode::new();
        let mut node = &mut root;
        for level in 0..depth {
            node = node.children.entry(level).or_default();
            node.slot = Some(Slot::Value(level as u8));
        }
        root
    }

    #[test]
    fn test_descend() {
        let root = chain(3);
        assert!(root.descend(&[]).is_some());
        assert_eq!(
            root.descend(&[0, 1, 2]).and_then(|n| n.slot.clone()),
            Some(Slot::Value(2))
        );
        assert!(root.descend(&[0, 2]).is_none());
    }

    #[test]
    fn test_stored_count_and_emptiness() {
        let mut root = chain(4);
        assert_eq!(root.stored_count(), 4);
        assert!(!root.is_empty());

        let leaf = root.descend_mut(&[0, 1, 2, 3]).unwrap();
        leaf.slot = None;
        assert!(leaf.is_empty());
        assert_eq!(root.stored_count(), 3);
        assert!(TrieNode::<u8, u8>::default().is_empty());
    }
}
