//! Trieful Trie Implementation
//!
//! This module provides a generalized prefix tree mapping paths to stored
//! values. Paths are split into components by a configurable [`KeyCodec`],
//! and the value slot at every node is maintained by a configurable
//! [`StoreStrategy`].
//!
//! Key features:
//! * Any path representation a codec can split (characters, dotted names,
//!   separated strings, plain sequences)
//! * Append, overwrite, numeric sum and counting value semantics
//! * Lexicographic, stack-based enumeration of stored paths and prefixes
//! * No empty nodes survive any mutation
//!
//! # Example
//!
//! ```
//! use trieful_lib::data_structures::trie::{StoreStrategy, Stored, TextKey, Trie, TrieConfig};
//!
//! let config = TrieConfig::new()
//!     .with_codec(TextKey::Dotted)
//!     .with_store(StoreStrategy::count());
//! let mut trie: Trie<TextKey, u32> = Trie::with_config(config);
//!
//! trie.add("com.example", 1);
//! trie.add("com.example", 1);
//! trie.add("com.example.sub", 1);
//!
//! assert_eq!(trie.get("com.example"), Some(Stored::One(&2)));
//! assert_eq!(trie.get_sub_paths("com.example.sub"), vec!["com.example", "com.example.sub"]);
//! assert_eq!(trie.len(), 2);
//! ```

mod codec;
mod config;
mod error;
mod iter;
mod merge;
mod node;
mod store;

use std::fmt;

pub use codec::{KeyCodec, SequenceKey, TextKey};
pub use config::TrieConfig;
pub use error::{TrieError, TrieResult};
pub use iter::{Items, Paths};
pub use store::{Slot, StoreKind, StoreStrategy, Stored};
use node::TrieNode;

/// Which nodes along a path an add or remove applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Only the node at the end of the path.
    #[default]
    Terminal,

    /// Every node along the path, the terminal node included.
    AllSubPaths,
}

/// A prefix tree mapping paths to values.
///
/// The trie keeps a running count of stored paths (nodes holding a value
/// slot), so [`len`](Trie::len) is O(1). Lookups and mutations are O(path
/// length); enumeration and pruning are O(subtree size).
pub struct Trie<C: KeyCodec = TextKey, V = usize> {
    /// The root node; never replaced
    root: TrieNode<C::Component, V>,

    /// Codec, store strategy and default value
    config: TrieConfig<C, V>,

    /// Number of nodes currently holding a slot
    len: usize,
}

impl<C: KeyCodec + Default, V> Trie<C, V> {
    /// Creates a new empty `Trie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::new())
    }
}

impl<C: KeyCodec, V> Trie<C, V> {
    /// Creates a new empty `Trie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: TrieConfig<C, V>) -> Self {
        Self {
            root: TrieNode::new(),
            config,
            len: 0,
        }
    }

    /// The trie's configuration.
    pub fn config(&self) -> &TrieConfig<C, V> {
        &self.config
    }

    /// Whether `other` uses the same codec and store strategy.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.config.is_compatible(&other.config)
    }

    /// Number of stored paths.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no path holds a value.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every stored path.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }

    /// Retrieves the value stored at a path.
    ///
    /// # Returns
    ///
    /// * `Some(Stored)` - What the store strategy exposes for the path's slot.
    /// * `None` - If the path is not stored, including when it is only the
    ///   prefix of stored paths.
    pub fn get(&self, path: &C::Path) -> Option<Stored<'_, V>> {
        let key = self.config.codec.path_to_key(path);
        let slot = self.root.descend(&key)?.slot.as_ref()?;
        Some(self.config.store.get(slot))
    }

    /// Retrieves the value stored at a path, or `default` when it is absent.
    pub fn get_or<'a>(&'a self, path: &C::Path, default: &'a V) -> Stored<'a, V> {
        self.get(path).unwrap_or(Stored::One(default))
    }

    /// Checks if a path holds a value.
    pub fn has(&self, path: &C::Path) -> bool {
        let key = self.config.codec.path_to_key(path);
        self.root
            .descend(&key)
            .map_or(false, |node| node.slot.is_some())
    }

    /// Returns every stored path that is a prefix of `path`, `path` itself
    /// included, shortest first.
    ///
    /// The walk stops quietly at the first component with no node.
    pub fn get_sub_paths(&self, path: &C::Path) -> Vec<C::Owned> {
        let key = self.config.codec.path_to_key(path);
        let mut sub_paths = Vec::new();
        let mut node = &self.root;

        for (depth, component) in key.iter().enumerate() {
            node = match node.children.get(component) {
                Some(child) => child,
                None => break,
            };
            if node.slot.is_some() {
                sub_paths.push(self.config.codec.key_to_path(&key[..=depth]));
            }
        }

        sub_paths
    }

    /// Collects the raw values stored along a path, root to leaf.
    ///
    /// # Returns
    ///
    /// * `Some(values)` - Values of every stored ancestor followed by the
    ///   path's own values.
    /// * `None` - If the path itself holds no value, even when some of its
    ///   ancestors do.
    pub fn get_all_path_values(&self, path: &C::Path) -> Option<Vec<&V>> {
        let key = self.config.codec.path_to_key(path);
        let mut values = Vec::new();
        let mut node = &self.root;

        for component in &key {
            let child = node.children.get(component)?;
            if let Some(slot) = &node.slot {
                values.extend(slot.values());
            }
            node = child;
        }

        let slot = node.slot.as_ref()?;
        values.extend(slot.values());
        Some(values)
    }

    /// All stored paths, in lexicographic component order.
    pub fn paths(&self) -> Paths<'_, C, V> {
        Paths::new(&self.config.codec, Some((Vec::new(), &self.root)))
    }

    /// Stored paths whose leading components equal those of `prefix`,
    /// `prefix` itself included.
    pub fn paths_with_prefix(&self, prefix: &C::Path) -> Paths<'_, C, V> {
        Paths::new(&self.config.codec, self.start_frame(prefix))
    }

    /// All `(path, value)` pairs, in the same order as [`paths`](Trie::paths).
    pub fn items(&self) -> Items<'_, C, V> {
        Items::new(
            &self.config.codec,
            &self.config.store,
            Some((Vec::new(), &self.root)),
        )
    }

    /// `(path, value)` pairs under `prefix`, in the same order as
    /// [`paths_with_prefix`](Trie::paths_with_prefix).
    pub fn items_with_prefix(&self, prefix: &C::Path) -> Items<'_, C, V> {
        Items::new(
            &self.config.codec,
            &self.config.store,
            self.start_frame(prefix),
        )
    }

    /// Removes every value stored at a path, leaving longer paths alone.
    ///
    /// # Returns
    ///
    /// `true` if the path held a value, `false` if it was not stored.
    pub fn remove_all(&mut self, path: &C::Path) -> bool {
        let key = self.config.codec.path_to_key(path);
        let cleared = match self.root.descend_mut(&key) {
            Some(node) => node.slot.take().is_some(),
            None => return false,
        };

        if cleared {
            self.len -= 1;
            self.collapse(&key);
        }
        cleared
    }

    /// Deletes a path and every stored path below it.
    ///
    /// Prefixes are matched on whole components: pruning `com.example.sub`
    /// keeps `com.example.sub2`.
    ///
    /// # Returns
    ///
    /// The number of stored paths deleted.
    pub fn prune(&mut self, path: &C::Path) -> usize {
        let key = self.config.codec.path_to_key(path);

        let removed = match key.split_last() {
            None => {
                let removed = self.root.stored_count();
                self.root = TrieNode::new();
                removed
            }
            Some((last, parent_key)) => {
                let Some(parent) = self.root.descend_mut(parent_key) else {
                    return 0;
                };
                let Some(subtree) = parent.children.remove(last) else {
                    return 0;
                };
                let removed = subtree.stored_count();
                self.collapse(parent_key);
                removed
            }
        };

        self.len -= removed;
        tracing::trace!(removed, remaining = self.len, "pruned subtree");
        removed
    }

    /// Walks to the node at `prefix`, seeding a traversal there.
    fn start_frame(
        &self,
        prefix: &C::Path,
    ) -> Option<(Vec<C::Component>, &TrieNode<C::Component, V>)> {
        let key = self.config.codec.path_to_key(prefix);
        let node = self.root.descend(&key)?;
        Some((key, node))
    }

    /// Detaches the longest run of empty nodes ending at `key`.
    ///
    /// A node on the path is dropped when it has no slot and its only child
    /// (if any) is itself being dropped. The root always stays.
    fn collapse(&mut self, key: &[C::Component]) {
        let mut chain = Vec::with_capacity(key.len() + 1);
        let mut node = &self.root;
        chain.push(node);
        for component in key {
            match node.children.get(component) {
                Some(child) => node = child,
                None => break,
            }
            chain.push(node);
        }

        let mut cut = None;
        for depth in (1..chain.len()).rev() {
            let node = chain[depth];
            let below_cut = cut == Some(depth + 1) && node.children.len() == 1;
            if node.slot.is_none() && (node.children.is_empty() || below_cut) {
                cut = Some(depth);
            } else {
                break;
            }
        }

        if let Some(depth) = cut {
            if let Some(parent) = self.root.descend_mut(&key[..depth - 1]) {
                parent.children.remove(&key[depth - 1]);
            }
        }
    }
}

impl<C: KeyCodec, V: Clone + PartialEq> Trie<C, V> {
    /// Maps a path to a value.
    ///
    /// Missing nodes along the path are created.
    ///
    /// # Returns
    ///
    /// `true` if the path was not stored before, `false` if the value was
    /// folded into an existing slot.
    pub fn add(&mut self, path: &C::Path, value: V) -> bool {
        self.add_value(path, value, Scope::Terminal)
    }

    /// Maps a path to a value, falling back to the configured default value
    /// and optionally applying the value at every node along the path.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the terminal path was not stored before.
    /// * `Err(TrieError::NoDefaultValue)` - If `value` is `None` and no default
    ///   value is configured.
    pub fn add_with(&mut self, path: &C::Path, value: Option<V>, scope: Scope) -> TrieResult<bool> {
        let value = match value {
            Some(value) => value,
            None => self
                .config
                .default_value
                .clone()
                .ok_or(TrieError::NoDefaultValue)?,
        };
        Ok(self.add_value(path, value, scope))
    }

    /// Takes a single value back out of a path.
    ///
    /// Removing from a path that is not stored does nothing.
    ///
    /// # Returns
    ///
    /// `true` if the path no longer holds a value as a result.
    pub fn remove(&mut self, path: &C::Path, value: &V) -> bool {
        self.remove_value(path, value, Scope::Terminal)
    }

    /// Takes a value back out of a path, falling back to the configured
    /// default value and optionally removing it at every node along the
    /// path.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the terminal path no longer holds a value.
    /// * `Err(TrieError::NoDefaultValue)` - If `value` is `None` and no default
    ///   value is configured.
    pub fn remove_with(
        &mut self,
        path: &C::Path,
        value: Option<&V>,
        scope: Scope,
    ) -> TrieResult<bool> {
        let default;
        let value = match value {
            Some(value) => value,
            None => {
                default = self
                    .config
                    .default_value
                    .clone()
                    .ok_or(TrieError::NoDefaultValue)?;
                &default
            }
        };
        Ok(self.remove_value(path, value, scope))
    }

    fn add_value(&mut self, path: &C::Path, value: V, scope: Scope) -> bool {
        let key = self.config.codec.path_to_key(path);
        let store = &self.config.store;
        let mut node = &mut self.root;

        for (depth, component) in key.iter().enumerate() {
            node = node.children.entry(component.clone()).or_default();
            if scope == Scope::AllSubPaths && depth + 1 < key.len() {
                let was_empty = node.slot.is_none();
                store.add(&mut node.slot, value.clone());
                if was_empty {
                    self.len += 1;
                }
            }
        }

        let is_new = node.slot.is_none();
        store.add(&mut node.slot, value);
        if is_new {
            self.len += 1;
        }
        is_new
    }

    fn remove_value(&mut self, path: &C::Path, value: &V, scope: Scope) -> bool {
        let key = self.config.codec.path_to_key(path);
        let Some(removal) =
            Self::remove_below(&self.config.store, &mut self.root, &key, value, scope)
        else {
            return false;
        };

        self.len -= removal.emptied;
        if removal.emptied > 0 {
            self.collapse(&key);
        }
        removal.terminal_emptied
    }

    /// Removes `value` at the end of `key`, then at each intermediate node on
    /// the way back up when `scope` covers sub-paths.
    ///
    /// Slots are only touched once the terminal node has been reached, so a
    /// missing path returns `None` with nothing changed.
    fn remove_below(
        store: &StoreStrategy<V>,
        node: &mut TrieNode<C::Component, V>,
        key: &[C::Component],
        value: &V,
        scope: Scope,
    ) -> Option<Removal> {
        let Some((component, rest)) = key.split_first() else {
            let had_slot = node.slot.is_some();
            store.remove(&mut node.slot, value);
            let terminal_emptied = had_slot && node.slot.is_none();
            return Some(Removal {
                terminal_emptied,
                emptied: usize::from(terminal_emptied),
            });
        };

        let child = node.children.get_mut(component)?;
        let mut removal = Self::remove_below(store, child, rest, value, scope)?;

        if scope == Scope::AllSubPaths && !rest.is_empty() && child.slot.is_some() {
            store.remove(&mut child.slot, value);
            if child.slot.is_none() {
                removal.emptied += 1;
            }
        }
        Some(removal)
    }
}

/// Outcome of a successful removal walk.
struct Removal {
    /// Whether the terminal path lost its slot
    terminal_emptied: bool,

    /// Number of slots emptied along the path, the terminal one included
    emptied: usize,
}

impl<C: KeyCodec + Default, V> Default for Trie<C, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: KeyCodec, V: Clone> Clone for Trie<C, V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            config: self.config.clone(),
            len: self.len,
        }
    }
}

impl<C: KeyCodec, V: fmt::Debug> fmt::Debug for Trie<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.items()).finish()
    }
}

/// Renders the trie as `{path: value, ...}` in path order.
impl<C, V> fmt::Display for Trie<C, V>
where
    C: KeyCodec,
    C::Owned: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (path, value)) in self.items().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{path}: {value}")?;
        }
        f.write_str("}")
    }
}
