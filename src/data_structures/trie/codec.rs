// Copyright (c) 2025 Trieful Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Key codecs for the trie.
//!
//! A codec turns a caller-facing path into the ordered sequence of components
//! the trie descends through, and turns a component sequence back into a path.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

/// Conversion between external paths and trie key components.
///
/// `key_to_path(&path_to_key(p))` must produce a path equivalent to `p` for
/// every path the trie is queried with. Two codecs comparing equal are
/// considered the same configuration when tries are merged.
pub trait KeyCodec: Clone + PartialEq + fmt::Debug {
    /// Borrowed path accepted by trie operations.
    type Path: ?Sized;

    /// A single level of trie descent.
    type Component: Clone + Eq + Hash + Ord + fmt::Debug;

    /// Path reconstructed from components.
    type Owned: Borrow<Self::Path> + fmt::Debug;

    /// Split a path into its components.
    fn path_to_key(&self, path: &Self::Path) -> Vec<Self::Component>;

    /// Rebuild a path from its components.
    fn key_to_path(&self, key: &[Self::Component]) -> Self::Owned;
}

/// Codecs for string paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextKey {
    /// Every character is its own component.
    #[default]
    Chars,

    /// Components are separated by `.`.
    Dotted,

    /// Components are separated by the given character.
    Separated(char),
}

impl TextKey {
    /// The separator placed between components, if any.
    pub fn separator(&self) -> Option<char> {
        match self {
            TextKey::Chars => None,
            TextKey::Dotted => Some('.'),
            TextKey::Separated(sep) => Some(*sep),
        }
    }
}

impl KeyCodec for TextKey {
    type Path = str;
    type Component = String;
    type Owned = String;

    fn path_to_key(&self, path: &str) -> Vec<String> {
        match self.separator() {
            None => path.chars().map(String::from).collect(),
            Some(sep) => path.split(sep).map(str::to_owned).collect(),
        }
    }

    fn key_to_path(&self, key: &[String]) -> String {
        match self.separator() {
            None => key.concat(),
            Some(sep) => {
                let mut buf = [0u8; 4];
                key.join(&*sep.encode_utf8(&mut buf))
            }
        }
    }
}

/// Identity codec for paths that are already component sequences.
pub struct SequenceKey<T>(PhantomData<fn() -> T>);

impl<T> SequenceKey<T> {
    /// Creates the identity codec.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for SequenceKey<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SequenceKey<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> PartialEq for SequenceKey<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> fmt::Debug for SequenceKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SequenceKey")
    }
}

impl<T> KeyCodec for SequenceKey<T>
where
    T: Clone + Eq + Hash + Ord + fmt::Debug,
{
    type Path = [T];
    type Component = T;
    type Owned = Vec<T>;

    fn path_to_key(&self, path: &[T]) -> Vec<T> {
        path.to_vec()
    }

    fn key_to_path(&self, key: &[T]) -> Vec<T> {
        key.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chars_codec() {
        let codec = TextKey::Chars;
        let key = codec.path_to_key("asdf");
        assert_eq!(key, vec!["a", "s", "d", "f"]);
        assert_eq!(codec.key_to_path(&key), "asdf");
        assert!(codec.path_to_key("").is_empty());
    }

    #[test]
    fn test_dotted_codec() {
        let codec = TextKey::Dotted;
        let key = codec.path_to_key("com.example.sub");
        assert_eq!(key, vec!["com", "example", "sub"]);
        assert_eq!(codec.key_to_path(&key), "com.example.sub");

        // An empty string is a single empty component, like `str::split`.
        assert_eq!(codec.path_to_key(""), vec![""]);
    }

    #[test]
    fn test_separated_codec() {
        let codec = TextKey::Separated('/');
        let key = codec.path_to_key("usr/share/dict");
        assert_eq!(key, vec!["usr", "share", "dict"]);
        assert_eq!(codec.key_to_path(&key), "usr/share/dict");

        let wide = TextKey::Separated('→');
        assert_eq!(wide.key_to_path(&wide.path_to_key("a→b")), "a→b");
    }

    #[test]
    fn test_codec_identity() {
        assert_eq!(TextKey::Dotted.separator(), TextKey::Separated('.').separator());
        assert_ne!(TextKey::Dotted, TextKey::Chars);
        assert_ne!(TextKey::Separated('/'), TextKey::Separated(':'));
        assert_eq!(SequenceKey::<u8>::new(), SequenceKey::<u8>::default());
    }

    #[test]
    fn test_sequence_codec() {
        let codec = SequenceKey::<u32>::new();
        assert_eq!(codec.path_to_key(&[3, 1, 2]), vec![3, 1, 2]);
        assert_eq!(codec.key_to_path(&[3, 1]), vec![3, 1]);
    }
}
