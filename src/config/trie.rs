//! Trie configuration module.
//!
//! This module describes, in file and environment form, how the `trieful`
//! tool builds its trie: how words are split into path components, which
//! store strategy holds the values, and whether adds count every prefix.

use num_traits::ops::saturating::{SaturatingAdd, SaturatingSub};
use num_traits::Num;
use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::data_structures::trie::{Scope, StoreKind, StoreStrategy, TextKey, Trie, TrieConfig};
use crate::error::config::ConfigError;

/// How text paths are split into components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyMode {
    /// One component per character
    #[default]
    Chars,

    /// Components separated by `.`
    Dotted,

    /// Components separated by the configured `separator`
    Separated,
}

/// Trie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrieSettings {
    /// Key mode (chars, dotted, separated)
    pub key: KeyMode,

    /// Separator used by the `separated` key mode
    pub separator: String,

    /// Store strategy (append, overwrite, sum, count)
    pub store: StoreKind,

    /// Whether every add also applies to each prefix of the path
    pub all_sub_paths: bool,
}

impl Default for TrieSettings {
    fn default() -> Self {
        Self {
            key: KeyMode::Chars,
            separator: "/".to_string(),
            store: StoreKind::Count,
            all_sub_paths: false,
        }
    }
}

impl TrieSettings {
    /// The key codec these settings describe.
    pub fn codec(&self) -> ConfigResult<TextKey> {
        Ok(match self.key {
            KeyMode::Chars => TextKey::Chars,
            KeyMode::Dotted => TextKey::Dotted,
            KeyMode::Separated => TextKey::Separated(self.separator_char()?),
        })
    }

    /// The scope adds and removes apply to.
    pub fn scope(&self) -> Scope {
        if self.all_sub_paths {
            Scope::AllSubPaths
        } else {
            Scope::Terminal
        }
    }

    /// Builds an empty trie with these settings.
    ///
    /// The default value is one, so words can be added without a value.
    pub fn build<V>(&self) -> ConfigResult<Trie<TextKey, V>>
    where
        V: Num + SaturatingAdd + SaturatingSub + Clone,
    {
        let config = TrieConfig::for_codec(self.codec()?)
            .with_store(StoreStrategy::from_kind(self.store))
            .with_default_value(V::one());
        Ok(Trie::with_config(config))
    }

    fn separator_char(&self) -> ConfigResult<char> {
        let mut chars = self.separator.chars();
        match (chars.next(), chars.next()) {
            (Some(separator), None) => Ok(separator),
            (None, _) => Err(ConfigError::MissingValue("trie.separator".to_string())),
            _ => Err(ConfigError::ValidationError(format!(
                "separator must be a single character, got {:?}",
                self.separator
            ))),
        }
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        // Only the separated key mode reads the separator
        if self.key == KeyMode::Separated {
            self.separator_char()?;
        }
        Ok(())
    }
}
