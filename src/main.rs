//! Trieful - Main entrypoint.
//!
//! This is the main entry point for the `trieful` command line tool. It loads
//! configuration, initializes the logging system, and runs the requested
//! command against a trie built from a word list.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use trieful_lib::config::{ConfigLoader, LogConfig, TriefulConfig, ENV_PREFIX};
use trieful_lib::data_structures::trie::{Scope, StoreStrategy, TextKey, Trie, TrieConfig};
use trieful_lib::error::{ErrorContext, TriefulError, TriefulResult};

/// Letters used for both axes of the prefix graph.
const GRAPH_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Command line arguments for Trieful.
#[derive(Parser, Debug)]
#[clap(name = "trieful", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print which two-letter combinations start a word
    Graph {
        /// Word list, one word per line
        #[clap(short, long, value_parser)]
        words: PathBuf,
    },

    /// Load a word list with the configured trie and list its stored paths
    Paths {
        /// Word list, one word per line
        #[clap(short, long, value_parser)]
        words: PathBuf,

        /// Only list paths under this prefix
        #[clap(short, long)]
        prefix: Option<String>,

        /// Print a JSON object instead of one line per path
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> TriefulResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| {
        TriefulError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Reads the non-empty, trimmed lines of a word list.
fn read_words(path: &Path) -> TriefulResult<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ErrorContext::new(e.into(), "words")
            .with_details(path.display().to_string())
            .report()
    })?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect())
}

/// Builds a counting trie over every prefix of every word and renders the
/// two-letter prefix graph. A `+` marks a combination that starts a word.
fn prefix_graph(words: &[String]) -> TriefulResult<String> {
    let mut trie: Trie<TextKey, u64> = Trie::with_config(
        TrieConfig::new()
            .with_store(StoreStrategy::count())
            .with_default_value(1),
    );

    let started = Instant::now();
    for word in words {
        trie.add_with(&word.to_lowercase(), None, Scope::AllSubPaths)?;
    }
    info!(
        words = words.len(),
        paths = trie.len(),
        elapsed = ?started.elapsed(),
        "built prefix trie"
    );

    let border = format!(" +{}+", "-".repeat(GRAPH_LETTERS.len()));
    let mut lines = vec![format!("  {GRAPH_LETTERS}"), border.clone()];
    for row in GRAPH_LETTERS.chars() {
        let mut line = String::with_capacity(GRAPH_LETTERS.len() + 4);
        line.push(row);
        line.push('|');
        for col in GRAPH_LETTERS.chars() {
            let prefix: String = [row, col].iter().collect();
            let count = trie.get_or(&prefix, &0).one().copied().unwrap_or(0);
            line.push(if count > 0 { '+' } else { ' ' });
        }
        line.push('|');
        line.push(row);
        lines.push(line);
    }
    lines.push(border);
    lines.push(format!("  {GRAPH_LETTERS}"));

    Ok(lines.join("\n"))
}

/// Loads the words with the configured trie and renders its stored paths.
fn list_paths(
    config: &TriefulConfig,
    words: &[String],
    prefix: Option<&str>,
    json: bool,
) -> TriefulResult<String> {
    let mut trie = config.trie.build::<u64>()?;
    let scope = config.trie.scope();
    for word in words {
        trie.add_with(word, None, scope)?;
    }
    info!(words = words.len(), paths = trie.len(), "loaded trie");

    let items = match prefix {
        Some(prefix) => trie.items_with_prefix(prefix),
        None => trie.items(),
    };

    if json {
        let map: serde_json::Map<String, serde_json::Value> = items
            .map(|(path, stored)| (path, serde_json::json!(stored.as_slice())))
            .collect();
        return Ok(serde_json::to_string_pretty(&map)?);
    }

    Ok(items
        .map(|(path, stored)| format!("{path}\t{stored}"))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Main entry point for the application.
fn main() -> TriefulResult<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = config_loader.load();

    // Log with the configured settings when they load, defaults otherwise
    let log = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log)?;

    match args.command {
        Command::Graph { words } => {
            let words = read_words(&words)?;
            println!("{}", prefix_graph(&words)?);
            Ok(())
        }
        Command::Paths {
            words,
            prefix,
            json,
        } => {
            let config = loaded.map_err(|e| ErrorContext::new(e.into(), "config").report())?;
            let words = read_words(&words)?;
            let output = list_paths(&config, &words, prefix.as_deref(), json)?;
            if !output.is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            loaded.map_err(|e| ErrorContext::new(e.into(), "config").report())?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let toml = TriefulConfig::default().to_toml()?;

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trieful_lib::config::{KeyMode, TrieSettings};
    use trieful_lib::data_structures::trie::StoreKind;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_prefix_graph_marks_known_prefixes() {
        let graph = prefix_graph(&words(&["Apple", "abbey", "zebra", "b"])).unwrap();
        let lines: Vec<_> = graph.lines().collect();
        assert_eq!(lines.len(), 30);

        let a_row = lines[2];
        assert!(a_row.starts_with("a|"));
        assert_eq!(&a_row[2..4], " +");
        assert_eq!(a_row.chars().nth(2 + 15), Some('+'));

        // A one-letter word is not a two-letter prefix
        assert!(!lines[3][2..28].contains('+'));
        assert_eq!(lines[27].chars().nth(2 + 4), Some('+'));
    }

    #[test]
    fn test_list_paths_with_prefix() {
        let config = TriefulConfig {
            trie: TrieSettings {
                key: KeyMode::Dotted,
                ..Default::default()
            },
            ..Default::default()
        };
        let list = words(&["com.example", "com.example", "org.example", "com.other"]);

        let output = list_paths(&config, &list, Some("com"), false).unwrap();
        assert_eq!(output, "com.example\t2\ncom.other\t1");

        let json = list_paths(&config, &list, Some("org"), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["org.example"], serde_json::json!([1]));
    }

    #[test]
    fn test_list_paths_all_sub_paths() {
        let config = TriefulConfig {
            trie: TrieSettings {
                key: KeyMode::Dotted,
                store: StoreKind::Count,
                all_sub_paths: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let list = words(&["a.b", "a.c"]);
        let output = list_paths(&config, &list, None, false).unwrap();
        assert_eq!(output, "a\t2\na.b\t1\na.c\t1");
    }
}
