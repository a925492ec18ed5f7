//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use wordquiz_core::Direction;

/// Environment variable that overrides `words_file`.
pub const WORDS_ENV_VAR: &str = "WORDQUIZ_WORDS";

/// Top-level wordquiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Word file to load.
    #[serde(default = "default_words_file")]
    pub words_file: PathBuf,
    /// Quiz direction. When unset the player is asked.
    #[serde(default)]
    pub direction: Option<Direction>,
    /// Display names for the two languages.
    #[serde(default)]
    pub languages: LanguageNames,
}

/// Display names used in the mode menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageNames {
    #[serde(default = "default_source_name")]
    pub source: String,
    #[serde(default = "default_target_name")]
    pub target: String,
}

fn default_words_file() -> PathBuf {
    PathBuf::from("words")
}
fn default_source_name() -> String {
    "English".to_string()
}
fn default_target_name() -> String {
    "Finnish".to_string()
}

impl Default for LanguageNames {
    fn default() -> Self {
        Self {
            source: default_source_name(),
            target: default_target_name(),
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            words_file: default_words_file(),
            direction: None,
            languages: LanguageNames::default(),
        }
    }
}

impl QuizConfig {
    /// Replace `words_file` when an override is present.
    pub fn with_words_override(mut self, words: Option<String>) -> Self {
        if let Some(words) = words.filter(|w| !w.trim().is_empty()) {
            self.words_file = PathBuf::from(words);
        }
        self
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `wordquiz.toml` in the current directory
/// 2. `~/.config/wordquiz/config.toml`
///
/// `WORDQUIZ_WORDS` overrides the configured word file.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("wordquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => QuizConfig::default(),
    };

    Ok(config.with_words_override(std::env::var(WORDS_ENV_VAR).ok()))
}

fn parse_config(content: &str) -> Result<QuizConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("wordquiz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.words_file, PathBuf::from("words"));
        assert!(config.direction.is_none());
        assert_eq!(config.languages.source, "English");
        assert_eq!(config.languages.target, "Finnish");
    }

    #[test]
    fn parse_full_config() {
        let config = parse_config(
            r#"
words_file = "lists/animals.txt"
direction = "reverse"

[languages]
source = "English"
target = "Swedish"
"#,
        )
        .unwrap();
        assert_eq!(config.words_file, PathBuf::from("lists/animals.txt"));
        assert_eq!(config.direction, Some(Direction::Reverse));
        assert_eq!(config.languages.target, "Swedish");
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let config = parse_config("direction = \"forward\"\n").unwrap();
        assert_eq!(config.words_file, PathBuf::from("words"));
        assert_eq!(config.languages.source, "English");
    }

    #[test]
    fn parse_rejects_unknown_direction() {
        assert!(parse_config("direction = \"sideways\"\n").is_err());
    }

    #[test]
    fn words_override() {
        let config = QuizConfig::default().with_words_override(Some("other.txt".into()));
        assert_eq!(config.words_file, PathBuf::from("other.txt"));

        let config = QuizConfig::default().with_words_override(Some("  ".into()));
        assert_eq!(config.words_file, PathBuf::from("words"));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        std::fs::write(&path, "direction = \"reverse\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.direction, Some(Direction::Reverse));
    }
}
