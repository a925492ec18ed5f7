//! Vocabulary store.
//!
//! Loads translation pairs from a `;`-delimited word file. Malformed lines
//! are dropped silently; only a missing or empty source is an error.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};

/// Field separator used in word files.
pub const FIELD_SEPARATOR: char = ';';

/// A source/target translation unit.
///
/// Equality and hashing use the source text only: it is the identifier for
/// repetition filtering and error counting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationPair {
    /// Text in the source language (e.g. English).
    pub source: String,
    /// Text in the target language (e.g. Finnish).
    pub target: String,
}

impl TranslationPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl PartialEq for TranslationPair {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for TranslationPair {}

impl Hash for TranslationPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

/// A non-empty, immutable collection of translation pairs in file order.
///
/// Duplicate sources are kept as they appear.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<TranslationPair>", into = "Vec<TranslationPair>")]
pub struct Vocabulary {
    pairs: Vec<TranslationPair>,
    distinct_sources: usize,
}

impl Vocabulary {
    /// Build a vocabulary, or `None` if `pairs` is empty.
    pub fn new(pairs: Vec<TranslationPair>) -> Option<Self> {
        if pairs.is_empty() {
            return None;
        }
        let distinct_sources = pairs
            .iter()
            .map(|p| p.source.as_str())
            .collect::<HashSet<_>>()
            .len();
        Some(Self {
            pairs,
            distinct_sources,
        })
    }

    pub fn pairs(&self) -> &[TranslationPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// A `Vocabulary` is never empty.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of distinct source texts.
    pub fn distinct_sources(&self) -> usize {
        self.distinct_sources
    }
}

impl TryFrom<Vec<TranslationPair>> for Vocabulary {
    type Error = String;

    fn try_from(pairs: Vec<TranslationPair>) -> std::result::Result<Self, Self::Error> {
        Vocabulary::new(pairs).ok_or_else(|| "vocabulary must not be empty".to_string())
    }
}

impl From<Vocabulary> for Vec<TranslationPair> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.pairs
    }
}

/// Parse a single word-file line.
///
/// Returns `None` for lines without the separator or with an empty first or
/// second field. Fields past the second are ignored.
pub fn parse_line(line: &str) -> Option<TranslationPair> {
    if !line.contains(FIELD_SEPARATOR) {
        return None;
    }
    let mut fields = line.split(FIELD_SEPARATOR).map(str::trim);
    let source = fields.next().filter(|s| !s.is_empty())?;
    let target = fields.next().filter(|s| !s.is_empty())?;
    Some(TranslationPair::new(source, target))
}

/// Parse word-file contents into pairs, in file order.
pub fn parse_pairs(content: &str) -> Vec<TranslationPair> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let pair = parse_line(line);
            if pair.is_none() && !line.trim().is_empty() {
                tracing::debug!(line = idx + 1, "skipping malformed word line");
            }
            pair
        })
        .collect()
}

/// Load a vocabulary from a word file.
///
/// A missing file and a file with no usable pairs are reported as distinct
/// errors so the caller can tell them apart.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => QuizError::WordFileNotFound(path.to_path_buf()),
        _ => QuizError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let vocabulary = Vocabulary::new(parse_pairs(&content))
        .ok_or_else(|| QuizError::EmptyVocabulary(path.to_path_buf()))?;

    tracing::info!(
        path = %path.display(),
        pairs = vocabulary.len(),
        distinct = vocabulary.distinct_sources(),
        "loaded vocabulary"
    );
    Ok(vocabulary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_fields_are_ignored() {
        let pair = parse_line("dog;koira;extra").unwrap();
        assert_eq!(pair.source, "dog");
        assert_eq!(pair.target, "koira");
    }

    #[test]
    fn fields_are_trimmed() {
        let pair = parse_line("  house ;  talo  \r").unwrap();
        assert_eq!(pair.source, "house");
        assert_eq!(pair.target, "talo");
    }

    #[test]
    fn line_without_separator_is_skipped() {
        assert!(parse_line("onlyoneword").is_none());
        assert!(parse_line("").is_none());
    }

    #[test]
    fn line_with_empty_field_is_skipped() {
        assert!(parse_line("dog;").is_none());
        assert!(parse_line(";koira").is_none());
        assert!(parse_line(" ; ").is_none());
    }

    #[test]
    fn parse_keeps_file_order_and_duplicates() {
        let content = "dog;koira\nonlyoneword\n\ncat;kissa\ndog;hauva\n";
        let pairs = parse_pairs(content);
        let sources: Vec<_> = pairs.iter().map(|p| p.source.as_str()).collect();
        assert_eq!(sources, vec!["dog", "cat", "dog"]);
        assert_eq!(pairs[2].target, "hauva");
    }

    #[test]
    fn pairs_compare_by_source() {
        assert_eq!(
            TranslationPair::new("dog", "koira"),
            TranslationPair::new("dog", "hauva")
        );
        assert_ne!(
            TranslationPair::new("dog", "koira"),
            TranslationPair::new("cat", "koira")
        );
    }

    #[test]
    fn vocabulary_counts_distinct_sources() {
        let vocab = Vocabulary::new(parse_pairs("a;1\nb;2\na;3")).unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.distinct_sources(), 2);
        assert!(Vocabulary::new(vec![]).is_none());
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_vocabulary(&dir.path().join("words")).unwrap_err();
        assert!(matches!(err, QuizError::WordFileNotFound(_)));
        assert!(err.is_configuration_failure());
    }

    #[test]
    fn load_file_without_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words");
        std::fs::write(&path, "no separators here\nstill none\n").unwrap();

        let err = load_vocabulary(&path).unwrap_err();
        assert!(matches!(err, QuizError::EmptyVocabulary(_)));
    }

    #[test]
    fn load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words");
        std::fs::write(&path, "dog;koira\ncat;kissa;extra\nbroken\n").unwrap();

        let vocab = load_vocabulary(&path).unwrap();
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.pairs()[1].target, "kissa");
    }

    #[test]
    fn directory_is_an_io_error_not_a_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_vocabulary(dir.path()).unwrap_err();
        assert!(matches!(err, QuizError::Io { .. }), "got {err:?}");
    }

    #[derive(Debug, Deserialize, Serialize)]
    struct Saved {
        vocabulary: Vocabulary,
    }

    #[test]
    fn vocabulary_serializes_as_a_pair_list() {
        let saved = Saved {
            vocabulary: Vocabulary::new(parse_pairs("dog;koira
dog;hauva")).unwrap(),
        };
        let encoded = toml::to_string(&saved).unwrap();
        let decoded: Saved = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded.vocabulary.len(), 2);
        assert_eq!(decoded.vocabulary.distinct_sources(), 1);
        assert_eq!(decoded.vocabulary.pairs()[1].target, "hauva");
    }

    #[test]
    fn empty_serialized_vocabulary_is_rejected() {
        let err = toml::from_str::<Saved>("vocabulary = []\n").unwrap_err();
        assert!(err.to_string().contains("vocabulary must not be empty"));
    }

    #[test]
    fn try_from_rejects_empty() {
        assert!(Vocabulary::try_from(Vec::new()).is_err());
        assert!(Vocabulary::try_from(vec![TranslationPair::new("a", "b")]).is_ok());
    }
}
