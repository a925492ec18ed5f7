//! Quiz error types.
//!
//! Wrong answers are not errors. These variants cover a word source that
//! cannot start a session and calls that do not fit the session's phase.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the vocabulary store and the quiz engine.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The word file does not exist.
    #[error("word file not found: {}", .0.display())]
    WordFileNotFound(PathBuf),

    /// The word file exists but yielded no usable pairs.
    #[error("no translation pairs found in {}", .0.display())]
    EmptyVocabulary(PathBuf),

    /// The word file could not be read.
    #[error("failed to read word file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The session has been stopped.
    #[error("session has been stopped")]
    SessionStopped,

    /// No word has been drawn yet.
    #[error("no active question, draw a word first")]
    NoActiveQuestion,

    /// A follow-up choice is expected before the next answer.
    #[error("a follow-up choice is pending")]
    FollowUpPending,

    /// A follow-up choice was given without a preceding wrong answer.
    #[error("no follow-up choice is pending")]
    NoFollowUpPending,

    /// The eligible pool was empty.
    #[error("no eligible word to draw")]
    EmptyPool,
}

impl QuizError {
    /// Returns `true` if this error means a session cannot be started from
    /// the given word source.
    pub fn is_configuration_failure(&self) -> bool {
        matches!(
            self,
            QuizError::WordFileNotFound(_) | QuizError::EmptyVocabulary(_) | QuizError::Io { .. }
        )
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_failures_are_classified() {
        assert!(QuizError::WordFileNotFound("words".into()).is_configuration_failure());
        assert!(QuizError::EmptyVocabulary("words".into()).is_configuration_failure());
        assert!(!QuizError::SessionStopped.is_configuration_failure());
        assert!(!QuizError::NoFollowUpPending.is_configuration_failure());
    }

    #[test]
    fn messages_name_the_file() {
        let err = QuizError::WordFileNotFound("lists/words".into());
        assert_eq!(err.to_string(), "word file not found: lists/words");
    }
}
