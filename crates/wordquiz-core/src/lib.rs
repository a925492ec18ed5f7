//! wordquiz-core: vocabulary store and quiz session engine.
//!
//! Loads `;`-delimited word lists and runs a flashcard-style translation
//! quiz over them: repetition-free word selection, answer checking, the
//! retry/skip/reveal follow-up after a miss, and per-word error counts.
//! Rendering and input handling are left to the caller.

pub mod engine;
pub mod error;
pub mod model;
mod recent;
pub mod statistics;
pub mod vocabulary;

pub use engine::{AnswerOutcome, FollowUpOutcome, Question, QuizSession, SessionState};
pub use error::QuizError;
pub use model::{Direction, FollowUpChoice, Phase};
pub use statistics::{ErrorCount, ErrorStats, StatsReport};
pub use vocabulary::{load_vocabulary, parse_pairs, TranslationPair, Vocabulary};
