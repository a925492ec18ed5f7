//! Quiz session engine.
//!
//! Draws words without recent repetition, evaluates answers, and drives the
//! wrong-answer follow-up (retry, skip, reveal). The engine does no I/O: a
//! presentation layer feeds it raw input and renders the returned outcomes.

use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};
use crate::model::{Direction, FollowUpChoice, Phase};
use crate::recent::RecentBuffer;
use crate::statistics::{ErrorStats, StatsReport};
use crate::vocabulary::{TranslationPair, Vocabulary};

/// How many recent words are excluded from the next draw.
pub const RECENT_CAPACITY: usize = 5;

/// Main-prompt command that ends the session.
pub const STOP_COMMAND: &str = "stop";

/// Main-prompt command that asks for the error stats.
pub const STATS_COMMAND: &str = "stats";

/// A word put to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Text to translate.
    pub prompt: String,
    /// Source text of the pair being asked.
    pub word: String,
}

/// Result of submitting input at the main prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Right answer; the next word has already been drawn.
    Correct { next: Question },
    /// Wrong answer; a follow-up choice is now pending.
    Incorrect { misses: u32 },
    /// The `stats` command. Nothing else changed.
    Stats(StatsReport),
    /// The `stop` command.
    Stopped,
}

/// Result of resolving a follow-up choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUpOutcome {
    /// Ask the same word again.
    Retry { question: Question },
    /// Moved on without showing the answer. `fallback` is set when the
    /// input was not a recognised choice.
    Skipped { next: Question, fallback: bool },
    /// The expected answer, followed by the next word.
    Revealed { answer: String, next: Question },
    Stopped,
}

/// All mutable state of one quiz session.
///
/// A hosting layer that cannot keep a [`QuizSession`] alive between requests
/// can hold this value instead and rebuild the session each time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    vocabulary: Vocabulary,
    recent: RecentBuffer,
    stats: ErrorStats,
    direction: Direction,
    current: Option<TranslationPair>,
    phase: Phase,
}

impl SessionState {
    pub fn new(vocabulary: Vocabulary, direction: Direction) -> Self {
        Self {
            vocabulary,
            recent: RecentBuffer::new(RECENT_CAPACITY),
            stats: ErrorStats::new(),
            direction,
            current: None,
            phase: Phase::AwaitingAnswer,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current(&self) -> Option<&TranslationPair> {
        self.current.as_ref()
    }

    pub fn stats(&self) -> &ErrorStats {
        &self.stats
    }
}

/// A single player's quiz session.
pub struct QuizSession<R = ThreadRng> {
    state: SessionState,
    rng: R,
}

impl QuizSession<ThreadRng> {
    /// Start a session using the thread-local RNG.
    pub fn new(vocabulary: Vocabulary, direction: Direction) -> Self {
        Self::with_rng(vocabulary, direction, rand::rng())
    }
}

impl<R: Rng> QuizSession<R> {
    /// Start a session with an explicit RNG (e.g. a seeded `StdRng`).
    pub fn with_rng(vocabulary: Vocabulary, direction: Direction, rng: R) -> Self {
        tracing::info!(
            words = vocabulary.len(),
            %direction,
            "quiz session started"
        );
        Self::from_state(SessionState::new(vocabulary, direction), rng)
    }

    /// Resume a session from caller-held state.
    pub fn from_state(state: SessionState, rng: R) -> Self {
        Self { state, rng }
    }

    /// Hand the session state back to the caller.
    pub fn into_state(self) -> SessionState {
        self.state
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_stopped(&self) -> bool {
        self.state.phase == Phase::Stopped
    }

    /// The pair currently being asked, if any word has been drawn.
    pub fn current(&self) -> Option<&TranslationPair> {
        self.state.current.as_ref()
    }

    /// The current question, if any word has been drawn.
    pub fn question(&self) -> Option<Question> {
        self.state.current.as_ref().map(|pair| Question {
            prompt: self.state.direction.question(pair).to_string(),
            word: pair.source.clone(),
        })
    }

    /// The answer expected for the current question.
    pub fn expected_answer(&self) -> Option<&str> {
        self.state
            .current
            .as_ref()
            .map(|pair| self.state.direction.answer(pair))
    }

    /// Draw the next word.
    ///
    /// Words among the last [`RECENT_CAPACITY`] draws are excluded, but only
    /// when the vocabulary has more distinct words than that; smaller lists
    /// draw from everything.
    pub fn draw(&mut self) -> Result<Question> {
        self.ensure_running()?;

        let vocabulary = &self.state.vocabulary;
        let recent = &self.state.recent;
        let filter = vocabulary.distinct_sources() > RECENT_CAPACITY;
        let pool: Vec<&TranslationPair> = vocabulary
            .pairs()
            .iter()
            .filter(|pair| !filter || !recent.contains(&pair.source))
            .collect();

        let pair = pool
            .choose(&mut self.rng)
            .map(|pair| (*pair).clone())
            .ok_or(QuizError::EmptyPool)?;

        tracing::debug!(
            word = %pair.source,
            pool = pool.len(),
            filtered = filter,
            "drew word"
        );

        self.state.recent.push(&pair.source);
        self.state.current = Some(pair);
        self.state.phase = Phase::AwaitingAnswer;

        self.question().ok_or(QuizError::NoActiveQuestion)
    }

    /// Handle input typed at the main prompt.
    ///
    /// `stop` and `stats` (case-insensitive) are commands; anything else is
    /// an answer. Answers are compared case-insensitively after trimming.
    pub fn submit(&mut self, input: &str) -> Result<AnswerOutcome> {
        let normalized = input.trim().to_lowercase();

        // Accepted in every phase, including after the session has stopped.
        if normalized == STOP_COMMAND {
            self.stop();
            return Ok(AnswerOutcome::Stopped);
        }

        self.ensure_running()?;
        if self.state.phase == Phase::AwaitingFollowUp {
            return Err(QuizError::FollowUpPending);
        }

        if normalized == STATS_COMMAND {
            return Ok(AnswerOutcome::Stats(self.report()));
        }

        let pair = self
            .state
            .current
            .as_ref()
            .ok_or(QuizError::NoActiveQuestion)?;
        let expected = self.state.direction.answer(pair);

        if normalized == expected.to_lowercase() {
            let next = self.draw()?;
            return Ok(AnswerOutcome::Correct { next });
        }

        let word = pair.source.clone();
        let misses = self.state.stats.record(&word);
        self.state.phase = Phase::AwaitingFollowUp;
        tracing::debug!(%word, misses, "wrong answer");
        Ok(AnswerOutcome::Incorrect { misses })
    }

    /// Resolve the choice offered after a wrong answer.
    ///
    /// Unrecognised input is treated as skip.
    pub fn follow_up(&mut self, input: &str) -> Result<FollowUpOutcome> {
        self.ensure_running()?;
        if self.state.phase != Phase::AwaitingFollowUp {
            return Err(QuizError::NoFollowUpPending);
        }

        let (choice, fallback) = match input.parse::<FollowUpChoice>() {
            Ok(choice) => (choice, false),
            Err(e) => {
                tracing::debug!("{e}, skipping word");
                (FollowUpChoice::Skip, true)
            }
        };

        match choice {
            FollowUpChoice::Retry => {
                self.state.phase = Phase::AwaitingAnswer;
                let question = self.question().ok_or(QuizError::NoActiveQuestion)?;
                Ok(FollowUpOutcome::Retry { question })
            }
            FollowUpChoice::Skip => {
                let next = self.draw()?;
                Ok(FollowUpOutcome::Skipped { next, fallback })
            }
            FollowUpChoice::Reveal => {
                let answer = self
                    .expected_answer()
                    .ok_or(QuizError::NoActiveQuestion)?
                    .to_string();
                let next = self.draw()?;
                Ok(FollowUpOutcome::Revealed { answer, next })
            }
            FollowUpChoice::Stop => {
                self.stop();
                Ok(FollowUpOutcome::Stopped)
            }
        }
    }

    /// End the session. Safe to call at any point, any number of times.
    pub fn stop(&mut self) {
        if self.state.phase != Phase::Stopped {
            tracing::info!(errors = self.state.stats.total(), "quiz session stopped");
            self.state.phase = Phase::Stopped;
        }
    }

    /// Wrong-answer counts, most-missed first.
    pub fn report(&self) -> StatsReport {
        self.state.stats.report()
    }

    fn ensure_running(&self) -> Result<()> {
        if self.is_stopped() {
            return Err(QuizError::SessionStopped);
        }
        Ok(())
    }
}
