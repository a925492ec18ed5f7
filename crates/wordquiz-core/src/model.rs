//! Quiz direction, session phase, and follow-up choices.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::vocabulary::TranslationPair;

/// Which side of a pair is asked and which is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Show the source text, expect the target.
    Forward,
    /// Show the target text, expect the source.
    Reverse,
}

impl Direction {
    /// The text shown to the player.
    pub fn question<'a>(&self, pair: &'a TranslationPair) -> &'a str {
        match self {
            Direction::Forward => &pair.source,
            Direction::Reverse => &pair.target,
        }
    }

    /// The text the player must type.
    pub fn answer<'a>(&self, pair: &'a TranslationPair) -> &'a str {
        match self {
            Direction::Forward => &pair.target,
            Direction::Reverse => &pair.source,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Reverse => write!(f, "reverse"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "forward" => Ok(Direction::Forward),
            "2" | "reverse" => Ok(Direction::Reverse),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}

/// Where a session is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for a translation of the current word.
    AwaitingAnswer,
    /// The last answer was wrong; waiting for retry/skip/reveal.
    AwaitingFollowUp,
    /// Terminal.
    Stopped,
}

/// Choice offered after a wrong answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUpChoice {
    Retry,
    Skip,
    Reveal,
    Stop,
}

impl FromStr for FollowUpChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "retry" => Ok(FollowUpChoice::Retry),
            "2" | "skip" => Ok(FollowUpChoice::Skip),
            "3" | "reveal" => Ok(FollowUpChoice::Reveal),
            "stop" => Ok(FollowUpChoice::Stop),
            other => Err(format!("unknown follow-up choice: {other}")),
        }
    }
}
