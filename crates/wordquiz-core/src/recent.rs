//! Bounded memory of recently drawn words.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// The last few source texts drawn, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RecentBuffer {
    words: VecDeque<String>,
    capacity: usize,
}

impl RecentBuffer {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            words: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a word, evicting the oldest once full.
    pub(crate) fn push(&mut self, word: &str) {
        if self.capacity == 0 {
            return;
        }
        if self.words.len() == self.capacity {
            self.words.pop_front();
        }
        self.words.push_back(word.to_string());
    }

    pub(crate) fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }

    #[cfg(test)]
    pub(crate) fn words(&self) -> Vec<&str> {
        self.words.iter().map(String::as_str).collect()
    }
}
