use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One accepted word within a session. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordEntry {
    pub word: String,
    pub score: i32,
    /// Epoch milliseconds at submission time
    pub timestamp: i64,
}

/// The fixed start/end letters a round is played against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LetterPair {
    pub first: char,
    pub last: char,
}

impl LetterPair {
    /// Letters are compared case-insensitively, so store them lowercased.
    pub fn new(first: char, last: char) -> Self {
        Self {
            first: first.to_ascii_lowercase(),
            last: last.to_ascii_lowercase(),
        }
    }
}

impl std::fmt::Display for LetterPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.first.to_ascii_uppercase(),
            self.last.to_ascii_uppercase()
        )
    }
}

/// Results handed from the game screen to the results screen as an
/// explicit value, so the two screens share no hidden state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSummary {
    pub total_score: i32,
    pub words: Vec<WordEntry>,
    /// Seconds of the round actually played
    pub time_used: u32,
}

impl SessionSummary {
    pub fn words_count(&self) -> usize {
        self.words.len()
    }
}
