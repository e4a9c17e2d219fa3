use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::LetterPair;

/// Why a submitted word was rejected. All rejections are recoverable and
/// surface as a message without changing session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RejectReason {
    Format,
    Length,
    Duplicate,
    Dictionary,
}

impl RejectReason {
    /// User-facing message for a rejected word.
    pub fn message(&self, word: &str, pair: &LetterPair) -> String {
        match self {
            RejectReason::Format => {
                let word = word.to_lowercase();
                if !word.starts_with(pair.first) {
                    format!(
                        "Word must start with \"{}\"",
                        pair.first.to_ascii_uppercase()
                    )
                } else {
                    format!("Word must end with \"{}\"", pair.last.to_ascii_uppercase())
                }
            }
            RejectReason::Length => "Word must be at least 2 letters long".to_string(),
            RejectReason::Duplicate => "Word already used!".to_string(),
            RejectReason::Dictionary => "Not an appropriate English word.".to_string(),
        }
    }
}
