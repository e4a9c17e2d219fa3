use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;
use wordit_types::{LetterPair, RejectReason, WordEntry};

/// External dictionary capability. `Ok(true)` means the word exists,
/// `Ok(false)` means the dictionary definitively does not know it, and
/// `Err` is a transport failure.
#[async_trait]
pub trait DictionaryLookup: Send + Sync {
    async fn contains(&self, word: &str) -> anyhow::Result<bool>;
}

/// Validates candidate words against the round's letter pair and the
/// words already played. The dictionary check is a capability flag:
/// built with [`WordValidator::new`] the validator is fully synchronous,
/// built with [`WordValidator::with_dictionary`] every precheck survivor
/// is also looked up externally.
pub struct WordValidator {
    pair: LetterPair,
    dictionary: Option<Arc<dyn DictionaryLookup>>,
}

impl WordValidator {
    pub fn new(pair: LetterPair) -> Self {
        Self {
            pair,
            dictionary: None,
        }
    }

    pub fn with_dictionary(pair: LetterPair, dictionary: Arc<dyn DictionaryLookup>) -> Self {
        Self {
            pair,
            dictionary: Some(dictionary),
        }
    }

    pub fn pair(&self) -> &LetterPair {
        &self.pair
    }

    pub fn has_dictionary(&self) -> bool {
        self.dictionary.is_some()
    }

    /// Synchronous rules, short-circuiting at the first failure. Returns
    /// the normalized (trimmed, lowercased) word on success.
    ///
    /// The length rule runs before the format rule so a single-letter
    /// input is reported as too short rather than as a wrong letter.
    pub fn precheck(&self, raw: &str, entries: &[WordEntry]) -> Result<String, RejectReason> {
        let word = raw.trim().to_lowercase();

        if word.chars().count() < 2 {
            return Err(RejectReason::Length);
        }

        if !word.starts_with(self.pair.first) || !word.ends_with(self.pair.last) {
            return Err(RejectReason::Format);
        }

        if entries.iter().any(|entry| entry.word.to_lowercase() == word) {
            return Err(RejectReason::Duplicate);
        }

        Ok(word)
    }

    /// Dictionary rule, a no-op when the capability is off. A transport
    /// failure accepts the word (fail open) so an unreliable third-party
    /// dictionary never blocks play.
    pub async fn check_dictionary(&self, word: &str) -> Result<(), RejectReason> {
        let Some(dictionary) = &self.dictionary else {
            return Ok(());
        };

        match dictionary.contains(word).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(RejectReason::Dictionary),
            Err(err) => {
                warn!("Dictionary lookup failed, accepting word: {}", err);
                Ok(())
            }
        }
    }
}
