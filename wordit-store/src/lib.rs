pub mod airtable;
pub mod dictionary;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;
use wordit_types::{GameScore, LeaderboardRow, LetterPair, ShareRecord};

pub use airtable::AirtableClient;
pub use dictionary::DictionaryApiClient;
pub use memory::MemoryStore;

/// Store I/O failures. None of these are fatal and none are retried;
/// callers surface them as an error line and move on.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected store response: {0}")]
    BadResponse(String),
}

/// The hosted tabular store the game persists into. All operations are
/// fallible I/O; a shared record is write-once and read-only thereafter.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Write a finished session's score to the leaderboard table,
    /// returning the opaque record id.
    async fn save_score(&self, score: &GameScore) -> Result<String, StoreError>;

    /// All leaderboard rows, sorted by score descending. Callers take
    /// the top N they want to display.
    async fn leaderboard(&self) -> Result<Vec<LeaderboardRow>, StoreError>;

    /// Persist a share record, returning the opaque record id.
    async fn save_share(&self, record: &ShareRecord) -> Result<String, StoreError>;

    /// Read back a share record. An unknown id is `Ok(None)`, not an error.
    async fn fetch_share(&self, share_id: &str) -> Result<Option<ShareRecord>, StoreError>;

    /// Look up a configured letter pair in the daily-pairs table. `None`
    /// means the pair is not curated and the caller falls back to its
    /// configured letters.
    async fn letter_pair(
        &self,
        first: char,
        last: char,
    ) -> Result<Option<LetterPair>, StoreError>;
}
