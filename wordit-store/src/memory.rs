use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use wordit_types::{GameScore, LeaderboardRow, LetterPair, ShareRecord};

use crate::{SessionStore, StoreError};

/// In-memory stand-in for the hosted store, used by tests and for
/// offline play when no store credentials are configured.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    shares: HashMap<String, ShareRecord>,
    scores: Vec<(String, GameScore)>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Inner {
    fn next_record_id(&mut self) -> String {
        self.next_id += 1;
        format!("rec{}", self.next_id)
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn save_score(&self, score: &GameScore) -> Result<String, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_record_id();
        inner.scores.push((id.clone(), score.clone()));
        Ok(id)
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardRow>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<LeaderboardRow> = inner
            .scores
            .iter()
            .map(|(id, score)| LeaderboardRow {
                id: id.clone(),
                username: score.username.clone(),
                score: score.score,
                words_count: score.words_count,
                time_used: score.time_used,
                date: score.date.clone(),
            })
            .collect();

        rows.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(rows)
    }

    async fn save_share(&self, record: &ShareRecord) -> Result<String, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_record_id();
        inner.shares.insert(record.share_id.clone(), record.clone());
        Ok(id)
    }

    async fn fetch_share(&self, share_id: &str) -> Result<Option<ShareRecord>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.shares.get(share_id).cloned())
    }

    async fn letter_pair(
        &self,
        _first: char,
        _last: char,
    ) -> Result<Option<LetterPair>, StoreError> {
        Ok(None)
    }
}
