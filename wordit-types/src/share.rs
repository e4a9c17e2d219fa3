use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::WordEntry;

/// A persisted snapshot of a finished session, keyed by an opaque share id.
/// Written once at share time, read-only thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShareRecord {
    pub share_id: String,
    pub username: String,
    pub score: i32,
    pub words_count: i32,
    /// Seconds of the round actually played
    pub time_used: i32,
    /// RFC 3339 date string
    pub date: String,
    pub words: Vec<WordEntry>,
}

/// A finished session's score as written to the leaderboard table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameScore {
    pub username: String,
    pub score: i32,
    pub words_count: i32,
    pub time_used: i32,
    pub words: Vec<WordEntry>,
    pub date: String,
    pub share_id: Option<String>,
}

/// One leaderboard line as read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LeaderboardRow {
    /// Opaque store record id
    pub id: String,
    pub username: String,
    pub score: i32,
    pub words_count: i32,
    pub time_used: i32,
    pub date: String,
}
