use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use wordit_types::{GameScore, LeaderboardRow, LetterPair, ShareRecord, WordEntry};

use crate::{SessionStore, StoreError};

const AIRTABLE_API_URL: &str = "https://api.airtable.com/v0";

mod tables {
    pub const DAILY_LETTER_PAIRS: &str = "Daily letter pairs";
    pub const GAME_SCORE: &str = "Game Score";
    pub const SHARED_SCORES: &str = "SharedScores";
}

/// Client for the hosted Airtable base the game persists into.
///
/// Field names match the live base exactly ("Total score", "Words list",
/// `ShareId`, ...); nested word lists are stored as a JSON string inside
/// a single field, the way the base was originally populated.
pub struct AirtableClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AirtableClient {
    pub fn new(api_key: String, base_id: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: format!("{}/{}", AIRTABLE_API_URL, base_id),
            api_key,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }

    async fn create_record<F: Serialize>(
        &self,
        table: &str,
        fields: F,
    ) -> Result<String, StoreError> {
        let payload = CreateRecords {
            records: vec![CreateRecord { fields }],
        };

        let page: CreatedPage = self
            .client
            .post(self.table_url(table))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let id = page
            .records
            .into_iter()
            .next()
            .map(|record| record.id)
            .ok_or_else(|| StoreError::BadResponse("create returned no records".to_string()))?;

        tracing::debug!("Created record {} in table '{}'", id, table);
        Ok(id)
    }

    async fn list_records<F: for<'de> Deserialize<'de>>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<AirtableRecord<F>>, StoreError> {
        let page: RecordPage<F> = self
            .client
            .get(self.table_url(table))
            .bearer_auth(&self.api_key)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(page.records)
    }
}

#[async_trait]
impl SessionStore for AirtableClient {
    async fn save_score(&self, score: &GameScore) -> Result<String, StoreError> {
        let fields = ScoreFields::try_from(score)?;
        self.create_record(tables::GAME_SCORE, fields).await
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardRow>, StoreError> {
        let records: Vec<AirtableRecord<ScoreFields>> = self
            .list_records(
                tables::GAME_SCORE,
                &[
                    ("sort[0][field]", "Total score"),
                    ("sort[0][direction]", "desc"),
                ],
            )
            .await?;

        Ok(records
            .into_iter()
            .map(|record| LeaderboardRow {
                id: record.id,
                username: record.fields.username,
                score: record.fields.total_score,
                words_count: record.fields.words_count,
                time_used: record.fields.time_used,
                date: record.fields.date,
            })
            .collect())
    }

    async fn save_share(&self, record: &ShareRecord) -> Result<String, StoreError> {
        let fields = SharedFields::try_from(record)?;
        self.create_record(tables::SHARED_SCORES, fields).await
    }

    async fn fetch_share(&self, share_id: &str) -> Result<Option<ShareRecord>, StoreError> {
        let formula = format!("{{ShareId}}=\"{}\"", share_id);
        let mut records: Vec<AirtableRecord<SharedFields>> = self
            .list_records(tables::SHARED_SCORES, &[("filterByFormula", &formula)])
            .await?;

        if records.is_empty() {
            return Ok(None);
        }

        let fields = records.remove(0).fields;
        Ok(Some(fields.into_share_record()?))
    }

    async fn letter_pair(
        &self,
        first: char,
        last: char,
    ) -> Result<Option<LetterPair>, StoreError> {
        let formula = format!(
            "AND({{first letter}} = '{}', {{last letter}} = '{}')",
            first, last
        );
        let records: Vec<AirtableRecord<PairFields>> = self
            .list_records(tables::DAILY_LETTER_PAIRS, &[("filterByFormula", &formula)])
            .await?;

        Ok(records.into_iter().next().and_then(|record| {
            let first = record.fields.first_letter.chars().next()?;
            let last = record.fields.last_letter.chars().next()?;
            Some(LetterPair::new(first, last))
        }))
    }
}

// Wire envelopes

#[derive(Serialize)]
struct CreateRecords<F> {
    records: Vec<CreateRecord<F>>,
}

#[derive(Serialize)]
struct CreateRecord<F> {
    fields: F,
}

#[derive(Deserialize)]
struct CreatedPage {
    records: Vec<CreatedRecord>,
}

#[derive(Deserialize)]
struct CreatedRecord {
    id: String,
}

#[derive(Deserialize)]
struct RecordPage<F> {
    records: Vec<AirtableRecord<F>>,
}

#[derive(Deserialize)]
struct AirtableRecord<F> {
    id: String,
    fields: F,
}

// Airtable omits empty fields on reads, so every field defaults.

#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
struct ScoreFields {
    username: String,
    #[serde(rename = "Total score")]
    total_score: i32,
    #[serde(rename = "Words count")]
    words_count: i32,
    #[serde(rename = "Time used")]
    time_used: i32,
    #[serde(rename = "Words list")]
    words_list: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Share ID")]
    share_id: String,
}

impl TryFrom<&GameScore> for ScoreFields {
    type Error = StoreError;

    fn try_from(score: &GameScore) -> Result<Self, StoreError> {
        Ok(Self {
            username: score.username.clone(),
            total_score: score.score,
            words_count: score.words_count,
            time_used: score.time_used,
            words_list: encode_words(&score.words)?,
            date: score.date.clone(),
            share_id: score.share_id.clone().unwrap_or_default(),
        })
    }
}

#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
struct SharedFields {
    #[serde(rename = "ShareId")]
    share_id: String,
    #[serde(rename = "Username")]
    username: String,
    #[serde(rename = "Score")]
    score: i32,
    #[serde(rename = "WordsCount")]
    words_count: i32,
    #[serde(rename = "TimeUsed")]
    time_used: i32,
    #[serde(rename = "Words")]
    words: String,
    #[serde(rename = "Date")]
    date: String,
}

impl TryFrom<&ShareRecord> for SharedFields {
    type Error = StoreError;

    fn try_from(record: &ShareRecord) -> Result<Self, StoreError> {
        Ok(Self {
            share_id: record.share_id.clone(),
            username: record.username.clone(),
            score: record.score,
            words_count: record.words_count,
            time_used: record.time_used,
            words: encode_words(&record.words)?,
            date: record.date.clone(),
        })
    }
}

impl SharedFields {
    fn into_share_record(self) -> Result<ShareRecord, StoreError> {
        Ok(ShareRecord {
            share_id: self.share_id,
            username: self.username,
            score: self.score,
            words_count: self.words_count,
            time_used: self.time_used,
            date: self.date,
            words: decode_words(&self.words)?,
        })
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PairFields {
    #[serde(rename = "first letter")]
    first_letter: String,
    #[serde(rename = "last letter")]
    last_letter: String,
}

fn encode_words(words: &[WordEntry]) -> Result<String, StoreError> {
    serde_json::to_string(words).map_err(|e| StoreError::BadResponse(e.to_string()))
}

fn decode_words(raw: &str) -> Result<Vec<WordEntry>, StoreError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| StoreError::BadResponse(e.to_string()))
}
