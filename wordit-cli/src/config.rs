use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub username: Option<String>,
    pub first_letter: char,
    pub last_letter: char,
    pub round_seconds: u32,
    pub dictionary_check: bool,
    pub leaderboard_size: usize,
    pub airtable_api_key: Option<String>,
    pub airtable_base_id: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            username: env::var("WORDIT_USERNAME").ok(),
            first_letter: env::var("WORDIT_FIRST_LETTER")
                .unwrap_or_else(|_| "A".to_string())
                .chars()
                .next()
                .expect("Invalid WORDIT_FIRST_LETTER"),
            last_letter: env::var("WORDIT_LAST_LETTER")
                .unwrap_or_else(|_| "E".to_string())
                .chars()
                .next()
                .expect("Invalid WORDIT_LAST_LETTER"),
            round_seconds: env::var("WORDIT_ROUND_SECONDS")
                .unwrap_or_else(|_| "180".to_string())
                .parse()
                .expect("Invalid WORDIT_ROUND_SECONDS"),
            dictionary_check: env::var("WORDIT_DICTIONARY_CHECK")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .expect("Invalid WORDIT_DICTIONARY_CHECK"),
            leaderboard_size: env::var("WORDIT_LEADERBOARD_SIZE")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .expect("Invalid WORDIT_LEADERBOARD_SIZE"),
            airtable_api_key: env::var("AIRTABLE_API_KEY").ok(),
            airtable_base_id: env::var("AIRTABLE_BASE_ID").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
