use async_trait::async_trait;
use reqwest::Client;
use wordit_core::DictionaryLookup;

const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Free dictionary API lookup. Any 2xx response means the word exists;
/// any other status is a definitive not-found. Transport errors bubble
/// up for the validator to fail open on.
pub struct DictionaryApiClient {
    client: Client,
    base_url: String,
}

impl DictionaryApiClient {
    pub fn new() -> Self {
        Self::with_base_url(DICTIONARY_API_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn entry_url(&self, word: &str) -> String {
        format!("{}/{}", self.base_url, word)
    }
}

impl Default for DictionaryApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DictionaryLookup for DictionaryApiClient {
    async fn contains(&self, word: &str) -> anyhow::Result<bool> {
        let response = self.client.get(self.entry_url(word)).send().await?;
        Ok(response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_url_appends_the_word() {
        let client = DictionaryApiClient::new();
        assert_eq!(
            client.entry_url("apple"),
            "https://api.dictionaryapi.dev/api/v2/entries/en/apple"
        );
    }
}
