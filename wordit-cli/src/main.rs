use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use wordit_core::WordValidator;
use wordit_store::{AirtableClient, DictionaryApiClient, MemoryStore, SessionStore};

mod config;
mod screens;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::new();

    let store: Arc<dyn SessionStore> = match (&config.airtable_api_key, &config.airtable_base_id) {
        (Some(api_key), Some(base_id)) => {
            info!("Using hosted score store");
            Arc::new(AirtableClient::new(api_key.clone(), base_id))
        }
        _ => {
            info!("No store credentials configured, playing offline");
            Arc::new(MemoryStore::new())
        }
    };

    let mut input = BufReader::new(tokio::io::stdin()).lines();

    let username = screens::login(&config, &mut input).await?;
    let pair = screens::resolve_letter_pair(&config, store.as_ref()).await;

    let validator = if config.dictionary_check {
        WordValidator::with_dictionary(pair, Arc::new(DictionaryApiClient::new()))
    } else {
        WordValidator::new(pair)
    };

    let summary = screens::run_game(pair, &config, &validator, &mut input).await?;
    let share_id = screens::show_results(&summary, &username, store.as_ref(), &mut input).await?;

    screens::show_leaderboard(store.as_ref(), config.leaderboard_size).await;

    if let Some(share_id) = share_id {
        screens::show_shared(store.as_ref(), &share_id).await;
    }

    Ok(())
}
