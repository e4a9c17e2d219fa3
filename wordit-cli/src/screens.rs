use std::io::Write;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::warn;
use uuid::Uuid;

use wordit_core::{GameSession, SubmitError, WordValidator};
use wordit_store::SessionStore;
use wordit_types::{GameScore, LetterPair, SessionSummary, ShareRecord};

use crate::config::Config;

pub type Input = Lines<BufReader<Stdin>>;

fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn prompt(text: &str) {
    print!("{}", text);
    let _ = std::io::stdout().flush();
}

/// Login screen: ask for a username unless one is configured.
pub async fn login(config: &Config, input: &mut Input) -> anyhow::Result<String> {
    if let Some(username) = &config.username {
        return Ok(username.clone());
    }

    prompt("Username: ");
    let name = input
        .next_line()
        .await?
        .unwrap_or_default()
        .trim()
        .to_string();

    Ok(if name.is_empty() {
        "anonymous".to_string()
    } else {
        name
    })
}

/// Use the curated daily pair when the store has one for the configured
/// letters, otherwise play with the configured letters as-is.
pub async fn resolve_letter_pair(config: &Config, store: &dyn SessionStore) -> LetterPair {
    let configured = LetterPair::new(config.first_letter, config.last_letter);

    match store.letter_pair(configured.first, configured.last).await {
        Ok(Some(pair)) => pair,
        Ok(None) => configured,
        Err(err) => {
            warn!("Letter pair lookup failed, using configured pair: {}", err);
            configured
        }
    }
}

/// The game screen: a one-second tick interval and stdin submissions,
/// multiplexed on a single task until the countdown ends.
pub async fn run_game(
    pair: LetterPair,
    config: &Config,
    validator: &WordValidator,
    input: &mut Input,
) -> anyhow::Result<SessionSummary> {
    let mut session = GameSession::new(pair, config.round_seconds);

    println!();
    println!(
        "Wordit! Words must start with \"{}\" and end with \"{}\".",
        pair.first.to_ascii_uppercase(),
        pair.last.to_ascii_uppercase()
    );
    println!(
        "You have {}. One word per line. Go!",
        format_time(config.round_seconds)
    );

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    interval.tick().await; // the first tick fires immediately

    while !session.ended() {
        tokio::select! {
            _ = interval.tick() => {
                session.tick();
                if session.remaining_seconds() > 0 && session.remaining_seconds() % 30 == 0 {
                    println!(
                        "[{} left, score {}]",
                        format_time(session.remaining_seconds()),
                        session.total_score
                    );
                }
            }
            line = input.next_line() => {
                match line? {
                    Some(raw) => submit_line(&mut session, validator, &mut interval, &raw).await,
                    None => break, // stdin closed
                }
            }
        }
    }

    println!();
    println!("Time's up!");
    Ok(session.summary())
}

/// One submission. While the dictionary lookup is in flight the clock
/// keeps ticking but no further input is read, so at most one validation
/// is ever outstanding.
async fn submit_line(
    session: &mut GameSession,
    validator: &WordValidator,
    interval: &mut tokio::time::Interval,
    raw: &str,
) {
    if raw.trim().is_empty() {
        return;
    }

    let word = match session.precheck(raw, validator) {
        Ok(word) => word,
        Err(SubmitError::SessionEnded) => return,
        Err(SubmitError::Rejected(reason)) => {
            println!("  {}", reason.message(raw.trim(), &session.pair));
            return;
        }
    };

    let lookup = validator.check_dictionary(&word);
    tokio::pin!(lookup);
    let outcome = loop {
        tokio::select! {
            _ = interval.tick() => session.tick(),
            result = &mut lookup => break result,
        }
    };

    if let Err(reason) = outcome {
        println!("  {}", reason.message(&word, &session.pair));
        return;
    }

    // The lookup may have outlived the round; commit re-checks.
    match session.commit(word.clone()) {
        Ok(entry) => println!(
            "  \"{}\" added! +{} points (total {})",
            entry.word, entry.score, session.total_score
        ),
        Err(SubmitError::SessionEnded) => println!("  Too late, the round is over."),
        Err(SubmitError::Rejected(reason)) => {
            println!("  {}", reason.message(&word, &session.pair))
        }
    }
}

/// Results screen: print the summary, then optionally share and upload
/// the score. Returns the share id when a share record was written.
pub async fn show_results(
    summary: &SessionSummary,
    username: &str,
    store: &dyn SessionStore,
    input: &mut Input,
) -> anyhow::Result<Option<String>> {
    println!();
    println!("=== Results for {} ===", username);
    println!("Total score: {}", summary.total_score);
    println!("Words found: {}", summary.words_count());
    println!("Time used:   {}", format_time(summary.time_used));
    for entry in &summary.words {
        println!("  {:<16} +{}", entry.word, entry.score);
    }

    prompt("\nShare your score? [y/N] ");
    let answer = input.next_line().await?.unwrap_or_default();
    let date = chrono::Utc::now().to_rfc3339();

    let share_id = if answer.trim().eq_ignore_ascii_case("y") {
        let share_id = Uuid::new_v4().simple().to_string();
        let record = ShareRecord {
            share_id: share_id.clone(),
            username: username.to_string(),
            score: summary.total_score,
            words_count: summary.words_count() as i32,
            time_used: summary.time_used as i32,
            date: date.clone(),
            words: summary.words.clone(),
        };

        match store.save_share(&record).await {
            Ok(_) => {
                println!("Shared! Your share id: {}", share_id);
                Some(share_id)
            }
            Err(err) => {
                println!("Could not share your score: {}", err);
                None
            }
        }
    } else {
        None
    };

    let score = GameScore {
        username: username.to_string(),
        score: summary.total_score,
        words_count: summary.words_count() as i32,
        time_used: summary.time_used as i32,
        words: summary.words.clone(),
        date,
        share_id: share_id.clone(),
    };

    if let Err(err) = store.save_score(&score).await {
        println!("Could not upload your score: {}", err);
    }

    Ok(share_id)
}

/// Leaderboard screen: the top N rows by score.
pub async fn show_leaderboard(store: &dyn SessionStore, top: usize) {
    println!();
    println!("=== Leaderboard ===");

    match store.leaderboard().await {
        Ok(rows) => {
            if rows.is_empty() {
                println!("No scores yet. Be the first!");
            }
            for (rank, row) in rows.iter().take(top).enumerate() {
                println!(
                    "{:>3}. {:<16} {:>5}  ({} words, {})",
                    rank + 1,
                    row.username,
                    row.score,
                    row.words_count,
                    format_time(row.time_used.max(0) as u32)
                );
            }
        }
        Err(err) => println!("Failed to load leaderboard: {}", err),
    }
}

/// Shared-score view: replay a share record by id, with an explicit
/// not-found state for unknown or expired ids.
pub async fn show_shared(store: &dyn SessionStore, share_id: &str) {
    println!();

    match store.fetch_share(share_id).await {
        Ok(Some(record)) => {
            println!(
                "{} scored {} points ({} words in {})",
                record.username,
                record.score,
                record.words_count,
                format_time(record.time_used.max(0) as u32)
            );
            for entry in &record.words {
                println!("  {:<16} +{}", entry.word, entry.score);
            }
        }
        Ok(None) => println!("Score not found or has expired"),
        Err(err) => println!("Failed to load score: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_pads_seconds() {
        assert_eq!(format_time(180), "3:00");
        assert_eq!(format_time(95), "1:35");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(0), "0:00");
    }
}
