use thiserror::Error;
use wordit_types::{LetterPair, RejectReason, SessionSummary, WordEntry};

use crate::{Countdown, ScoreAccumulator, SessionEvent, SessionEventBus, WordValidator};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// The round is over; rejected with no side effect.
    #[error("the round is over")]
    SessionEnded,
    #[error("word rejected ({0:?})")]
    Rejected(RejectReason),
}

/// One timed play-through: a countdown, the ordered list of accepted
/// words, and the running total. `total_score` always equals the sum of
/// entry scores, `ended` is terminal, and entries are never removed or
/// edited once accepted.
pub struct GameSession {
    pub pair: LetterPair,
    countdown: Countdown,
    pub entries: Vec<WordEntry>,
    pub total_score: i32,
    pub event_bus: SessionEventBus,
}

impl GameSession {
    pub fn new(pair: LetterPair, duration_seconds: u32) -> Self {
        Self {
            pair,
            countdown: Countdown::from_secs(duration_seconds),
            entries: Vec::new(),
            total_score: 0,
            event_bus: SessionEventBus::new(),
        }
    }

    pub fn ended(&self) -> bool {
        self.countdown.is_ended()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Advance the clock by one second, announcing the tick and, when the
    /// clock runs out, the end of the session.
    pub fn tick(&mut self) {
        if self.countdown.is_ended() {
            return;
        }

        let just_ended = self.countdown.tick();
        self.event_bus.publish(SessionEvent::Tick {
            remaining_seconds: self.countdown.remaining(),
        });

        if just_ended {
            self.event_bus.publish(SessionEvent::SessionEnded {
                total_score: self.total_score,
                words_count: self.entries.len(),
            });
        }
    }

    /// Synchronous half of a submission: the ended gate plus the
    /// validator's normalize/length/format/duplicate rules.
    pub fn precheck(&self, raw: &str, validator: &WordValidator) -> Result<String, SubmitError> {
        if self.ended() {
            return Err(SubmitError::SessionEnded);
        }

        validator
            .precheck(raw, &self.entries)
            .map_err(SubmitError::Rejected)
    }

    /// Append a prechecked word. Re-checks `ended` and the duplicate rule
    /// so a word whose dictionary lookup outlived the round, or raced a
    /// twin submission, is discarded rather than committed.
    pub fn commit(&mut self, word: String) -> Result<WordEntry, SubmitError> {
        if self.ended() {
            return Err(SubmitError::SessionEnded);
        }

        if self
            .entries
            .iter()
            .any(|entry| entry.word.to_lowercase() == word)
        {
            return Err(SubmitError::Rejected(RejectReason::Duplicate));
        }

        let entry = WordEntry {
            score: ScoreAccumulator::word_score(&word),
            word,
            timestamp: chrono::Utc::now().timestamp_millis(),
        };

        self.entries.push(entry.clone());
        self.total_score = ScoreAccumulator::total(&self.entries);

        self.event_bus.publish(SessionEvent::WordAccepted {
            entry: entry.clone(),
            total_score: self.total_score,
        });

        Ok(entry)
    }

    /// Full submission pipeline: precheck, optional dictionary lookup,
    /// commit. The only suspension point is the lookup; input handling is
    /// expected to allow at most one submission in flight.
    pub async fn submit(
        &mut self,
        raw: &str,
        validator: &WordValidator,
    ) -> Result<WordEntry, SubmitError> {
        let word = match self.precheck(raw, validator) {
            Ok(word) => word,
            Err(err) => {
                self.publish_rejection(raw, &err);
                return Err(err);
            }
        };

        if let Err(reason) = validator.check_dictionary(&word).await {
            let err = SubmitError::Rejected(reason);
            self.publish_rejection(&word, &err);
            return Err(err);
        }

        self.commit(word.clone()).inspect_err(|err| {
            self.publish_rejection(&word, err);
        })
    }

    fn publish_rejection(&mut self, word: &str, err: &SubmitError) {
        if let SubmitError::Rejected(reason) = err {
            self.event_bus.publish(SessionEvent::WordRejected {
                word: word.to_string(),
                reason: *reason,
            });
        }
    }

    /// The bundle handed from the game screen to the results screen.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            total_score: self.total_score,
            words: self.entries.clone(),
            time_used: self.countdown.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScoreAccumulator;

    fn session() -> GameSession {
        GameSession::new(LetterPair::new('A', 'E'), 180)
    }

    fn validator() -> WordValidator {
        WordValidator::new(LetterPair::new('A', 'E'))
    }

    #[tokio::test]
    async fn test_spec_scenario() {
        let mut session = session();
        let validator = validator();

        let entry = session.submit("apple", &validator).await.unwrap();
        assert_eq!(entry.score, 5);
        assert_eq!(session.total_score, 5);

        assert_eq!(
            session.submit("apple", &validator).await,
            Err(SubmitError::Rejected(RejectReason::Duplicate))
        );
        assert_eq!(
            session.submit("dog", &validator).await,
            Err(SubmitError::Rejected(RejectReason::Format))
        );
        assert_eq!(
            session.submit("a", &validator).await,
            Err(SubmitError::Rejected(RejectReason::Length))
        );

        let entry = session.submit("axe", &validator).await.unwrap();
        assert_eq!(entry.score, 3);
        assert_eq!(session.total_score, 8);
        assert_eq!(session.entries.len(), 2);
    }

    #[tokio::test]
    async fn test_total_matches_entry_scores_after_every_accept() {
        let mut session = session();
        let validator = validator();

        for word in ["apple", "ante", "ae", "awesome"] {
            session.submit(word, &validator).await.unwrap();
            assert_eq!(session.total_score, ScoreAccumulator::total(&session.entries));
        }
    }

    #[tokio::test]
    async fn test_rejection_leaves_state_unchanged() {
        let mut session = session();
        let validator = validator();

        session.submit("apple", &validator).await.unwrap();
        let before = session.entries.clone();

        session.submit("dog", &validator).await.unwrap_err();
        session.submit("apple", &validator).await.unwrap_err();

        assert_eq!(session.entries, before);
        assert_eq!(session.total_score, 5);
    }

    #[tokio::test]
    async fn test_ended_session_rejects_everything() {
        let mut session = GameSession::new(LetterPair::new('A', 'E'), 1);
        let validator = validator();

        session.tick();
        assert!(session.ended());
        assert_eq!(session.remaining_seconds(), 0);

        assert_eq!(
            session.submit("apple", &validator).await,
            Err(SubmitError::SessionEnded)
        );
        // Idempotent: rejecting again gives the same answer
        assert_eq!(
            session.submit("apple", &validator).await,
            Err(SubmitError::SessionEnded)
        );
        assert!(session.entries.is_empty());
    }

    #[test]
    fn test_commit_discards_results_arriving_after_the_end() {
        let mut session = GameSession::new(LetterPair::new('A', 'E'), 2);
        let validator = validator();

        // Precheck passes while the round is live...
        let word = session.precheck("apple", &validator).unwrap();

        // ...but the round ends while the lookup is outstanding
        session.tick();
        session.tick();
        assert!(session.ended());

        assert_eq!(session.commit(word), Err(SubmitError::SessionEnded));
        assert!(session.entries.is_empty());
    }

    #[test]
    fn test_summary_carries_words_in_submission_order() {
        let mut session = session();
        for word in ["apple", "axe", "ane"] {
            session.commit(word.to_string()).unwrap();
        }
        for _ in 0..30 {
            session.tick();
        }

        let summary = session.summary();
        assert_eq!(summary.total_score, 11);
        assert_eq!(summary.time_used, 30);
        let words: Vec<&str> = summary.words.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["apple", "axe", "ane"]);
    }

    #[test]
    fn test_full_round_of_ticks_ends_session() {
        let mut session = session();

        for _ in 0..180 {
            session.tick();
        }

        assert!(session.ended());
        assert_eq!(session.remaining_seconds(), 0);
        assert_eq!(session.summary().time_used, 180);
    }
}
