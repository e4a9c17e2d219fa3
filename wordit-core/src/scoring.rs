use wordit_types::WordEntry;

pub struct ScoreAccumulator;

impl ScoreAccumulator {
    /// Score for a single accepted word: its length in characters.
    pub fn word_score(word: &str) -> i32 {
        word.chars().count() as i32
    }

    /// Running total over the session, recomputed from the entry list.
    pub fn total(entries: &[WordEntry]) -> i32 {
        entries.iter().map(|entry| entry.score).sum()
    }
}
