use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A multiple-choice question parsed from the generation service's reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// A short content unit reviewed on a spaced-repetition schedule.
///
/// Ids are assigned sequentially across generation batches and are never
/// reused within a process lifetime. `next_review` stays `None` until the
/// card is rated for the first time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: u64,
    pub content: String,
    pub next_review: Option<NaiveDate>,
    pub easiness_streak: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Rating submitted against a single flashcard.
#[derive(Debug, Clone, Deserialize)]
pub struct FlashcardRating {
    pub flashcard_id: u64,
    pub difficulty: Difficulty,
}
