use chrono::{Duration, NaiveDate};

use crate::models::{Difficulty, Flashcard};

/// Days until the next review after the first Easy ratings.
const EASY_INTERVAL_DAYS: i64 = 7;
/// Days until the next review once the easiness streak is established.
const EASY_STREAK_INTERVAL_DAYS: i64 = 30;
/// Consecutive Easy ratings needed for the long interval.
const EASY_STREAK_THRESHOLD: u32 = 2;
const MEDIUM_INTERVAL_DAYS: i64 = 5;
const HARD_INTERVAL_DAYS: i64 = 2;

/// Fixed-rule spaced-repetition calculator.
///
/// All offsets are measured from the rating date, never from the previously
/// scheduled review. The easiness streak is monotonic: Medium and Hard
/// ratings leave it untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewScheduler;

impl ReviewScheduler {
    pub fn new() -> Self {
        Self
    }

    /// Apply a rating to the card, updating its streak and next review date.
    /// Returns the newly scheduled date.
    pub fn apply_rating(
        &self,
        card: &mut Flashcard,
        difficulty: Difficulty,
        today: NaiveDate,
    ) -> NaiveDate {
        let next_review = match difficulty {
            Difficulty::Easy => {
                card.easiness_streak += 1;
                if card.easiness_streak >= EASY_STREAK_THRESHOLD {
                    today + Duration::days(EASY_STREAK_INTERVAL_DAYS)
                } else {
                    today + Duration::days(EASY_INTERVAL_DAYS)
                }
            }
            Difficulty::Medium => today + Duration::days(MEDIUM_INTERVAL_DAYS),
            Difficulty::Hard => today + Duration::days(HARD_INTERVAL_DAYS),
        };

        card.next_review = Some(next_review);
        next_review
    }
}
