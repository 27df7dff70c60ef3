use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::models::{Difficulty, Flashcard, QuizQuestion};
use crate::review_scheduler::ReviewScheduler;

/// Failures when rating a flashcard. The collection is left unchanged.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("No flashcards available")]
    NoFlashcards,

    #[error("Flashcard with id '{0}' not found")]
    NotFound(u64),
}

/// The three single-slot stores: latest document, latest quiz, accumulated
/// flashcards. A second upload silently replaces the first; quiz generation
/// discards the previous set; flashcards only ever grow.
#[derive(Debug, Default)]
struct StudyState {
    document: Option<PathBuf>,
    quiz: Vec<QuizQuestion>,
    flashcards: Vec<Flashcard>,
}

#[derive(Clone)]
pub struct StudyService {
    state: Arc<Mutex<StudyState>>,
    scheduler: ReviewScheduler,
}

impl Default for StudyService {
    fn default() -> Self {
        Self::new()
    }
}

impl StudyService {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(StudyState::default())),
            scheduler: ReviewScheduler::new(),
        }
    }

    /// Replace the stored document path with the latest upload.
    pub fn set_document(&self, path: PathBuf) {
        let mut state = self.state.lock().unwrap();
        if let Some(previous) = &state.document {
            debug!(previous = %previous.display(), "Replacing stored document");
        }
        info!(document = %path.display(), "Stored uploaded document");
        state.document = Some(path);
    }

    pub fn document(&self) -> Option<PathBuf> {
        self.state.lock().unwrap().document.clone()
    }

    /// Replace the stored quiz with a freshly generated one.
    pub fn store_quiz(&self, questions: Vec<QuizQuestion>) {
        let mut state = self.state.lock().unwrap();
        info!(
            question_count = questions.len(),
            replaced = state.quiz.len(),
            "Stored generated quiz"
        );
        state.quiz = questions;
    }

    pub fn quiz(&self) -> Vec<QuizQuestion> {
        self.state.lock().unwrap().quiz.clone()
    }

    pub fn flashcard_count(&self) -> usize {
        self.state.lock().unwrap().flashcards.len()
    }

    /// Append a generation batch and return the full accumulated collection.
    pub fn append_flashcards(&self, new_cards: Vec<Flashcard>) -> Vec<Flashcard> {
        let mut state = self.state.lock().unwrap();
        info!(
            added = new_cards.len(),
            total = state.flashcards.len() + new_cards.len(),
            "Appended generated flashcards"
        );
        state.flashcards.extend(new_cards);
        state.flashcards.clone()
    }

    pub fn flashcards(&self) -> Vec<Flashcard> {
        self.state.lock().unwrap().flashcards.clone()
    }

    /// Apply a difficulty rating to one flashcard and return its next review
    /// date. Offsets are measured from `today`, the date the rating arrived.
    pub fn rate_flashcard(
        &self,
        flashcard_id: u64,
        difficulty: Difficulty,
        today: NaiveDate,
    ) -> Result<NaiveDate, RatingError> {
        let mut state = self.state.lock().unwrap();

        if state.flashcards.is_empty() {
            return Err(RatingError::NoFlashcards);
        }

        let card = state
            .flashcards
            .iter_mut()
            .find(|card| card.id == flashcard_id)
            .ok_or(RatingError::NotFound(flashcard_id))?;

        let next_review = self.scheduler.apply_rating(card, difficulty, today);
        debug!(
            flashcard_id,
            difficulty = ?difficulty,
            next_review = %next_review,
            easiness_streak = card.easiness_streak,
            "Applied flashcard rating"
        );

        Ok(next_review)
    }
}
