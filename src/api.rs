use std::path::{Path, PathBuf};

use axum::{
    Router,
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tokio::fs;
use tracing::error;

use crate::{
    errors::{ApiError, ErrorContext, ErrorResponse},
    extractor,
    flashcards::{self, DEFAULT_FLASHCARD_COUNT},
    llm_service::{DEFAULT_QUIZ_SIZE, LLMService},
    mcq_parser,
    models::{Flashcard, FlashcardRating, QuizQuestion},
    study_service::{RatingError, StudyService},
};

// Import logging macros
use crate::{log_api_start, log_api_success, log_api_warn};

#[derive(Clone)]
pub struct AppState {
    pub study_service: StudyService,
    pub llm_service: LLMService,
    pub upload_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct QuizGenerationResponse {
    pub message: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Serialize)]
pub struct QuizListResponse {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Serialize)]
pub struct FlashcardGenerationResponse {
    pub message: String,
    pub flashcards: Vec<Flashcard>,
}

#[derive(Debug, Serialize)]
pub struct FlashcardListResponse {
    pub flashcards: Vec<Flashcard>,
}

#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub message: String,
    pub next_review: NaiveDate,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// Store an uploaded document under its original basename and remember it as
/// the current document. A later upload with the same name overwrites the
/// file; any later upload replaces the stored path.
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<UploadResponse> {
    log_api_start!("upload_document");

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::MissingInput(format!("Invalid multipart request: {e}"))
            .to_response_with_context(ErrorContext::new("upload_document", "document"))
    })? {
        let Some(raw_name) = field.file_name().map(str::to_string) else {
            continue;
        };

        // Strip any directory components a client might smuggle in.
        let Some(filename) = Path::new(&raw_name)
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
        else {
            continue;
        };

        let bytes = field.bytes().await.map_err(|e| {
            ApiError::MissingInput(format!("Failed to read uploaded file: {e}"))
                .to_response_with_context(
                    ErrorContext::new("upload_document", "document").with_id(&filename),
                )
        })?;

        let path = state.upload_dir.join(&filename);
        fs::write(&path, &bytes).await.map_err(|e| {
            ApiError::Internal(e.into()).to_response_with_context(
                ErrorContext::new("upload_document", "document").with_id(&filename),
            )
        })?;

        state.study_service.set_document(path);
        log_api_success!("upload_document", filename = filename, "document stored");

        return Ok(Json(UploadResponse {
            filename,
            message: "PDF uploaded successfully".to_string(),
        }));
    }

    log_api_warn!("upload_document", "multipart request contained no file");
    Err(
        ApiError::MissingInput("No file provided".to_string())
            .to_response_with_context(ErrorContext::new("upload_document", "document")),
    )
}

/// Generate a fresh quiz from the current document, replacing the stored one.
pub async fn generate_quiz(State(state): State<AppState>) -> ApiResult<QuizGenerationResponse> {
    log_api_start!("generate_quiz");

    let text = extract_current_document(&state, "generate_quiz")?;

    if text.trim().is_empty() {
        log_api_warn!("generate_quiz", "document contained no extractable text");
        return Err(
            ApiError::GenerationFailure("Failed to generate MCQs".to_string())
                .to_response_with_context(ErrorContext::new("generate_quiz", "quiz")),
        );
    }

    let raw = match state.llm_service.generate_mcqs(&text, DEFAULT_QUIZ_SIZE).await {
        Ok(raw) => raw,
        Err(e) => {
            error!(operation = "generate_quiz", error = %e, "MCQ generation call failed");
            return Err(
                ApiError::GenerationFailure("Failed to generate MCQs".to_string())
                    .to_response_with_context(ErrorContext::new("generate_quiz", "quiz")),
            );
        }
    };

    if raw.trim().is_empty() {
        return Err(
            ApiError::GenerationFailure("Failed to generate MCQs".to_string())
                .to_response_with_context(ErrorContext::new("generate_quiz", "quiz")),
        );
    }

    let questions = mcq_parser::parse_response(&raw);
    state.study_service.store_quiz(questions.clone());
    log_api_success!("generate_quiz", count = questions.len(), "quiz generated");

    Ok(Json(QuizGenerationResponse {
        message: "MCQs generated successfully".to_string(),
        questions,
    }))
}

pub async fn get_quiz(State(state): State<AppState>) -> Json<QuizListResponse> {
    let questions = state.study_service.quiz();
    log_api_success!("get_quiz", count = questions.len(), "quiz retrieved");
    Json(QuizListResponse { questions })
}

/// Generate a batch of flashcards from the current document and append it to
/// the accumulated collection.
pub async fn generate_flashcards(
    State(state): State<AppState>,
) -> ApiResult<FlashcardGenerationResponse> {
    log_api_start!("generate_flashcards");

    let text = extract_current_document(&state, "generate_flashcards")?;

    let existing_count = state.study_service.flashcard_count();
    let new_cards = flashcards::generate_flashcards(
        &text,
        DEFAULT_FLASHCARD_COUNT,
        existing_count,
        &mut rand::thread_rng(),
    );

    let all_cards = state.study_service.append_flashcards(new_cards);
    log_api_success!(
        "generate_flashcards",
        count = all_cards.len(),
        "flashcards generated"
    );

    Ok(Json(FlashcardGenerationResponse {
        message: "Flashcards generated successfully".to_string(),
        flashcards: all_cards,
    }))
}

pub async fn get_flashcards(State(state): State<AppState>) -> Json<FlashcardListResponse> {
    let flashcards = state.study_service.flashcards();
    log_api_success!("get_flashcards", count = flashcards.len(), "flashcards retrieved");
    Json(FlashcardListResponse { flashcards })
}

/// Apply a difficulty rating to a flashcard and report its next review date.
pub async fn rate_flashcard(
    State(state): State<AppState>,
    Json(rating): Json<FlashcardRating>,
) -> ApiResult<RatingResponse> {
    log_api_start!("rate_flashcard", flashcard_id = rating.flashcard_id);

    let today = Utc::now().date_naive();
    match state
        .study_service
        .rate_flashcard(rating.flashcard_id, rating.difficulty, today)
    {
        Ok(next_review) => {
            log_api_success!(
                "rate_flashcard",
                flashcard_id = rating.flashcard_id,
                "rating applied"
            );
            Ok(Json(RatingResponse {
                message: "Flashcard rating updated".to_string(),
                next_review,
            }))
        }
        Err(RatingError::NoFlashcards) => Err(ApiError::MissingInput(
            "No flashcards available".to_string(),
        )
        .to_response_with_context(ErrorContext::new("rate_flashcard", "flashcard"))),
        Err(e @ RatingError::NotFound(_)) => {
            log_api_warn!(
                "rate_flashcard",
                flashcard_id = rating.flashcard_id,
                "flashcard not found"
            );
            Err(ApiError::NotFound(e.to_string()).to_response_with_context(
                ErrorContext::new("rate_flashcard", "flashcard")
                    .with_id(&rating.flashcard_id.to_string()),
            ))
        }
    }
}

/// Fetch the stored document and extract its text, mapping the two failure
/// modes (nothing uploaded yet, unreadable document) to API errors.
fn extract_current_document(
    state: &AppState,
    operation: &str,
) -> Result<String, (StatusCode, Json<ErrorResponse>)> {
    let Some(path) = state.study_service.document() else {
        return Err(
            ApiError::MissingInput("No PDF uploaded yet".to_string())
                .to_response_with_context(ErrorContext::new(operation, "document")),
        );
    };

    extractor::extract_text(&path).map_err(|e| {
        ApiError::Internal(e.into()).to_response_with_context(
            ErrorContext::new(operation, "document").with_id(&path.display().to_string()),
        )
    })
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/upload-pdf", post(upload_document))
        .route("/generate-quiz", post(generate_quiz))
        .route("/get-quiz", get(get_quiz))
        .route("/generate-flashcards", post(generate_flashcards))
        .route("/get-flashcards", get(get_flashcards))
        .route("/rate-flashcard", post(rate_flashcard))
        .with_state(state)
}
