use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use quizgen_core::models::question::Question;

use crate::error::ApiError;
use crate::routes::parse_count;
use crate::state::AppState;

pub const DEFAULT_DEMO_COUNT: usize = 6;

pub const SAMPLE_TEXT: &str = "Photosynthesis is the process by which green plants convert light \
energy into chemical energy.";

#[derive(Deserialize)]
pub struct DemoQuery {
    #[serde(rename = "numQuestions")]
    pub num_questions: Option<String>,
}

#[derive(Serialize)]
pub struct DemoResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub demo: bool,
}

/// Generate questions from a fixed sample sentence, no upload needed.
///
/// `numQuestions` defaults to 6 and is capped at
/// [`MAX_QUESTIONS`](quizgen_core::MAX_QUESTIONS) (50); larger values yield
/// 50 questions.
pub async fn demo(
    State(state): State<AppState>,
    Query(query): Query<DemoQuery>,
) -> Result<Json<DemoResponse>, ApiError> {
    let count = parse_count(query.num_questions.as_deref(), DEFAULT_DEMO_COUNT);

    let questions = state
        .generator
        .generate(SAMPLE_TEXT, count)
        .await
        .map_err(|e| ApiError::Internal(format!("Error generating demo questions: {e}")))?;

    Ok(Json(DemoResponse {
        success: true,
        questions,
        demo: true,
    }))
}
