use axum::extract::rejection::JsonRejection;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use quizgen_core::export::{render_text, EXPORT_FILENAME};
use quizgen_core::models::question::Question;

use crate::error::ApiError;

/// Render the posted questions as a downloadable text document.
///
/// An empty list yields `204 No Content`; there is nothing to download.
pub async fn export_text(
    payload: Result<Json<Vec<Question>>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(questions) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    if questions.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let headers = [
        (CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{EXPORT_FILENAME}\""),
        ),
    ];

    Ok((headers, render_text(&questions)).into_response())
}
