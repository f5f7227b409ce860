use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{info, warn};

use quizgen_core::models::question::Question;
use quizgen_pdf::error::PdfError;
use quizgen_pdf::extract::TextExtractor;

use crate::error::ApiError;
use crate::routes::parse_count;
use crate::state::AppState;

pub const DEFAULT_UPLOAD_COUNT: usize = 5;

const PDF_MIME: &str = "application/pdf";
const FILE_FIELD: &str = "pdf";
const COUNT_FIELD: &str = "numQuestions";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Length of the extracted text in characters.
    pub extracted_text_length: usize,
}

#[derive(Debug, Error)]
enum UploadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Pdf(#[from] PdfError),

    #[error("staging task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

struct PdfUpload {
    filename: String,
    bytes: Bytes,
}

/// Generate questions from an uploaded PDF.
///
/// Expects multipart fields `pdf` (an `application/pdf` file) and
/// `numQuestions`. The file is written to the upload directory, extracted,
/// and deleted before generation starts.
///
/// `numQuestions` defaults to 5 and is capped at
/// [`MAX_QUESTIONS`](quizgen_core::MAX_QUESTIONS) (50); larger values yield
/// 50 questions.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file = None;
    let mut count_field = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(FILE_FIELD) if file.is_none() => {
                let filename = field.file_name().unwrap_or_default().to_string();
                // Browsers send an empty part when no file was chosen.
                if filename.is_empty() {
                    continue;
                }
                if field.content_type() != Some(PDF_MIME) {
                    return Err(ApiError::BadRequest(
                        "Only PDF files are allowed!".to_string(),
                    ));
                }
                let bytes = field.bytes().await?;
                file = Some(PdfUpload { filename, bytes });
            }
            Some(COUNT_FIELD) => count_field = Some(field.text().await?),
            _ => {}
        }
    }

    let file = file.ok_or_else(|| ApiError::BadRequest("No file uploaded".to_string()))?;
    let count = parse_count(count_field.as_deref(), DEFAULT_UPLOAD_COUNT);

    info!(filename = %file.filename, bytes = file.bytes.len(), count, "received PDF upload");

    let text = extract_upload(&state, file)
        .await
        .map_err(|e| ApiError::Internal(format!("Error processing PDF: {e}")))?;

    if text.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Could not extract text from PDF".to_string(),
        ));
    }

    let questions = state
        .generator
        .generate(&text, count)
        .await
        .map_err(|e| ApiError::Internal(format!("Error processing PDF: {e}")))?;

    Ok(Json(UploadResponse {
        success: true,
        questions,
        extracted_text_length: text.chars().count(),
    }))
}

/// Stage the upload on disk, extract its text, and remove it again.
///
/// Removal happens on every path; a failed delete is logged only.
async fn extract_upload(state: &AppState, upload: PdfUpload) -> Result<String, UploadError> {
    tokio::fs::create_dir_all(&state.upload_dir).await?;

    let dir = state.upload_dir.clone();
    let path = tokio::task::spawn_blocking(move || -> std::io::Result<PathBuf> {
        let mut file = staging_file(&dir, &upload.filename)?;
        file.write_all(&upload.bytes)?;
        let (_, path) = file.keep().map_err(|e| e.error)?;
        Ok(path)
    })
    .await??;

    let result = read_and_extract(state.extractor.as_ref(), &path).await;

    remove_staged(&path).await;
    result
}

async fn read_and_extract(
    extractor: &dyn TextExtractor,
    path: &Path,
) -> Result<String, UploadError> {
    let bytes = tokio::fs::read(path).await?;
    let text = extractor.extract(bytes).await?;
    Ok(text)
}

async fn remove_staged(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "failed to delete uploaded file"),
    }
}

/// Create a fresh file `<unix millis>-<random>-<original name>` inside `dir`.
///
/// Only the last path component of the client-supplied name is kept. The
/// file is created exclusively, so concurrent uploads of the same name never
/// share one. It is deleted on drop unless kept.
pub fn staging_file(dir: &Path, original: &str) -> std::io::Result<NamedTempFile> {
    let name = original
        .rsplit(['/', '\\'])
        .next()
        .filter(|n| !n.is_empty() && *n != "." && *n != "..")
        .unwrap_or("upload.pdf");

    tempfile::Builder::new()
        .prefix(&format!("{}-", jiff::Timestamp::now().as_millisecond()))
        .suffix(&format!("-{name}"))
        .tempfile_in(dir)
}
