use thiserror::Error;

use quizgen_core::error::CoreError;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("no message content in chat completion response")]
    EmptyResponse,

    #[error("could not read questions from model reply: {0}")]
    Extract(#[from] ExtractError),
}

/// Failure to turn a free-text model reply into a question array.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("reply is not a valid question array: {0}")]
    Json(#[from] serde_json::Error),

    #[error("reply contains an invalid question: {0}")]
    InvalidQuestion(#[from] CoreError),
}
