use std::path::PathBuf;
use std::sync::Arc;

use quizgen_llm::generator::QuestionGenerator;
use quizgen_pdf::extract::TextExtractor;

use crate::middleware::rate_limit::RateLimiter;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn QuestionGenerator>,
    pub extractor: Arc<dyn TextExtractor>,
    /// Directory holding in-flight uploads; files live for one request.
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub limiter: RateLimiter,
}
