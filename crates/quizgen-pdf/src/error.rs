use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("PDF extraction panicked (malformed document)")]
    Panicked,

    #[error("extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
