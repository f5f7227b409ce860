//! PDF text extraction via [`pdf_extract`].
//!
//! `pdf_extract` can panic on malformed input rather than returning an
//! error, so every call goes through [`std::panic::catch_unwind`].

use std::panic::{self, AssertUnwindSafe};

use futures::future::BoxFuture;
use tracing::debug;

use crate::error::PdfError;

/// Turns raw document bytes into best-effort plain text.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: Vec<u8>) -> BoxFuture<'_, Result<String, PdfError>>;
}

/// [`TextExtractor`] backed by `pdf-extract`, run on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: Vec<u8>) -> BoxFuture<'_, Result<String, PdfError>> {
        Box::pin(async move {
            let len = bytes.len();
            let text = tokio::task::spawn_blocking(move || extract_text(&bytes)).await??;
            debug!(bytes = len, chars = text.chars().count(), "extracted PDF text");
            Ok(text)
        })
    }
}

/// Extract the text of every page of a PDF held in memory.
pub fn extract_text(bytes: &[u8]) -> Result<String, PdfError> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(bytes)
    }));

    match result {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(PdfError::Extraction(e.to_string())),
        Err(_) => Err(PdfError::Panicked),
    }
}
