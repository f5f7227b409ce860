//! quizgen-pdf
//!
//! Plain-text extraction from uploaded PDF documents.

pub mod error;
pub mod extract;
