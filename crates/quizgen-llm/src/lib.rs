//! quizgen-llm
//!
//! Question generation through an OpenAI-compatible chat-completion API,
//! with structured output parsing and a deterministic fallback.

pub mod client;
pub mod error;
pub mod extract;
pub mod generator;
pub mod prompt;
