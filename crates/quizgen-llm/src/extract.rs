//! Structured output parsing for free-text model replies.
//!
//! Models often wrap the requested JSON in prose or markdown fences. The
//! reply is narrowed to the span from the first `[` to the last `]`; with
//! no such span the whole reply is parsed. When a reply holds several
//! bracketed fragments the span covers all of them and parsing fails,
//! which callers treat like any other unusable reply.

use quizgen_core::models::question::Question;

use crate::error::ExtractError;

/// Greedy span from the first `[` to the last `]`, if both exist in order.
pub fn bracketed_span(reply: &str) -> Option<&str> {
    let start = reply.find('[')?;
    let end = reply.rfind(']')?;
    (end > start).then(|| &reply[start..=end])
}

/// Parse a question array out of a model reply.
///
/// Every parsed question must satisfy [`Question::validate`].
pub fn extract_question_array(reply: &str) -> Result<Vec<Question>, ExtractError> {
    let json = bracketed_span(reply).unwrap_or(reply);
    let questions: Vec<Question> = serde_json::from_str(json)?;

    for question in &questions {
        question.validate()?;
    }

    Ok(questions)
}
