pub mod demo;
pub mod export;
pub mod health;
pub mod upload;

use quizgen_core::MAX_QUESTIONS;

/// Read a question count the way a form field is usually read in the
/// browser: leading digits count, trailing junk is ignored.
///
/// Absent, unparseable, and zero values fall back to `default`. Counts are
/// capped at [`MAX_QUESTIONS`].
pub fn parse_count(raw: Option<&str>, default: usize) -> usize {
    let trimmed = raw.unwrap_or_default().trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();

    match digits.parse::<usize>() {
        Ok(0) => default,
        Ok(n) => n.min(MAX_QUESTIONS),
        Err(_) if !digits.is_empty() => MAX_QUESTIONS,
        Err(_) => default,
    }
}
