//! quizgen-core
//!
//! Pure domain types shared by the Quizgen crates: generated questions,
//! placeholder (mock) generation, plain-text export, and the standalone
//! quiz player. No I/O and no network dependency.

pub mod error;
pub mod export;
pub mod mock;
pub mod models;
pub mod player;

/// Upper bound on the number of questions requested in one generation.
pub const MAX_QUESTIONS: usize = 50;
