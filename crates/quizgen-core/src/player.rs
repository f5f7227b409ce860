//! Standalone quiz player.
//!
//! The player reads a static deck of `{question, choices, answer}` records
//! and walks it in order. States are the question indices `0..len`, with
//! `len` as the terminal "finished" state.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One record of the player's `questions.json` deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerQuestion {
    pub question: String,
    pub choices: Vec<String>,
    /// Index into `choices` of the correct choice.
    pub answer: usize,
}

/// Parse a deck and check every answer index points at a choice.
pub fn load_deck(json: &str) -> Result<Vec<PlayerQuestion>, CoreError> {
    let deck: Vec<PlayerQuestion> = serde_json::from_str(json)?;

    for (index, q) in deck.iter().enumerate() {
        if q.answer >= q.choices.len() {
            return Err(CoreError::AnswerOutOfRange {
                index,
                answer: q.answer,
                choices: q.choices.len(),
            });
        }
    }

    Ok(deck)
}

/// Outcome of selecting a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub correct: bool,
    pub finished: bool,
}

/// State of one page session of the quiz player.
#[derive(Debug, Clone)]
pub struct QuizPlayer {
    questions: Vec<PlayerQuestion>,
    current: usize,
    score: usize,
}

impl QuizPlayer {
    pub fn new(questions: Vec<PlayerQuestion>) -> Self {
        Self {
            questions,
            current: 0,
            score: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// The question on screen, or `None` once finished.
    pub fn current_question(&self) -> Option<&PlayerQuestion> {
        self.questions.get(self.current)
    }

    /// Select choice `choice` for the current question and advance.
    pub fn select(&mut self, choice: usize) -> Result<Selection, CoreError> {
        let question = self.current_question().ok_or(CoreError::QuizFinished)?;
        let correct = choice == question.answer;

        if correct {
            self.score += 1;
        }
        self.current += 1;

        Ok(Selection {
            correct,
            finished: self.is_finished(),
        })
    }

    /// Progress through the deck as `(current + 1) / len * 100`.
    pub fn progress_percent(&self) -> Option<f64> {
        if self.is_finished() {
            return None;
        }
        Some((self.current + 1) as f64 / self.questions.len() as f64 * 100.0)
    }

    /// CSS width of the progress bar, e.g. `"50%"`.
    pub fn progress_width(&self) -> Option<String> {
        self.progress_percent().map(|p| format!("{p}%"))
    }

    pub fn progress_label(&self) -> Option<String> {
        if self.is_finished() {
            return None;
        }
        Some(format!(
            "Question {} of {}",
            self.current + 1,
            self.questions.len()
        ))
    }

    /// Final `score/len` summary, available once finished.
    pub fn summary(&self) -> Option<String> {
        self.is_finished()
            .then(|| format!("{}/{}", self.score, self.questions.len()))
    }
}
