//! Deterministic placeholder questions.
//!
//! Used when no LLM credential is configured, or when a live generation
//! fails. Even indices are multiple-choice, odd indices short-answer.

use std::collections::BTreeMap;

use crate::models::question::{OptionKey, Question};

const SAMPLE_ANSWER: &str =
    "This is a sample answer that would be generated based on the document content.";

/// Build `count` placeholder questions.
///
/// The multiple-choice answer cycles through A..D by `index % 4`, so with
/// alternating kinds only A and C are ever correct. Numbering in the text
/// uses `index / 2 + 1` for both kinds.
pub fn mock_questions(count: usize) -> Vec<Question> {
    (0..count).map(mock_question).collect()
}

fn mock_question(index: usize) -> Question {
    let number = index / 2 + 1;

    if index % 2 == 0 {
        let options: BTreeMap<OptionKey, String> = [
            (OptionKey::A, "Option A - First possible answer"),
            (OptionKey::B, "Option B - Second possible answer"),
            (OptionKey::C, "Option C - Third possible answer"),
            (OptionKey::D, "Option D - Fourth possible answer"),
        ]
        .into_iter()
        .map(|(key, text)| (key, text.to_string()))
        .collect();

        Question::MultipleChoice {
            question: format!(
                "Sample Multiple Choice Question {number} based on the document content?"
            ),
            options,
            correct_answer: OptionKey::cycle(index),
        }
    } else {
        Question::ShortAnswer {
            question: format!("Sample Short Answer Question {number} based on the document?"),
            sample_answer: SAMPLE_ANSWER.to_string(),
        }
    }
}
