use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Label of a multiple-choice option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionKey {
    A,
    B,
    C,
    D,
}

impl OptionKey {
    pub const ALL: [OptionKey; 4] = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D];

    /// The key at `index`, wrapping around after `D`.
    pub fn cycle(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::A => "A",
            OptionKey::B => "B",
            OptionKey::C => "C",
            OptionKey::D => "D",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated quiz question.
///
/// Serialized with a `type` tag, matching the JSON the front-end renders:
///
/// ```json
/// { "type": "multiple_choice", "question": "...",
///   "options": { "A": "...", "B": "...", "C": "...", "D": "..." },
///   "correct_answer": "A" }
/// { "type": "short_answer", "question": "...", "sample_answer": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    MultipleChoice {
        question: String,
        options: BTreeMap<OptionKey, String>,
        correct_answer: OptionKey,
    },
    ShortAnswer {
        question: String,
        sample_answer: String,
    },
}

impl Question {
    pub fn text(&self) -> &str {
        match self {
            Question::MultipleChoice { question, .. } | Question::ShortAnswer { question, .. } => {
                question
            }
        }
    }

    pub fn is_multiple_choice(&self) -> bool {
        matches!(self, Question::MultipleChoice { .. })
    }

    /// Human-readable kind, as shown on cards and in exports.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Question::MultipleChoice { .. } => "Multiple Choice",
            Question::ShortAnswer { .. } => "Short Answer",
        }
    }

    /// Check that a multiple-choice `correct_answer` names one of its options.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Question::MultipleChoice {
                options,
                correct_answer,
                ..
            } if !options.contains_key(correct_answer) => Err(CoreError::MissingCorrectOption {
                key: *correct_answer,
            }),
            _ => Ok(()),
        }
    }
}
