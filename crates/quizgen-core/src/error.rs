use thiserror::Error;

use crate::models::question::OptionKey;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("correct answer {key} is not one of the question's options")]
    MissingCorrectOption { key: OptionKey },

    #[error("question {index}: answer index {answer} is out of range for {choices} choices")]
    AnswerOutOfRange {
        index: usize,
        answer: usize,
        choices: usize,
    },

    #[error("the quiz is already finished")]
    QuizFinished,
}
