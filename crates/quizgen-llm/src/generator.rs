//! Question generation with mock fallback.

use futures::future::BoxFuture;
use tracing::{info, warn};

use quizgen_core::mock::mock_questions;
use quizgen_core::models::question::Question;

use crate::client::{ChatClient, ChatMessage, Sampling};
use crate::error::LlmError;
use crate::extract::extract_question_array;
use crate::prompt::{self, MAX_TOKENS, SYSTEM_PROMPT, TEMPERATURE};

/// Produces quiz questions for a document's text.
pub trait QuestionGenerator: Send + Sync {
    fn generate<'a>(
        &'a self,
        text: &'a str,
        count: usize,
    ) -> BoxFuture<'a, Result<Vec<Question>, LlmError>>;
}

/// The production generator.
///
/// Without a [`ChatClient`] it returns mock questions and never touches the
/// network. With one, any request or parse failure also degrades to mock
/// questions, so [`QuestionGenerator::generate`] always succeeds.
#[derive(Clone, Default)]
pub struct Generator {
    client: Option<ChatClient>,
}

impl Generator {
    pub fn new(client: Option<ChatClient>) -> Self {
        Self { client }
    }

    /// Whether a live model is configured.
    pub fn is_live(&self) -> bool {
        self.client.is_some()
    }

    async fn generate_live(
        client: &ChatClient,
        text: &str,
        count: usize,
    ) -> Result<Vec<Question>, LlmError> {
        let messages = [
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(prompt::build_prompt(text, count)),
        ];
        let sampling = Sampling {
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let reply = client.complete(&messages, sampling).await?;
        let questions = extract_question_array(&reply)?;

        info!(
            model = client.model(),
            requested = count,
            generated = questions.len(),
            "generated questions"
        );

        Ok(questions)
    }
}

impl QuestionGenerator for Generator {
    fn generate<'a>(
        &'a self,
        text: &'a str,
        count: usize,
    ) -> BoxFuture<'a, Result<Vec<Question>, LlmError>> {
        Box::pin(async move {
            let Some(client) = &self.client else {
                return Ok(mock_questions(count));
            };

            match Self::generate_live(client, text, count).await {
                Ok(questions) => Ok(questions),
                Err(e) => {
                    warn!(error = %e, "question generation failed, using mock questions");
                    Ok(mock_questions(count))
                }
            }
        })
    }
}
