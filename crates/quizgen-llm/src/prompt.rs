//! Prompt construction for question generation.

/// Only this many characters of the document reach the model.
pub const MAX_PROMPT_CHARS: usize = 3000;

pub const SYSTEM_PROMPT: &str = "You are an educational assistant that generates high-quality \
questions based on provided text. Always respond with valid JSON.";

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 2000;

const FORMAT_EXAMPLE: &str = r#"[
  {
    "type": "multiple_choice",
    "question": "Question text",
    "options": {
      "A": "Option A",
      "B": "Option B",
      "C": "Option C",
      "D": "Option D"
    },
    "correct_answer": "A"
  },
  {
    "type": "short_answer",
    "question": "Question text",
    "sample_answer": "A brief sample answer"
  }
]"#;

/// The first `max` characters of `text`, cut on a char boundary.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Build the user prompt asking for `count` questions about `text`.
pub fn build_prompt(text: &str, count: usize) -> String {
    format!(
        "Based on the following text, generate {count} educational questions. For each question, provide:\n\
         1. A multiple choice question with 4 options (A, B, C, D) and indicate the correct answer\n\
         2. A short answer question\n\
         \n\
         Format the response as a JSON array with this structure:\n\
         {FORMAT_EXAMPLE}\n\
         \n\
         Text to analyze:\n\
         {}",
        truncate_chars(text, MAX_PROMPT_CHARS)
    )
}
