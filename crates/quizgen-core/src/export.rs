//! Plain-text export of a question list.

use std::fmt::Write as _;

use crate::models::question::Question;

/// File name offered to the browser for the exported document.
pub const EXPORT_FILENAME: &str = "generated-questions.txt";

const RULE_WIDTH: usize = 50;

/// Render questions as the downloadable text document.
///
/// Each entry starts with `Question <n>:` (1-based). Multiple-choice options
/// carry a ` ✓` marker on the correct one; short-answer entries list the
/// sample answer instead.
pub fn render_text(questions: &[Question]) -> String {
    let mut out = String::from("AI Generated Questions\n");
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");

    for (index, question) in questions.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Question {}:", index + 1);
        let _ = writeln!(out, "Type: {}", question.kind_label());
        let _ = writeln!(out, "Q: {}\n", question.text());

        match question {
            Question::MultipleChoice {
                options,
                correct_answer,
                ..
            } => {
                for (key, text) in options {
                    let marker = if key == correct_answer { " ✓" } else { "" };
                    let _ = writeln!(out, "   {key}. {text}{marker}");
                }
                let _ = writeln!(out, "\nCorrect Answer: {correct_answer}");
            }
            Question::ShortAnswer { sample_answer, .. } => {
                let _ = writeln!(out, "Sample Answer: {sample_answer}");
            }
        }

        out.push('\n');
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push_str("\n\n");
    }

    out
}
