use quizgen_llm::prompt::{build_prompt, truncate_chars, MAX_PROMPT_CHARS};

#[test]
fn truncate_keeps_short_text() {
    assert_eq!(truncate_chars("short", 10), "short");
}

#[test]
fn truncate_counts_characters_not_bytes() {
    let text = "é".repeat(10);
    let cut = truncate_chars(&text, 4);
    assert_eq!(cut.chars().count(), 4);
    assert_eq!(cut, "éééé");
}

#[test]
fn prompt_embeds_count_and_truncated_text() {
    let text = format!("{}{}", "a".repeat(MAX_PROMPT_CHARS), "TAIL");
    let prompt = build_prompt(&text, 7);

    assert!(prompt.starts_with("Based on the following text, generate 7 educational questions."));
    assert!(prompt.contains("\"type\": \"multiple_choice\""));
    assert!(prompt.contains("\"type\": \"short_answer\""));
    assert!(prompt.ends_with(&"a".repeat(MAX_PROMPT_CHARS)));
    assert!(!prompt.contains("TAIL"));
}
