use std::collections::BTreeMap;

use quizgen_core::error::CoreError;
use quizgen_core::models::question::{OptionKey, Question};
use serde_json::json;

#[test]
fn multiple_choice_serializes_with_type_tag() {
    let q = Question::MultipleChoice {
        question: "What is 2 + 2?".to_string(),
        options: BTreeMap::from([
            (OptionKey::A, "3".to_string()),
            (OptionKey::B, "4".to_string()),
            (OptionKey::C, "5".to_string()),
            (OptionKey::D, "22".to_string()),
        ]),
        correct_answer: OptionKey::B,
    };

    let value = serde_json::to_value(&q).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "multiple_choice",
            "question": "What is 2 + 2?",
            "options": { "A": "3", "B": "4", "C": "5", "D": "22" },
            "correct_answer": "B"
        })
    );
}

#[test]
fn short_answer_parses_from_model_json() {
    let q: Question = serde_json::from_value(json!({
        "type": "short_answer",
        "question": "Define photosynthesis.",
        "sample_answer": "Turning light into chemical energy."
    }))
    .unwrap();

    assert!(!q.is_multiple_choice());
    assert_eq!(q.text(), "Define photosynthesis.");
    assert_eq!(q.kind_label(), "Short Answer");
}

#[test]
fn unknown_type_is_rejected() {
    let result = serde_json::from_value::<Question>(json!({
        "type": "true_false",
        "question": "Is the sky blue?"
    }));
    assert!(result.is_err());
}

#[test]
fn validate_rejects_correct_answer_outside_options() {
    let q = Question::MultipleChoice {
        question: "Pick one".to_string(),
        options: BTreeMap::from([
            (OptionKey::A, "first".to_string()),
            (OptionKey::B, "second".to_string()),
        ]),
        correct_answer: OptionKey::D,
    };

    assert!(matches!(
        q.validate(),
        Err(CoreError::MissingCorrectOption { key: OptionKey::D })
    ));
}

#[test]
fn option_key_cycle_wraps() {
    assert_eq!(OptionKey::cycle(0), OptionKey::A);
    assert_eq!(OptionKey::cycle(3), OptionKey::D);
    assert_eq!(OptionKey::cycle(4), OptionKey::A);
    assert_eq!(OptionKey::cycle(10), OptionKey::C);
}
