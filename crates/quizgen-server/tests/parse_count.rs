use quizgen_server::routes::parse_count;

#[test]
fn absent_or_empty_uses_default() {
    assert_eq!(parse_count(None, 5), 5);
    assert_eq!(parse_count(Some(""), 5), 5);
    assert_eq!(parse_count(Some("   "), 6), 6);
}

#[test]
fn plain_numbers_are_used() {
    assert_eq!(parse_count(Some("3"), 5), 3);
    assert_eq!(parse_count(Some(" 12"), 5), 12);
    assert_eq!(parse_count(Some("+7"), 5), 7);
}

#[test]
fn leading_digits_win_over_trailing_junk() {
    assert_eq!(parse_count(Some("8 questions"), 5), 8);
    assert_eq!(parse_count(Some("4.9"), 5), 4);
}

#[test]
fn zero_negative_and_garbage_use_default() {
    assert_eq!(parse_count(Some("0"), 5), 5);
    assert_eq!(parse_count(Some("-3"), 5), 5);
    assert_eq!(parse_count(Some("abc"), 5), 5);
}

#[test]
fn large_counts_are_capped() {
    assert_eq!(parse_count(Some("50"), 5), 50);
    assert_eq!(parse_count(Some("51"), 5), 50);
    assert_eq!(parse_count(Some("99999999999999999999999999"), 5), 50);
}
