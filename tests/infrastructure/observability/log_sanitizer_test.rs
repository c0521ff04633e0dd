use cow_breed_api::infrastructure::observability::sanitize_for_log;

#[test]
fn given_blank_text_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_for_log(""), "[EMPTY]");
    assert_eq!(sanitize_for_log(" \n\t "), "[EMPTY]");
}

#[test]
fn given_short_question_when_sanitizing_then_returns_unchanged() {
    assert_eq!(
        sanitize_for_log("tell me about gir cows"),
        "tell me about gir cows"
    );
}

#[test]
fn given_multiline_question_when_sanitizing_then_collapses_whitespace() {
    assert_eq!(sanitize_for_log("compare\n gir\r\nand   sahiwal"), "compare gir and sahiwal");
}

#[test]
fn given_long_question_when_sanitizing_then_truncates_with_length() {
    let question = "a".repeat(150);

    let result = sanitize_for_log(&question);

    assert!(result.starts_with(&"a".repeat(100)));
    assert!(result.ends_with("... (150 chars total)"));
}

#[test]
fn given_long_devanagari_question_when_sanitizing_then_cuts_on_char_boundary() {
    let question = "गाय".repeat(50);

    let result = sanitize_for_log(&question);

    assert!(result.ends_with("... (150 chars total)"));
    assert_eq!(result.chars().take_while(|c| *c != '.').count(), 100);
}
