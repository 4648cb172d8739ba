use crate::core::{
    linter::{lint_line, lint_text, MAX_LINE_LENGTH},
    types::{LintKind, LintWarning},
};

#[test]
fn test_clean_text_has_no_warnings() {
    let text = "title: Editor\nshortcuts:\n  Files:\n    Ctrl+S:\n      description: Save\n";
    assert!(lint_text(text).is_empty());
}

#[test]
fn test_line_length_boundary() {
    let exactly = format!("{}\n", "a".repeat(100));
    let over = format!("{}\n", "a".repeat(101));

    assert!(lint_line(1, &exactly).is_empty(), "100 characters is allowed");
    assert_eq!(
        lint_line(1, &over),
        vec![LintWarning::new(1, LintKind::LineTooLong { limit: MAX_LINE_LENGTH })]
    );
}

#[test]
fn test_line_length_counts_characters_not_bytes() {
    let glyphs = format!("{}\n", "⌘".repeat(100));
    assert!(lint_line(1, &glyphs).is_empty());
}

#[test]
fn test_line_length_ignores_trailing_whitespace() {
    let padded = format!("{}    \n", "a".repeat(100));
    let warnings = lint_line(3, &padded);

    assert_eq!(warnings, vec![LintWarning::new(3, LintKind::TrailingWhitespace)]);
}

#[test]
fn test_odd_indentation() {
    assert_eq!(
        lint_line(2, "   key: value\n"),
        vec![LintWarning::new(2, LintKind::OddIndentation)]
    );
    assert!(lint_line(2, "    key: value\n").is_empty());
}

#[test]
fn test_tab_counts_as_one_character() {
    assert_eq!(
        lint_line(1, "\tkey: value\n"),
        vec![LintWarning::new(1, LintKind::OddIndentation)]
    );
}

#[test]
fn test_blank_line_counts_its_newline() {
    assert_eq!(
        lint_line(4, "\n"),
        vec![LintWarning::new(4, LintKind::OddIndentation)]
    );
}

#[test]
fn test_trailing_whitespace() {
    assert_eq!(
        lint_line(1, "title: x \n"),
        vec![LintWarning::new(1, LintKind::TrailingWhitespace)]
    );
    assert_eq!(
        lint_line(1, "title: x\t"),
        vec![LintWarning::new(1, LintKind::TrailingWhitespace)],
        "Last line without terminator is still checked"
    );
}

#[test]
fn test_all_checks_run_on_one_line() {
    let line = format!(" {} \n", "a".repeat(101));
    let kinds: Vec<LintKind> = lint_line(7, &line).into_iter().map(|w| w.kind).collect();

    assert_eq!(
        kinds,
        vec![
            LintKind::LineTooLong { limit: MAX_LINE_LENGTH },
            LintKind::OddIndentation,
            LintKind::TrailingWhitespace,
        ]
    );
}

#[test]
fn test_line_numbers_start_at_one() {
    let text = "title: x\n shortcuts: {} \nlast";
    let messages: Vec<String> = lint_text(text).iter().map(|w| w.to_string()).collect();

    assert_eq!(
        messages,
        vec![
            "Line 2 has inconsistent indentation",
            "Line 2 has trailing whitespace",
        ]
    );
}

#[test]
fn test_linter_ignores_yaml_validity() {
    let warnings = lint_text("title: [unbalanced \n");
    assert_eq!(warnings, vec![LintWarning::new(1, LintKind::TrailingWhitespace)]);
}
