//! Integration tests for pattern compilation and matching.

use glean_regex::{Flags, TesterError, explain, test_pattern};

fn texts(pattern: &str, flags: &str, haystack: &str) -> Vec<String> {
    test_pattern(pattern, flags, haystack)
        .unwrap()
        .matches
        .into_iter()
        .map(|m| m.text)
        .collect()
}

#[test]
fn test_global_flag_reports_every_match() {
    assert_eq!(texts(r"\d+", "g", "a1b22c333"), ["1", "22", "333"]);
}

#[test]
fn test_without_global_flag_only_first_match() {
    assert_eq!(texts(r"\d+", "", "a1b22c333"), ["1"]);
}

#[test]
fn test_match_offsets_and_groups() {
    let report = test_pattern(r"(\w+)@(\w+)?", "g", "hi ann@ and bob@work").unwrap();
    assert_eq!(report.matches.len(), 2);

    let first = &report.matches[0];
    assert_eq!(first.index, 3);
    assert_eq!(first.text, "ann@");
    assert_eq!(first.groups, [Some("ann".to_string()), None]);

    let second = &report.matches[1];
    assert_eq!(second.text, "bob@work");
    assert_eq!(
        second.groups,
        [Some("bob".to_string()), Some("work".to_string())]
    );
}

#[test]
fn test_case_insensitive_flag() {
    assert!(texts("hello", "g", "Hello HELLO").is_empty());
    assert_eq!(texts("hello", "gi", "Hello HELLO"), ["Hello", "HELLO"]);
}

#[test]
fn test_multi_line_flag() {
    assert!(texts("^b$", "g", "a\nb\nc").is_empty());
    assert_eq!(texts("^b$", "gm", "a\nb\nc"), ["b"]);
}

#[test]
fn test_dot_all_flag() {
    assert!(texts("a.b", "", "a\nb").is_empty());
    assert_eq!(texts("a.b", "s", "a\nb"), ["a\nb"]);
}

#[test]
fn test_no_matches() {
    let report = test_pattern("xyz", "g", "Hello World 123").unwrap();
    assert!(report.matches.is_empty());
}

#[test]
fn test_empty_pattern_is_empty_report() {
    let report = test_pattern("", "g", "anything").unwrap();
    assert!(report.matches.is_empty());
}

#[test]
fn test_invalid_flag() {
    assert!(matches!(
        test_pattern("a", "gx", "a"),
        Err(TesterError::InvalidFlag('x'))
    ));
}

#[test]
fn test_duplicate_flag() {
    assert!(matches!(
        test_pattern("a", "gig", "a"),
        Err(TesterError::DuplicateFlag('g'))
    ));
}

#[test]
fn test_unsupported_flag() {
    let err = test_pattern("a", "y", "a").unwrap_err();
    assert!(matches!(err, TesterError::UnsupportedFlag('y')));
    assert_eq!(err.to_string(), "regular expression flag 'y' is not supported");
}

#[test]
fn test_compile_error_is_a_value() {
    assert!(matches!(
        test_pattern("(unclosed", "", "x"),
        Err(TesterError::Compile(_))
    ));
}

#[test]
fn test_lookahead_fails_to_compile_but_still_explains() {
    let pattern = "a(?=b)";
    assert!(matches!(
        test_pattern(pattern, "", "ab"),
        Err(TesterError::Compile(_))
    ));
    assert_eq!(explain(pattern).len(), 6);
}

#[test]
fn test_flags_parse() {
    let flags: Flags = "gimsu".parse().unwrap();
    assert!(flags.global && flags.ignore_case && flags.multi_line && flags.dot_all && flags.unicode);
    assert_eq!(flags.to_string(), "gimsu");
}
