//! Integration tests for the pattern library.

use glean_regex::library::{category, find};
use glean_regex::{TesterError, categories, test_pattern};

#[test]
fn test_categories_in_menu_order() {
    let keys: Vec<&str> = categories().iter().map(|c| c.key).collect();
    assert_eq!(keys, ["validate", "find", "extract"]);
    assert_eq!(category("find").unwrap().label, "Find all instances of...");
    assert!(category("replace").is_none());
}

#[test]
fn test_find_pattern() {
    let email = find("validate", "email").unwrap();
    assert_eq!(email.label, "an Email Address");
    assert!(find("validate", "hashtag").is_none());
    assert!(find("nope", "email").is_none());
}

#[test]
fn test_keys_are_unique_within_each_category() {
    for category in categories() {
        let mut keys: Vec<&str> = category.patterns.iter().map(|p| p.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), category.patterns.len(), "{}", category.key);
    }
}

#[test]
fn test_literal_form() {
    assert_eq!(
        find("extract", "domain").unwrap().literal(),
        r"/https?:\/\/([^\/]+)/"
    );
    assert_eq!(find("find", "hashtag").unwrap().literal(), r"/#(\w+)/g");
}

#[test]
fn test_every_pattern_explains_back_to_its_source() {
    for category in categories() {
        for pattern in category.patterns {
            let rebuilt: String = pattern.explain().iter().map(|t| t.token).collect();
            assert_eq!(rebuilt, pattern.source);
        }
    }
}

#[test]
fn test_every_pattern_compiles_except_lookahead() {
    for category in categories() {
        for pattern in category.patterns {
            let result = test_pattern(pattern.source, pattern.flags, "");
            if pattern.source.contains("(?=") {
                assert!(matches!(result, Err(TesterError::Compile(_))), "{}", pattern.key);
            } else {
                assert!(result.is_ok(), "{}: {:?}", pattern.key, result.err());
            }
        }
    }
}

#[test]
fn test_library_patterns_match_examples() {
    let check = |category: &str, key: &str, haystack: &str, expected: &[&str]| {
        let pattern = find(category, key).unwrap();
        let report = test_pattern(pattern.source, pattern.flags, haystack).unwrap();
        let found: Vec<&str> = report.matches.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(found, expected, "{key}");
    };

    check("validate", "email", "ann@example.com", &["ann@example.com"]);
    check("validate", "email", "not an email", &[]);
    check("validate", "date_ymd", "2024-01-31", &["2024-01-31"]);
    check("validate", "hex_color", "#a1F", &["#a1F"]);
    check("validate", "ipv4", "192.168.0.1", &["192.168.0.1"]);
    check("validate", "ipv4", "256.1.1.1", &[]);
    check("find", "hashtag", "#rust and #regex", &["#rust", "#regex"]);
    check("find", "all_caps_words", "Hello big World", &["Hello", "World"]);
    check("extract", "domain", "see https://example.org/path", &["https://example.org"]);
}
