//! Regular expression token explainer.
//!
//! A single cursor walks the pattern left to right. Each step consumes one
//! syntactic unit (an escape, a bracket expression, a brace quantifier, or a
//! single character) and describes it. The cursor always advances, so the scan
//! terminates, and the token slices concatenate back to the original pattern.

use std::borrow::Cow;

use serde::Serialize;

/// What kind of syntax a token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// A character-class escape: `\d`, `\D`, `\w`, `\W`, `\s`, `\S`.
    Escape,
    /// A bracket expression such as `[a-z]` or `[^0-9]`.
    CharacterClass,
    /// `.`, `^`, `$` or `|`.
    Metacharacter,
    /// `+`, `*`, `?` or a brace quantifier like `{2,4}`.
    Quantifier,
    /// `(`
    GroupStart,
    /// `)`
    GroupEnd,
    /// A character matched as itself, including escaped punctuation (`\.`).
    Literal,
    /// A `[` or `{` with no closer, explained as a literal.
    Unterminated,
}

/// One explained unit of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplanationToken<'a> {
    /// The source text this token consumed.
    pub token: &'a str,
    /// Plain-language description.
    pub explanation: Cow<'static, str>,
    /// Syntax category.
    pub kind: TokenKind,
    /// Byte offset of `token` in the pattern.
    pub offset: usize,
}

/// Fixed descriptions for escapes and single-character metacharacters.
fn fixed(token: &str) -> Option<(TokenKind, &'static str)> {
    let entry = match token {
        r"\d" => (TokenKind::Escape, "Matches any digit (0-9)."),
        r"\D" => (TokenKind::Escape, "Matches any character that is not a digit."),
        r"\w" => (
            TokenKind::Escape,
            "Matches any word character (alphanumeric + underscore).",
        ),
        r"\W" => (
            TokenKind::Escape,
            "Matches any character that is not a word character.",
        ),
        r"\s" => (
            TokenKind::Escape,
            "Matches any whitespace character (spaces, tabs, newlines).",
        ),
        r"\S" => (
            TokenKind::Escape,
            "Matches any character that is not a whitespace character.",
        ),
        "." => (TokenKind::Metacharacter, "Matches any character except a newline."),
        "^" => (
            TokenKind::Metacharacter,
            "Asserts position at the start of the string.",
        ),
        "$" => (
            TokenKind::Metacharacter,
            "Asserts position at the end of the string.",
        ),
        "+" => (
            TokenKind::Quantifier,
            "Matches the preceding token 1 or more times.",
        ),
        "*" => (
            TokenKind::Quantifier,
            "Matches the preceding token 0 or more times.",
        ),
        "?" => (
            TokenKind::Quantifier,
            "Matches the preceding token 0 or 1 time. (Makes it optional)",
        ),
        "|" => (
            TokenKind::Metacharacter,
            "Acts like a boolean OR. Matches the expression before or after it.",
        ),
        _ => return None,
    };
    Some(entry)
}

fn literal(c: char) -> Cow<'static, str> {
    Cow::Owned(format!("Matches the literal character \"{c}\"."))
}

/// Index of the `]` closing the bracket expression that opens `rest`.
/// A backslash escapes the byte after it.
fn bracket_close(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b']' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Describe the brace quantifier `{n}`, `{n,}` or `{n,m}` between the braces.
fn describe_quantifier(body: &str) -> Option<String> {
    let is_count = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match body.split_once(',') {
        Some((min, max)) if is_count(min) && (max.is_empty() || is_count(max)) => {
            let max = if max.is_empty() { "infinity" } else { max };
            Some(format!(
                "Matches the preceding token between {min} and {max} times."
            ))
        }
        Some(_) => None,
        None if is_count(body) => Some(format!(
            "Matches the preceding token exactly {body} times."
        )),
        None => None,
    }
}

/// Consume one unit from the front of `rest`: `(byte length, kind, description)`.
fn step(rest: &str) -> (usize, TokenKind, Cow<'static, str>) {
    let mut chars = rest.chars();
    let Some(c) = chars.next() else {
        return (0, TokenKind::Literal, Cow::Borrowed(""));
    };

    match c {
        '\\' => match chars.next() {
            Some(escaped) => {
                let len = 1 + escaped.len_utf8();
                match fixed(&rest[..len]) {
                    Some((kind, text)) => (len, kind, Cow::Borrowed(text)),
                    None => (len, TokenKind::Literal, literal(escaped)),
                }
            }
            // Trailing backslash
            None => (1, TokenKind::Literal, literal('\\')),
        },

        '[' => match bracket_close(rest) {
            Some(close) => {
                let content = &rest[1..close];
                let text = match content.strip_prefix('^') {
                    Some(excluded) => {
                        format!("Matches any single character not in the set: \"{excluded}\".")
                    }
                    None => format!("Matches any single character in the set: \"{content}\"."),
                };
                (close + 1, TokenKind::CharacterClass, Cow::Owned(text))
            }
            None => (1, TokenKind::Unterminated, literal('[')),
        },

        '{' => match rest.find('}') {
            Some(close) => match describe_quantifier(&rest[1..close]) {
                Some(text) => (close + 1, TokenKind::Quantifier, Cow::Owned(text)),
                None => (1, TokenKind::Literal, literal('{')),
            },
            None => (1, TokenKind::Unterminated, literal('{')),
        },

        '(' => (1, TokenKind::GroupStart, Cow::Borrowed("Starts a capturing group.")),
        ')' => (1, TokenKind::GroupEnd, Cow::Borrowed("Ends a capturing group.")),

        _ => {
            let len = c.len_utf8();
            match fixed(&rest[..len]) {
                Some((kind, text)) => (len, kind, Cow::Borrowed(text)),
                None => (len, TokenKind::Literal, literal(c)),
            }
        }
    }
}

/// Explain a pattern token by token.
///
/// ```
/// use glean_regex::{TokenKind, explain};
///
/// let tokens = explain(r"\d+");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].token, r"\d");
/// assert_eq!(tokens[1].kind, TokenKind::Quantifier);
/// ```
#[must_use]
pub fn explain(pattern: &str) -> Vec<ExplanationToken<'_>> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    while offset < pattern.len() {
        let (len, kind, explanation) = step(&pattern[offset..]);
        let end = offset + len.max(1);
        tokens.push(ExplanationToken {
            token: &pattern[offset..end],
            explanation,
            kind,
            offset,
        });
        offset = end;
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_close_skips_escaped_bracket() {
        assert_eq!(bracket_close(r"[\]]x"), Some(3));
        assert_eq!(bracket_close("[]"), Some(1));
        assert_eq!(bracket_close("[abc"), None);
        assert_eq!(bracket_close(r"[a\"), None);
    }

    #[test]
    fn quantifier_bodies() {
        assert_eq!(
            describe_quantifier("3").as_deref(),
            Some("Matches the preceding token exactly 3 times.")
        );
        assert_eq!(
            describe_quantifier("2,").as_deref(),
            Some("Matches the preceding token between 2 and infinity times.")
        );
        assert_eq!(describe_quantifier(",5"), None);
        assert_eq!(describe_quantifier("a"), None);
        assert_eq!(describe_quantifier(""), None);
    }

    #[test]
    fn step_always_consumes_a_whole_character() {
        let (len, kind, _) = step("é+");
        assert_eq!(len, 'é'.len_utf8());
        assert_eq!(kind, TokenKind::Literal);
    }
}
