//! Compile a pattern with JavaScript-style flags and collect its matches.
//!
//! Compile failures come back as [`TesterError`] values so that the caller can
//! show them next to the pattern. Syntax the `regex` engine does not support
//! (lookaround, backreferences) fails here even though the explainer still
//! describes it.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use regex::{Captures, RegexBuilder};
use serde::Serialize;
use thiserror::Error;

/// Errors from flag parsing and pattern compilation.
#[derive(Debug, Error)]
pub enum TesterError {
    /// A character that is not a regular expression flag.
    #[error("invalid regular expression flag '{0}'")]
    InvalidFlag(char),

    /// A flag given more than once.
    #[error("duplicate regular expression flag '{0}'")]
    DuplicateFlag(char),

    /// A JavaScript flag with no counterpart here (`y` sticky, `d` indices).
    #[error("regular expression flag '{0}' is not supported")]
    UnsupportedFlag(char),

    /// The pattern failed to compile.
    #[error(transparent)]
    Compile(#[from] regex::Error),
}

/// Flags in the JavaScript `gimsu` set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Flags {
    /// `g`: report every match, not just the first.
    pub global: bool,
    /// `i`: case-insensitive matching.
    pub ignore_case: bool,
    /// `m`: `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `s`: `.` also matches `\n`.
    pub dot_all: bool,
    /// `u`: accepted for compatibility; matching is always Unicode-aware.
    pub unicode: bool,
}

impl FromStr for Flags {
    type Err = TesterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Self::default();
        for c in s.chars() {
            let slot = match c {
                'g' => &mut flags.global,
                'i' => &mut flags.ignore_case,
                'm' => &mut flags.multi_line,
                's' => &mut flags.dot_all,
                'u' => &mut flags.unicode,
                'y' | 'd' => return Err(TesterError::UnsupportedFlag(c)),
                _ => return Err(TesterError::InvalidFlag(c)),
            };
            if *slot {
                return Err(TesterError::DuplicateFlag(c));
            }
            *slot = true;
        }
        Ok(flags)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (set, c) in [
            (self.global, 'g'),
            (self.ignore_case, 'i'),
            (self.multi_line, 'm'),
            (self.dot_all, 's'),
            (self.unicode, 'u'),
        ] {
            if set {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// One match of the pattern in the test string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Byte offset of the match.
    pub index: usize,
    /// The matched text.
    pub text: String,
    /// Capture groups 1.., `None` where a group did not participate.
    pub groups: Vec<Option<String>>,
}

impl MatchRecord {
    fn from_captures(caps: &Captures<'_>) -> Self {
        let whole = caps.get(0);
        Self {
            index: whole.map_or(0, |m| m.start()),
            text: whole.map_or_else(String::new, |m| m.as_str().to_string()),
            groups: caps
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str().to_string()))
                .collect(),
        }
    }
}

/// Matches found by [`test_pattern`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestReport {
    /// Matches in order of position.
    pub matches: Vec<MatchRecord>,
    /// Time spent compiling and matching.
    pub elapsed: Duration,
}

/// Compile `pattern` with `flags` and run it over `haystack`.
///
/// An empty pattern yields an empty report.
///
/// # Errors
///
/// Returns [`TesterError`] if `flags` holds an unknown, repeated or
/// unsupported flag, or if the pattern does not compile.
pub fn test_pattern(pattern: &str, flags: &str, haystack: &str) -> Result<TestReport, TesterError> {
    let flags: Flags = flags.parse()?;
    if pattern.is_empty() {
        return Ok(TestReport::default());
    }

    let started = Instant::now();
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(flags.ignore_case)
        .multi_line(flags.multi_line)
        .dot_matches_new_line(flags.dot_all)
        .build()?;

    let limit = if flags.global { usize::MAX } else { 1 };
    let matches = regex
        .captures_iter(haystack)
        .take(limit)
        .map(|caps| MatchRecord::from_captures(&caps))
        .collect();

    Ok(TestReport {
        matches,
        elapsed: started.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_display_in_canonical_order() {
        let flags: Flags = "smig".parse().unwrap();
        assert_eq!(flags.to_string(), "gims");
    }

    #[test]
    fn empty_flags_are_all_off() {
        assert_eq!("".parse::<Flags>().unwrap(), Flags::default());
    }
}
