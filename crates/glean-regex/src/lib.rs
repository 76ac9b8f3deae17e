//! Regular expression tooling for glean.
//!
//! # Scope
//!
//! This crate provides:
//! - **Token explainer** - a left-to-right annotator that describes each
//!   escape, character class, quantifier, anchor and group in plain language
//! - **Tester** - compile a pattern with JavaScript-style flags and collect
//!   its matches against a test string
//! - **Pattern library** - ready-made patterns grouped by what they are for
//!
//! The explainer never fails and never validates: it describes the raw
//! pattern text whether or not the pattern would compile. Compilation errors
//! surface only from the tester.
//!
//! # Not Yet Implemented
//!
//! - Distinct descriptions for non-capturing, named and lookaround groups
//! - Backreferences (`\1`) beyond "literal character"

/// Plain-language token explanations.
pub mod explainer;
/// Curated patterns grouped by purpose.
pub mod library;
/// Pattern compilation and matching.
pub mod tester;

pub use explainer::{ExplanationToken, TokenKind, explain};
pub use library::{LibraryCategory, LibraryPattern, categories};
pub use tester::{Flags, MatchRecord, TestReport, TesterError, test_pattern};
