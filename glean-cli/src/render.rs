//! Terminal rendering for selector breakdowns, token tables and match reports.

use glean_css::{Category, SpecificityBreakdown};
use glean_regex::{ExplanationToken, LibraryPattern, TestReport, TokenKind};
use owo_colors::{AnsiColors, OwoColorize, Stream};

fn heading(text: &str) -> String {
    format!("{}", text.if_supports_color(Stream::Stdout, |t| t.bold()))
}

fn colored(text: &str, color: AnsiColors) -> String {
    format!(
        "{}",
        text.if_supports_color(Stream::Stdout, |t| t.color(color))
    )
}

const fn kind_color(kind: TokenKind) -> AnsiColors {
    match kind {
        TokenKind::Escape | TokenKind::CharacterClass => AnsiColors::Cyan,
        TokenKind::Metacharacter => AnsiColors::Magenta,
        TokenKind::Quantifier => AnsiColors::Yellow,
        TokenKind::GroupStart | TokenKind::GroupEnd => AnsiColors::Blue,
        TokenKind::Literal => AnsiColors::Default,
        TokenKind::Unterminated => AnsiColors::Red,
    }
}

/// Specificity groups and explanation for one selector.
pub fn selector_report(selector: &str, breakdown: &SpecificityBreakdown<'_>, explanation: &str) -> String {
    let mut out = heading(&format!("=== {selector} ==="));
    out.push('\n');
    out.push_str(&format!("Specificity: {}\n", breakdown.specificity()));

    for category in Category::ALL {
        let tokens = breakdown.get(category);
        if tokens.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "  {} ({}): {}\n",
            category.label(),
            tokens.len(),
            tokens.join(" ")
        ));
    }

    out.push_str("Explanation:\n");
    for line in explanation.lines() {
        out.push_str(&format!("  {line}\n"));
    }
    out
}

/// Two-column table of tokens and their explanations.
pub fn token_table(tokens: &[ExplanationToken<'_>]) -> String {
    if tokens.is_empty() {
        return "Enter a regular expression to see an explanation.\n".to_string();
    }

    let width = tokens
        .iter()
        .map(|t| t.token.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for token in tokens {
        let cell = format!("{:<width$}", token.token);
        out.push_str(&format!(
            "  {}  {}\n",
            colored(&cell, kind_color(token.kind)),
            token.explanation
        ));
    }
    out
}

/// Match summary in the style of "Found 2 matches in 0.01ms."
pub fn test_report(report: &TestReport) -> String {
    if report.matches.is_empty() {
        return "No matches found.\n".to_string();
    }

    let count = report.matches.len();
    let mut out = format!(
        "Found {count} match{} in {:.2}ms.\n",
        if count == 1 { "" } else { "es" },
        report.elapsed.as_secs_f64() * 1000.0
    );
    for m in &report.matches {
        out.push_str(&format!(
            "  [{}] {}\n",
            m.index,
            colored(&format!("{:?}", m.text), AnsiColors::Green)
        ));
        for (i, group) in m.groups.iter().enumerate() {
            let value = group
                .as_deref()
                .map_or_else(|| "(no match)".to_string(), |g| format!("{g:?}"));
            out.push_str(&format!("      group {}: {value}\n", i + 1));
        }
    }
    out
}

/// Compile or flag error, shown in place of results.
pub fn test_error(message: &str) -> String {
    format!("{} {message}\n", colored("Error:", AnsiColors::Red))
}

/// One library entry, optionally with its token table.
pub fn library_entry(pattern: &LibraryPattern, with_tokens: bool) -> String {
    let mut out = format!(
        "  {} ({})\n    {}\n    {}\n",
        heading(pattern.label),
        pattern.key,
        colored(&pattern.literal(), AnsiColors::Cyan),
        pattern.description
    );
    if with_tokens {
        for line in token_table(&pattern.explain()).lines() {
            out.push_str(&format!("    {line}\n"));
        }
    }
    out
}
