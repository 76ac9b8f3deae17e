//! glean CLI
//!
//! Explains CSS selectors and regular expressions from the terminal.
//!
//! - glean selector 'ul#nav > li.active'   # specificity groups + explanation
//! - glean regex '\d{3}-\d{4}' -t 555-1234 # token table + matches
//! - glean library validate --explain      # ready-made patterns

mod render;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use glean_common::warning::{clear_warnings, warn_once};
use glean_css::{Specificity, SpecificityBreakdown};
use glean_regex::{ExplanationToken, TokenKind, library, test_pattern};
use serde::Serialize;

/// glean: explain CSS selectors and regular expressions
#[derive(Parser, Debug)]
#[command(name = "glean")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Specificity and explanation of a selector
    glean selector 'ul#nav > li.active:hover'

    # Compare several selectors as JSON
    glean selector --json '#a' '.b.c' 'div p'

    # Explain a pattern and test it
    glean regex '(\w+)@(\w+)\.com' --flags g --test 'ann@mail.com, bob@web.com'

    # Browse the pattern library
    glean library find --explain
"#)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Break selectors into specificity groups and explain them
    Selector {
        /// One or more selectors (quote them)
        #[arg(value_name = "SELECTOR", required = true)]
        selectors: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Explain a regular expression token by token
    Regex {
        /// The pattern, without delimiters
        #[arg(value_name = "PATTERN", allow_hyphen_values = true)]
        pattern: String,

        /// JavaScript-style flags (g, i, m, s, u)
        #[arg(short, long, default_value = "")]
        flags: String,

        /// Test string to run the pattern against
        #[arg(short, long, value_name = "TEXT")]
        test: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List ready-made patterns
    Library {
        /// Category key (validate, find, extract); all categories when omitted
        #[arg(value_name = "CATEGORY")]
        category: Option<String>,

        /// Also explain each pattern token by token
        #[arg(long)]
        explain: bool,
    },
}

#[derive(Serialize)]
struct SelectorJson<'a> {
    selector: &'a str,
    specificity: Specificity,
    breakdown: SpecificityBreakdown<'a>,
    explanation: String,
}

#[derive(Serialize)]
struct RegexJson<'a> {
    pattern: &'a str,
    tokens: Vec<ExplanationToken<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    test: Option<TestJson>,
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum TestJson {
    Report(glean_regex::TestReport),
    Error(String),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    match cli.command {
        Command::Selector { selectors, json } => run_selector(&selectors, json),
        Command::Regex {
            pattern,
            flags,
            test,
            json,
        } => run_regex(&pattern, &flags, test.as_deref(), json),
        Command::Library { category, explain } => run_library(category.as_deref(), explain),
    }
}

/// Element tokens that cannot be tag names are leftovers of malformed input.
fn warn_on_leftovers(selector: &str, breakdown: &SpecificityBreakdown<'_>) {
    for element in &breakdown.elements {
        let valid = element.starts_with(|c: char| c.is_ascii_alphabetic())
            && element.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !valid {
            warn_once(
                "selector",
                &format!("`{element}` in `{selector}` is not an element name; counted as one anyway"),
            );
        }
    }
}

fn run_selector(selectors: &[String], json: bool) -> Result<()> {
    let mut reports = Vec::with_capacity(selectors.len());

    for selector in selectors {
        clear_warnings();
        let breakdown = glean_css::parse(selector);
        warn_on_leftovers(selector, &breakdown);
        let explanation = glean_css::explain(selector);

        if json {
            reports.push(SelectorJson {
                selector: selector.as_str(),
                specificity: breakdown.specificity(),
                breakdown,
                explanation,
            });
        } else {
            println!("{}", render::selector_report(selector, &breakdown, &explanation));
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

fn warn_on_unterminated(tokens: &[ExplanationToken<'_>]) {
    for token in tokens.iter().filter(|t| t.kind == TokenKind::Unterminated) {
        warn_once(
            "regex",
            &format!(
                "unterminated `{}` at offset {}; explained as a literal",
                token.token, token.offset
            ),
        );
    }
}

fn run_regex(pattern: &str, flags: &str, test: Option<&str>, json: bool) -> Result<()> {
    let tokens = glean_regex::explain(pattern);
    warn_on_unterminated(&tokens);

    // Compile errors are shown as results, not propagated.
    let tested = test.map(|haystack| test_pattern(pattern, flags, haystack));

    if json {
        let report = RegexJson {
            pattern,
            tokens,
            test: tested.map(|result| match result {
                Ok(report) => TestJson::Report(report),
                Err(e) => TestJson::Error(e.to_string()),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Explanation:");
    print!("{}", render::token_table(&tokens));

    if let Some(result) = tested {
        println!("\nResults:");
        match result {
            Ok(report) => print!("{}", render::test_report(&report)),
            Err(e) => print!("{}", render::test_error(&e.to_string())),
        }
    }
    Ok(())
}

fn run_library(category: Option<&str>, explain: bool) -> Result<()> {
    let selected = match category {
        Some(key) => match library::category(key) {
            Some(found) => std::slice::from_ref(found),
            None => {
                let known: Vec<&str> = library::categories().iter().map(|c| c.key).collect();
                bail!("unknown category `{key}`; expected one of: {}", known.join(", "));
            }
        },
        None => library::categories(),
    };

    for category in selected {
        println!("{} [{}]", category.label, category.key);
        for pattern in category.patterns {
            print!("{}", render::library_entry(pattern, explain));
        }
        println!();
    }
    Ok(())
}
