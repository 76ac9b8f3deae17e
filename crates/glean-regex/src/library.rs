//! Ready-made patterns grouped by purpose ("validate", "find", "extract").
//!
//! Patterns are stored as source text rather than compiled regexes: some use
//! syntax (lookahead) that the tester cannot compile but the explainer can
//! still describe.

use serde::Serialize;

use crate::explainer::{ExplanationToken, explain};

/// A library entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LibraryPattern {
    /// Stable lookup key, e.g. `"email"`.
    pub key: &'static str,
    /// Menu label, e.g. `"an Email Address"`.
    pub label: &'static str,
    /// Pattern text, without delimiters.
    pub source: &'static str,
    /// JavaScript-style flags.
    pub flags: &'static str,
    /// What the pattern is for.
    pub description: &'static str,
}

impl LibraryPattern {
    /// The JavaScript literal form, `/source/flags`, with unescaped `/` escaped.
    #[must_use]
    pub fn literal(&self) -> String {
        let mut out = String::with_capacity(self.source.len() + self.flags.len() + 2);
        out.push('/');
        let mut escaped = false;
        for c in self.source.chars() {
            if c == '/' && !escaped {
                out.push('\\');
            }
            escaped = c == '\\' && !escaped;
            out.push(c);
        }
        out.push('/');
        out.push_str(self.flags);
        out
    }

    /// Token-by-token explanation of the pattern.
    #[must_use]
    pub fn explain(&self) -> Vec<ExplanationToken<'static>> {
        explain(self.source)
    }
}

/// A group of patterns sharing a purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LibraryCategory {
    /// Stable lookup key, e.g. `"validate"`.
    pub key: &'static str,
    /// Menu label, e.g. `"Validate..."`.
    pub label: &'static str,
    /// Patterns in menu order.
    pub patterns: &'static [LibraryPattern],
}

impl LibraryCategory {
    /// Look up a pattern in this category by key.
    #[must_use]
    pub fn pattern(&self, key: &str) -> Option<&'static LibraryPattern> {
        self.patterns.iter().find(|p| p.key == key)
    }
}

const VALIDATE: &[LibraryPattern] = &[
    LibraryPattern {
        key: "email",
        label: "an Email Address",
        source: r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
        flags: "",
        description: "Checks for a standard email address format.",
    },
    LibraryPattern {
        key: "url",
        label: "a URL (with http/s)",
        source: r"https?://(www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_\+.~#?&/=]*)",
        flags: "",
        description: "Matches a full URL, including http or https.",
    },
    LibraryPattern {
        key: "strong_password",
        label: "a Strong Password",
        source: r"^(?=.*[a-z])(?=.*[A-Z])(?=.*\d)(?=.*[@$!%*?&])[A-Za-z\d@$!%*?&]{8,}$",
        flags: "",
        description: "Requires 8+ characters, with one uppercase, one lowercase, one number, and one special character.",
    },
    LibraryPattern {
        key: "us_phone",
        label: "a US Phone Number",
        source: r"^(?:\+1[-.\s]?)?\(?([2-9][0-8][0-9])\)?[-.\s]?([2-9][0-9]{2})[-.\s]?([0-9]{4})$",
        flags: "",
        description: "Validates common US phone number formats.",
    },
    LibraryPattern {
        key: "credit_card",
        label: "a Credit Card Number",
        source: r"^(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|6(?:011|5[0-9][0-9])[0-9]{12}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|(?:2131|1800|35\d{3})\d{11})$",
        flags: "",
        description: "Validates common credit card number formats (Visa, Mastercard, Amex, etc.). Does not check for validity, only format.",
    },
    LibraryPattern {
        key: "date_ymd",
        label: "a Date (YYYY-MM-DD)",
        source: r"^\d{4}-\d{2}-\d{2}$",
        flags: "",
        description: "Matches the YYYY-MM-DD date format.",
    },
    LibraryPattern {
        key: "hex_color",
        label: "a HEX Color Code",
        source: r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$",
        flags: "",
        description: "Matches 3 or 6-digit hexadecimal color codes.",
    },
    LibraryPattern {
        key: "ipv4",
        label: "an IPv4 Address",
        source: r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
        flags: "",
        description: "Validates an IPv4 address format.",
    },
];

const FIND: &[LibraryPattern] = &[
    LibraryPattern {
        key: "hashtag",
        label: "a Hashtag",
        source: r"#(\w+)",
        flags: "g",
        description: "Finds words preceded by a # symbol.",
    },
    LibraryPattern {
        key: "mention",
        label: "a Mention/Handle",
        source: r"@(\w+)",
        flags: "g",
        description: "Finds words preceded by an @ symbol.",
    },
    LibraryPattern {
        key: "all_numbers",
        label: "all Numbers",
        source: r"\d+",
        flags: "g",
        description: "Finds all sequences of one or more digits.",
    },
    LibraryPattern {
        key: "all_caps_words",
        label: "all Capitalized Words",
        source: r"\b[A-Z][a-z]*\b",
        flags: "g",
        description: "Finds all words that start with a capital letter.",
    },
];

const EXTRACT: &[LibraryPattern] = &[
    LibraryPattern {
        key: "domain",
        label: "the Domain from a URL",
        source: r"https?://([^/]+)",
        flags: "",
        description: "Captures the domain name part of a URL.",
    },
    LibraryPattern {
        key: "filename",
        label: "the Filename from a Path",
        source: r"[ \w-]+\.[A-Za-z]{2,4}$",
        flags: "",
        description: "Captures the filename from a file path.",
    },
];

static CATEGORIES: &[LibraryCategory] = &[
    LibraryCategory {
        key: "validate",
        label: "Validate...",
        patterns: VALIDATE,
    },
    LibraryCategory {
        key: "find",
        label: "Find all instances of...",
        patterns: FIND,
    },
    LibraryCategory {
        key: "extract",
        label: "Extract...",
        patterns: EXTRACT,
    },
];

/// Every category, in menu order.
#[must_use]
pub fn categories() -> &'static [LibraryCategory] {
    CATEGORIES
}

/// Look up a category by key.
#[must_use]
pub fn category(key: &str) -> Option<&'static LibraryCategory> {
    CATEGORIES.iter().find(|c| c.key == key)
}

/// Look up a pattern by category and pattern key.
#[must_use]
pub fn find(category_key: &str, pattern_key: &str) -> Option<&'static LibraryPattern> {
    category(category_key).and_then(|c| c.pattern(pattern_key))
}
