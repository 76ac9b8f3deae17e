//! CSS selector specificity breakdown
//!
//! This module splits a raw selector into the simple-selector groups counted by
//! [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules).
//!
//! The breakdown never fails: a malformed selector degrades to partial groups.
//! Extraction runs as an ordered list of passes over a consumed-byte mask, so a
//! span taken by one pass is never seen by a later one.

mod explain;

pub use explain::{Combinator, NO_SELECTOR, explain};

use std::fmt;

use serde::Serialize;

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0, self.1, self.2)
    }
}

/// The group a piece of selector text was sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:hover`, `:nth-child(2n+1)`, `:not(.hidden)`
    PseudoClass,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#nav-bar`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.btn`, `.nav-item`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[type="text"]`
    Attribute,

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `li`. Any leftover text lands here too.
    Element,
}

impl Category {
    /// All categories in extraction order.
    pub const ALL: [Self; 6] = [
        Self::PseudoElement,
        Self::PseudoClass,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::Element,
    ];

    /// Human-readable group name, e.g. `"pseudo-classes"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PseudoElement => "pseudo-elements",
            Self::PseudoClass => "pseudo-classes",
            Self::Id => "ids",
            Self::Class => "classes",
            Self::Attribute => "attributes",
            Self::Element => "elements",
        }
    }
}

/// A selector split into specificity groups.
///
/// Every entry borrows from the selector it was parsed from, and no two entries
/// overlap. Each list keeps source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpecificityBreakdown<'a> {
    /// `#identifier` substrings.
    pub ids: Vec<&'a str>,
    /// `.classname` substrings.
    pub classes: Vec<&'a str>,
    /// Bracketed attribute selectors, brackets included.
    pub attributes: Vec<&'a str>,
    /// `:name` and `:name(args)` substrings.
    pub pseudo_classes: Vec<&'a str>,
    /// `::name` substrings.
    pub pseudo_elements: Vec<&'a str>,
    /// Whatever remains once the other groups, combinators, commas and `*` are removed.
    pub elements: Vec<&'a str>,
}

impl<'a> SpecificityBreakdown<'a> {
    /// Specificity as a derived view of the group sizes.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        Specificity(
            count(self.ids.len()),
            count(self.classes.len() + self.attributes.len() + self.pseudo_classes.len()),
            count(self.elements.len() + self.pseudo_elements.len()),
        )
    }

    /// The entries collected for `category`.
    #[must_use]
    pub fn get(&self, category: Category) -> &[&'a str] {
        match category {
            Category::PseudoElement => &self.pseudo_elements,
            Category::PseudoClass => &self.pseudo_classes,
            Category::Id => &self.ids,
            Category::Class => &self.classes,
            Category::Attribute => &self.attributes,
            Category::Element => &self.elements,
        }
    }

    /// True when no group holds anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|&c| self.get(c).is_empty())
    }

    fn get_mut(&mut self, category: Category) -> &mut Vec<&'a str> {
        match category {
            Category::PseudoElement => &mut self.pseudo_elements,
            Category::PseudoClass => &mut self.pseudo_classes,
            Category::Id => &mut self.ids,
            Category::Class => &mut self.classes,
            Category::Attribute => &mut self.attributes,
            Category::Element => &mut self.elements,
        }
    }
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// A pass returns the end of the match starting at the given byte, if any.
type Rule = fn(&Working<'_>, usize) -> Option<usize>;

/// Ordered extraction passes. Elements are not in the table: they are the
/// leftovers after every rule has run.
const PASSES: [(Category, Rule); 5] = [
    (Category::PseudoElement, match_pseudo_element),
    (Category::PseudoClass, match_pseudo_class),
    (Category::Id, match_id),
    (Category::Class, match_class),
    (Category::Attribute, match_attribute),
];

/// The selector being taken apart.
struct Working<'a> {
    source: &'a str,
    bytes: &'a [u8],
    /// Bytes already claimed by an earlier pass.
    consumed: Vec<bool>,
    /// Bytes strictly inside an attribute bracket. Pseudo, id and class matches
    /// may not start here.
    shielded: Vec<bool>,
}

impl<'a> Working<'a> {
    fn new(source: &'a str) -> Self {
        let bytes = source.as_bytes();
        let mut shielded = vec![false; bytes.len()];
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'['
                && let Some(close) = attribute_close(bytes, i, |_| true)
            {
                shielded[i + 1..close].fill(true);
                i = close + 1;
            } else {
                i += 1;
            }
        }
        Self {
            source,
            bytes,
            consumed: vec![false; bytes.len()],
            shielded,
        }
    }

    fn is_free(&self, i: usize) -> bool {
        i < self.bytes.len() && !self.consumed[i]
    }

    fn byte_is(&self, i: usize, b: u8) -> bool {
        self.is_free(i) && self.bytes[i] == b
    }

    /// Can a prefixed match (`:`, `#`, `.`) begin at `i`?
    fn can_start(&self, i: usize, prefix: u8) -> bool {
        self.byte_is(i, prefix) && !self.shielded[i]
    }

    /// End of the run of free name bytes starting at `start`.
    fn name_end(&self, start: usize) -> usize {
        let mut end = start;
        while self.is_free(end) && is_name_byte(self.bytes[end]) {
            end += 1;
        }
        end
    }

    /// Run one pass, claiming every match in source order.
    fn extract(&mut self, rule: Rule) -> Vec<&'a str> {
        let source = self.source;
        let mut found = Vec::new();
        let mut i = 0;
        while i < self.bytes.len() {
            if self.consumed[i] {
                i += 1;
                continue;
            }
            match rule(self, i) {
                Some(end) => {
                    found.push(&source[i..end]);
                    self.consumed[i..end].fill(true);
                    i = end;
                }
                None => i += 1,
            }
        }
        found
    }

    /// Split the unclaimed text into element tokens.
    fn leftovers(&self) -> Vec<&'a str> {
        let source = self.source;
        let mut tokens = Vec::new();
        let mut start = None;
        for i in 0..=self.bytes.len() {
            let keep = self.is_free(i) && !is_separator(self.bytes[i]);
            match (start, keep) {
                (None, true) => start = Some(i),
                (Some(s), false) => {
                    tokens.push(&source[s..i]);
                    start = None;
                }
                _ => {}
            }
        }
        tokens
    }
}

/// [§ 4.3.9 ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point),
/// loosened to allow a leading digit or hyphen.
const fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || !b.is_ascii()
}

/// Combinators, whitespace, list commas and the universal selector.
const fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || matches!(b, b'>' | b'+' | b'~' | b',' | b'*')
}

/// Index of the `]` closing a non-empty bracket opened at `open`.
fn attribute_close(bytes: &[u8], open: usize, usable: impl Fn(usize) -> bool) -> Option<usize> {
    let mut i = open + 1;
    while i < bytes.len() && usable(i) {
        if bytes[i] == b']' {
            return (i > open + 1).then_some(i);
        }
        i += 1;
    }
    None
}

/// `::name`
fn match_pseudo_element(w: &Working<'_>, i: usize) -> Option<usize> {
    if !(w.can_start(i, b':') && w.byte_is(i + 1, b':')) {
        return None;
    }
    let end = w.name_end(i + 2);
    (end > i + 2).then_some(end)
}

/// `:name` or `:name(args)`, args running to the matching `)`. Parentheses
/// inside an attribute bracket do not count. An unclosed `(` leaves the bare
/// `:name`.
fn match_pseudo_class(w: &Working<'_>, i: usize) -> Option<usize> {
    if !w.can_start(i, b':') {
        return None;
    }
    let end = w.name_end(i + 1);
    if end == i + 1 {
        return None;
    }
    if w.byte_is(end, b'(') {
        let mut depth = 1usize;
        let mut j = end + 1;
        while w.is_free(j) {
            if !w.shielded[j] {
                match w.bytes[j] {
                    b'(' => depth += 1,
                    b')' => {
                        depth -= 1;
                        if depth == 0 {
                            return Some(j + 1);
                        }
                    }
                    _ => {}
                }
            }
            j += 1;
        }
    }
    Some(end)
}

fn match_prefixed(w: &Working<'_>, i: usize, prefix: u8) -> Option<usize> {
    if !w.can_start(i, prefix) {
        return None;
    }
    let end = w.name_end(i + 1);
    (end > i + 1).then_some(end)
}

/// `#name`
fn match_id(w: &Working<'_>, i: usize) -> Option<usize> {
    match_prefixed(w, i, b'#')
}

/// `.name`
fn match_class(w: &Working<'_>, i: usize) -> Option<usize> {
    match_prefixed(w, i, b'.')
}

/// `[...]` with a non-empty interior.
fn match_attribute(w: &Working<'_>, i: usize) -> Option<usize> {
    if !w.byte_is(i, b'[') {
        return None;
    }
    attribute_close(w.bytes, i, |j| w.is_free(j)).map(|close| close + 1)
}

/// Break a selector into its specificity groups.
///
/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
///
/// Passes run in a fixed order: pseudo-elements, pseudo-classes, IDs, classes,
/// attribute selectors. Whatever is left, split on combinators, whitespace,
/// commas and `*`, becomes the element list.
///
/// ```
/// use glean_css::{Specificity, parse};
///
/// let breakdown = parse("ul#nav > li.item:hover");
/// assert_eq!(breakdown.ids, ["#nav"]);
/// assert_eq!(breakdown.elements, ["ul", "li"]);
/// assert_eq!(breakdown.specificity(), Specificity(1, 2, 2));
/// ```
#[must_use]
pub fn parse(selector: &str) -> SpecificityBreakdown<'_> {
    let mut working = Working::new(selector);
    let mut breakdown = SpecificityBreakdown::default();

    for (category, rule) in PASSES {
        let found = working.extract(rule);
        *breakdown.get_mut(category) = found;
    }
    breakdown.elements = working.leftovers();

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shield_covers_bracket_interior_only() {
        let w = Working::new("a[x=y]b");
        assert_eq!(w.shielded, [false, false, true, true, true, false, false]);
    }

    #[test]
    fn empty_brackets_are_not_shielded() {
        let w = Working::new("[]");
        assert!(w.shielded.iter().all(|&s| !s));
    }

    #[test]
    fn pseudo_class_argument_ends_at_matching_paren() {
        let w = Working::new("a:not(:is(b, c)) d");
        assert_eq!(match_pseudo_class(&w, 1), Some(16));
    }

    #[test]
    fn name_bytes_include_non_ascii() {
        assert!(is_name_byte("é".as_bytes()[0]));
        assert!(is_name_byte(b'-'));
        assert!(!is_name_byte(b'.'));
    }
}
