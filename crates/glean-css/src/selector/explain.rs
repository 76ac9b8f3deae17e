//! Plain-language explanations of selectors.
//!
//! A selector list is split on top-level commas, each complex selector on its
//! combinators, and each compound fragment is described from its own
//! [`parse`](super::parse) breakdown. Sentences read from the subject (the
//! rightmost compound) outward.

use serde::Serialize;

use super::{SpecificityBreakdown, attribute_close, parse};

/// Returned by [`explain`] when the input holds no selector at all.
pub const NO_SELECTOR: &str = "No selector provided.";

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A selector of the form 'A B' represents an element B that is an
    /// arbitrary descendant of some ancestor element A."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A selector of the form 'A > B' represents an element B that is
    /// a direct child of element A."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A selector of the form 'A + B' represents an element B that
    /// immediately follows element A, where A and B share the same parent."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A selector of the form 'A ~ B' represents an element B that
    /// follows element A (not necessarily immediately)."
    SubsequentSibling,
}

impl Combinator {
    /// The combinator for an explicit combinator character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '>' => Some(Self::Child),
            '+' => Some(Self::NextSibling),
            '~' => Some(Self::SubsequentSibling),
            _ => None,
        }
    }

    /// How the combinator reads between a subject and the fragment to its left.
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Descendant => "within",
            Self::Child => "is a direct child of",
            Self::NextSibling => "is the next sibling of",
            Self::SubsequentSibling => "is a sibling of",
        }
    }
}

/// A complex selector: compound fragments and the combinators between them.
///
/// `combinators[i]` joins `compounds[i]` to `compounds[i + 1]`.
#[derive(Debug, Default, PartialEq, Eq)]
struct Chain<'a> {
    compounds: Vec<&'a str>,
    combinators: Vec<Combinator>,
}

/// Visit each char of `input` with whether it sits outside `(...)` and `[...]`.
///
/// A bracket is skipped as one unit, closed the way [`parse`] closes it, so
/// quoted parentheses or commas inside it never change the nesting depth.
fn walk_top_level(input: &str, mut visit: impl FnMut(usize, char, bool)) {
    let mut depth = 0usize;
    let mut bracket_end = None;
    for (i, c) in input.char_indices() {
        if let Some(end) = bracket_end {
            visit(i, c, false);
            if i == end {
                bracket_end = None;
            }
            continue;
        }
        visit(i, c, depth == 0);
        match c {
            '[' => bracket_end = attribute_close(input.as_bytes(), i, |_| true),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
}

/// Split `input` at `sep` wherever it is outside `(...)` and `[...]`.
fn split_top_level(input: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    walk_top_level(input, |i, c, at_top| {
        if at_top && c == sep {
            parts.push(&input[start..i]);
            start = i + c.len_utf8();
        }
    });
    parts.push(&input[start..]);
    parts
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// A run of whitespace and combinator characters separates two compounds.
/// The run is a descendant combinator unless it holds `>`, `+` or `~`; the
/// last explicit one wins. Leading and trailing runs are dropped.
fn split_chain(group: &str) -> Chain<'_> {
    let mut chain = Chain::default();
    let mut start: Option<usize> = None;
    let mut pending: Option<Combinator> = None;

    walk_top_level(group, |i, c, at_top| {
        if at_top && (c.is_whitespace() || Combinator::from_char(c).is_some()) {
            if let Some(s) = start.take() {
                chain.compounds.push(&group[s..i]);
            }
            pending = Combinator::from_char(c)
                .or(pending)
                .or(Some(Combinator::Descendant));
            return;
        }

        if start.is_none() {
            if let Some(combinator) = pending.take()
                && !chain.compounds.is_empty()
            {
                chain.combinators.push(combinator);
            }
            start = Some(i);
        }
    });
    if let Some(s) = start {
        chain.compounds.push(&group[s..]);
    }

    chain
}

/// Article for a tag name as it is read aloud: `a <ul>`, `an <img>`.
fn article(word: &str) -> &'static str {
    let lower = word.to_ascii_lowercase();
    let reads_as_you = lower.starts_with('u') || lower.starts_with("eu");
    if !reads_as_you && lower.starts_with(['a', 'e', 'i', 'o']) {
        "an"
    } else {
        "a"
    }
}

/// `["a"]` -> `a`, `["a", "b"]` -> `a and b`, `["a", "b", "c"]` -> `a, b and c`
fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {last}", head.join(", ")),
    }
}

fn quoted(items: &[&str], prefix: &str) -> Vec<String> {
    items
        .iter()
        .map(|&item| format!("\"{}\"", item.strip_prefix(prefix).unwrap_or(item)))
        .collect()
}

fn noun(singular: &str, plural: &str, items: &[String]) -> String {
    let word = if items.len() == 1 { singular } else { plural };
    format!("{word} {}", join_list(items))
}

/// Describe one compound fragment, e.g. `a <button> element with class "primary"`.
fn describe_compound(compound: &str) -> String {
    let breakdown = parse(compound);
    describe_breakdown(&breakdown)
}

fn describe_breakdown(b: &SpecificityBreakdown<'_>) -> String {
    let mut text = match b.elements.as_slice() {
        [] => "any element".to_string(),
        [tag] => format!("{} <{tag}> element", article(tag)),
        [tag, rest @ ..] => format!(
            "{} <{tag}> element followed by {}",
            article(tag),
            join_list(&quoted(rest, ""))
        ),
    };

    let mut with = Vec::new();
    if !b.ids.is_empty() {
        with.push(noun("id", "ids", &quoted(&b.ids, "#")));
    }
    if !b.classes.is_empty() {
        with.push(noun("class", "classes", &quoted(&b.classes, ".")));
    }
    if !b.attributes.is_empty() {
        let attrs: Vec<String> = b.attributes.iter().map(ToString::to_string).collect();
        with.push(noun("attribute", "attributes", &attrs));
    }
    if !with.is_empty() {
        text.push_str(" with ");
        text.push_str(&with.join(", "));
    }

    if !b.pseudo_classes.is_empty() {
        let states: Vec<String> = b.pseudo_classes.iter().map(ToString::to_string).collect();
        text.push_str(" matching ");
        text.push_str(&join_list(&states));
    }

    if !b.pseudo_elements.is_empty() {
        let parts: Vec<String> = b.pseudo_elements.iter().map(ToString::to_string).collect();
        text = format!(
            "the {} {} of {text}",
            join_list(&parts),
            if parts.len() == 1 { "pseudo-element" } else { "pseudo-elements" }
        );
    }

    text
}

fn describe_chain(chain: &Chain<'_>) -> Option<String> {
    let (subject, rest) = chain.compounds.split_last()?;
    let mut sentence = format!("Selects {}", describe_compound(subject));

    for (combinator, compound) in chain.combinators.iter().zip(rest).rev() {
        let target = describe_compound(compound);
        match combinator {
            Combinator::Descendant => {
                sentence.push_str(&format!(" {} {target}", combinator.phrase()));
            }
            _ => sentence.push_str(&format!(" that {} {target}", combinator.phrase())),
        }
    }

    sentence.push('.');
    Some(sentence)
}

/// Explain a selector list in plain language, one sentence per comma-separated group.
///
/// ```
/// use glean_css::explain;
///
/// assert_eq!(
///     explain("ul > li.active"),
///     "Selects an <li> element with class \"active\" that is a direct child of a <ul> element."
/// );
/// assert_eq!(explain(""), glean_css::NO_SELECTOR);
/// ```
#[must_use]
pub fn explain(selector: &str) -> String {
    let sentences: Vec<String> = split_top_level(selector, ',')
        .into_iter()
        .map(str::trim)
        .filter(|group| !group.is_empty())
        .filter_map(|group| describe_chain(&split_chain(group)))
        .collect();

    if sentences.is_empty() {
        NO_SELECTOR.to_string()
    } else {
        sentences.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commas_inside_functions_do_not_split() {
        assert_eq!(
            split_top_level("a:is(b, c), d[x=\",\"]", ','),
            ["a:is(b, c)", " d[x=\",\"]"]
        );
    }

    #[test]
    fn chain_records_combinators_between_compounds() {
        let chain = split_chain("div  >  p + a ~ b c");
        assert_eq!(chain.compounds, ["div", "p", "a", "b", "c"]);
        assert_eq!(
            chain.combinators,
            [
                Combinator::Child,
                Combinator::NextSibling,
                Combinator::SubsequentSibling,
                Combinator::Descendant,
            ]
        );
    }

    #[test]
    fn chain_ignores_combinators_in_arguments() {
        let chain = split_chain("li:nth-child(2n + 1)");
        assert_eq!(chain.compounds, ["li:nth-child(2n + 1)"]);
        assert!(chain.combinators.is_empty());
    }

    #[test]
    fn dangling_combinators_are_dropped() {
        let chain = split_chain("> a >");
        assert_eq!(chain.compounds, ["a"]);
        assert!(chain.combinators.is_empty());
    }

    #[test]
    fn brackets_are_skipped_as_a_unit() {
        assert_eq!(split_top_level(r#"a[x="("], b"#, ','), [r#"a[x="("]"#, " b"]);
        let chain = split_chain(r#"a[x=")"] + b"#);
        assert_eq!(chain.compounds, [r#"a[x=")"]"#, "b"]);
        assert_eq!(chain.combinators, [Combinator::NextSibling]);
    }

    #[test]
    fn article_follows_pronunciation() {
        assert_eq!(article("ul"), "a");
        assert_eq!(article("Euro"), "a");
        assert_eq!(article("img"), "an");
        assert_eq!(article("p"), "a");
    }

    #[test]
    fn join_list_uses_and_before_the_last_item() {
        let items = ["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(join_list(&items), "a, b and c");
        assert_eq!(join_list(&items[..2]), "a and b");
    }
}
