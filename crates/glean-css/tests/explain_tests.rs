//! Integration tests for plain-language selector explanations.

use glean_css::{Combinator, NO_SELECTOR, explain};

#[test]
fn test_empty_selector_has_sentinel() {
    assert_eq!(explain(""), NO_SELECTOR);
    assert_eq!(explain("   "), "No selector provided.");
    assert_eq!(explain(" , ,"), NO_SELECTOR);
}

#[test]
fn test_type_selector() {
    assert_eq!(explain("p"), "Selects a <p> element.");
    assert_eq!(explain("img"), "Selects an <img> element.");
}

#[test]
fn test_universal_selector() {
    assert_eq!(explain("*"), "Selects any element.");
}

#[test]
fn test_compound_qualifiers() {
    assert_eq!(
        explain("button#save.btn.primary[disabled]"),
        "Selects a <button> element with id \"save\", classes \"btn\" and \"primary\", attribute [disabled]."
    );
}

#[test]
fn test_pseudo_classes_and_elements() {
    assert_eq!(
        explain("a.nav:hover:focus"),
        "Selects an <a> element with class \"nav\" matching :hover and :focus."
    );
    assert_eq!(
        explain("p::first-line"),
        "Selects the ::first-line pseudo-element of a <p> element."
    );
    assert_eq!(
        explain("::selection"),
        "Selects the ::selection pseudo-element of any element."
    );
}

// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

#[test]
fn test_descendant_combinator() {
    assert_eq!(explain("div p"), "Selects a <p> element within a <div> element.");
}

#[test]
fn test_child_combinator() {
    assert_eq!(
        explain("ul>li"),
        "Selects an <li> element that is a direct child of a <ul> element."
    );
}

#[test]
fn test_sibling_combinators() {
    assert_eq!(
        explain("h1 + p"),
        "Selects a <p> element that is the next sibling of a <h1> element."
    );
    assert_eq!(
        explain("h1 ~ p"),
        "Selects a <p> element that is a sibling of a <h1> element."
    );
}

#[test]
fn test_chain_reads_from_subject_outward() {
    assert_eq!(
        explain("nav > ul li a.active"),
        "Selects an <a> element with class \"active\" within an <li> element within a <ul> element that is a direct child of a <nav> element."
    );
}

#[test]
fn test_selector_list_gives_one_sentence_per_group() {
    assert_eq!(
        explain("h1, h2.title"),
        "Selects a <h1> element.\nSelects a <h2> element with class \"title\"."
    );
}

#[test]
fn test_comma_inside_pseudo_class_does_not_split() {
    let text = explain("li:is(.a, .b)");
    assert_eq!(text.lines().count(), 1);
    assert_eq!(text, "Selects an <li> element matching :is(.a, .b).");
}

#[test]
fn test_combinator_inside_argument_is_not_a_combinator() {
    assert_eq!(
        explain("tr:nth-child(2n + 1)"),
        "Selects a <tr> element matching :nth-child(2n + 1)."
    );
}

#[test]
fn test_bracketed_paren_does_not_hide_combinator() {
    assert_eq!(
        explain(r#"a[title="("] > p"#),
        r#"Selects a <p> element that is a direct child of an <a> element with attribute [title="("]."#
    );
}

#[test]
fn test_bracketed_paren_does_not_hide_comma() {
    let text = explain(r#"a[title="("], p"#);
    assert_eq!(text.lines().count(), 2);
    assert_eq!(text.lines().nth(1), Some("Selects a <p> element."));
}

#[test]
fn test_articles_follow_pronunciation() {
    assert_eq!(explain("ul"), "Selects a <ul> element.");
    assert_eq!(explain("u"), "Selects a <u> element.");
    assert_eq!(explain("input"), "Selects an <input> element.");
    assert_eq!(explain("em"), "Selects an <em> element.");
}

#[test]
fn test_combinator_phrases() {
    assert_eq!(Combinator::Descendant.phrase(), "within");
    assert_eq!(Combinator::Child.phrase(), "is a direct child of");
    assert_eq!(Combinator::NextSibling.phrase(), "is the next sibling of");
    assert_eq!(Combinator::SubsequentSibling.phrase(), "is a sibling of");
    assert_eq!(Combinator::from_char('>'), Some(Combinator::Child));
    assert_eq!(Combinator::from_char(' '), None);
}

#[test]
fn test_explain_is_idempotent() {
    let selector = "form > input[type=email]:invalid + .error";
    assert_eq!(explain(selector), explain(selector));
}
