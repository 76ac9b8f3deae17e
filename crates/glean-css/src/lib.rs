//! CSS selector specificity and explanation for glean.
//!
//! # Scope
//!
//! This crate implements:
//! - **Specificity breakdown** ([§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!   - ID, class, attribute, pseudo-class, pseudo-element and type selector groups
//!   - `(a, b, c)` specificity derived from the group sizes
//!
//! - **Selector explanation** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Selector lists split on top-level commas
//!   - Descendant, child, next-sibling and subsequent-sibling relationships
//!
//! # Not Yet Implemented
//!
//! - Specificity of `:is()`, `:not()` and `:has()` from their most specific argument
//!   (the whole pseudo-class counts once)
//! - Namespace prefixes (`svg|rect`)

/// Selector breakdown and explanation per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

pub use selector::{
    Category, Combinator, NO_SELECTOR, Specificity, SpecificityBreakdown, explain, parse,
};
