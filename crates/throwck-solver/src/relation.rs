//! Catch relation and deterministic type ordering.

use crate::hierarchy::TypeHierarchy;
use crate::types::ClassName;
use std::cmp::Ordering;

/// Three-valued answer to "does a handler for X intercept a throw of Y".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ternary {
    /// Every value of the thrown type is intercepted.
    Yes,
    /// The handler type is a strict subtype of the thrown type, so only
    /// some values are intercepted.
    Maybe,
    No,
}

/// How a handler (catch clause or `@throws` declaration) of type `handler`
/// relates to a thrown type `thrown`.
pub fn catch_relation(
    hierarchy: &dyn TypeHierarchy,
    handler: &ClassName,
    thrown: &ClassName,
) -> Ternary {
    if hierarchy.is_same_or_subclass_of(thrown, handler) {
        Ternary::Yes
    } else if hierarchy.is_subclass_of(handler, thrown) {
        Ternary::Maybe
    } else {
        Ternary::No
    }
}

/// Places every type after all of its supertypes; types of equal depth
/// compare by lookup key, so spellings of one class compare equal.
pub fn compare_supertypes_first(
    hierarchy: &dyn TypeHierarchy,
    a: &ClassName,
    b: &ClassName,
) -> Ordering {
    hierarchy
        .depth(a)
        .cmp(&hierarchy.depth(b))
        .then_with(|| a.lookup_key().cmp(&b.lookup_key()))
}

#[cfg(test)]
#[path = "../tests/relation_tests.rs"]
mod tests;
