//! Checked-exception policy.
//!
//! Decides which exception types must be caught or declared. Configured by
//! one list of root types: either the roots of the checked types, or the
//! roots of the unchecked types (everything else being checked).
//! Unresolvable types are always unchecked.

use crate::context::CheckerOptions;
use crate::error::ConfigError;
use throwck_solver::{ClassName, TypeHierarchy, TypeSet};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckedExceptionPolicy {
    /// A type is checked iff it is one of these roots or a subtype of one.
    CheckedRoots(Vec<ClassName>),
    /// A type is checked unless it is one of these roots or a subtype of one.
    UncheckedRoots(Vec<ClassName>),
}

impl Default for CheckedExceptionPolicy {
    fn default() -> Self {
        CheckedExceptionPolicy::UncheckedRoots(Vec::new())
    }
}

impl CheckedExceptionPolicy {
    pub fn from_options(options: &CheckerOptions) -> Result<Self, ConfigError> {
        let roots =
            |names: &[String]| -> Vec<ClassName> { names.iter().map(ClassName::from).collect() };
        match (
            options.checked_exceptions.is_empty(),
            options.unchecked_exceptions.is_empty(),
        ) {
            (false, false) => Err(ConfigError::ConflictingExceptionRoots),
            (false, true) => Ok(Self::CheckedRoots(roots(&options.checked_exceptions))),
            _ => Ok(Self::UncheckedRoots(roots(&options.unchecked_exceptions))),
        }
    }

    pub fn is_checked(&self, hierarchy: &dyn TypeHierarchy, ty: &ClassName) -> bool {
        if !hierarchy.has_class(ty) {
            return false;
        }
        match self {
            Self::CheckedRoots(roots) => roots
                .iter()
                .any(|root| hierarchy.is_same_or_subclass_of(ty, root)),
            Self::UncheckedRoots(roots) => !roots
                .iter()
                .any(|root| hierarchy.is_same_or_subclass_of(ty, root)),
        }
    }

    /// Keep only the checked members, preserving input order.
    pub fn filter_checked(&self, hierarchy: &dyn TypeHierarchy, types: &TypeSet) -> TypeSet {
        types
            .iter()
            .filter(|ty| self.is_checked(hierarchy, ty))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/policy_tests.rs"]
mod tests;
