//! Methods exempt from throws reporting.
//!
//! Some frameworks call methods whose failures are the point (test methods
//! whose exceptions fail the test). A whitelist entry names a class and a
//! method-name pattern; matching methods of that class and its subtypes
//! neither need `@throws` for what escapes them nor get unused reports.

use crate::context::CheckerOptions;
use crate::error::ConfigError;
use regex::Regex;
use throwck_solver::{ClassName, TypeHierarchy};

#[derive(Clone, Debug, Default)]
pub struct MethodWhitelist {
    entries: Vec<(ClassName, Regex)>,
}

impl MethodWhitelist {
    pub fn from_options(options: &CheckerOptions) -> Result<Self, ConfigError> {
        let mut entries = Vec::with_capacity(options.method_whitelist.len());
        for (class, pattern) in &options.method_whitelist {
            let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidWhitelistPattern {
                class: class.clone(),
                source,
            })?;
            entries.push((ClassName::new(class), regex));
        }
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(Self { entries })
    }

    pub fn is_whitelisted(
        &self,
        hierarchy: &dyn TypeHierarchy,
        class: &ClassName,
        method: &str,
    ) -> bool {
        self.entries.iter().any(|(whitelisted, pattern)| {
            pattern.is_match(method) && hierarchy.is_same_or_subclass_of(class, whitelisted)
        })
    }
}

#[cfg(test)]
#[path = "../tests/whitelist_tests.rs"]
mod tests;
