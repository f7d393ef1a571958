//! Checker configuration and shared per-unit state.

use crate::default_throws::DefaultThrowTypes;
use crate::error::ConfigError;
use crate::policy::CheckedExceptionPolicy;
use crate::whitelist::MethodWhitelist;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use throwck_common::Diagnostic;
use throwck_solver::TypeHierarchy;

/// User-facing checker options.
///
/// Deserializes from the same camelCase keys the configuration file uses;
/// every key is optional.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CheckerOptions {
    /// Report catch clauses of unchecked types that nothing in the try body throws.
    pub report_unused_catches_of_unchecked_exceptions: bool,
    /// When false, implementations of interface or abstract methods may
    /// declare checked types they never throw.
    pub report_unused_checked_throws_in_subtypes: bool,
    pub report_checked_throws_in_global_scope: bool,
    /// Roots of the checked types. Mutually exclusive with `unchecked_exceptions`.
    pub checked_exceptions: Vec<String>,
    /// Roots of the unchecked types; everything else is checked.
    pub unchecked_exceptions: Vec<String>,
    /// `class -> method -> throw types`, overriding callee annotations.
    pub method_throw_type_declarations: FxHashMap<String, FxHashMap<String, Vec<String>>>,
    /// `function -> throw types`, overriding callee annotations.
    pub function_throw_type_declarations: FxHashMap<String, Vec<String>>,
    /// `class -> method name regex` of methods exempt from throws reporting.
    pub method_whitelist: FxHashMap<String, String>,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            report_unused_catches_of_unchecked_exceptions: false,
            report_unused_checked_throws_in_subtypes: true,
            report_checked_throws_in_global_scope: false,
            checked_exceptions: Vec::new(),
            unchecked_exceptions: Vec::new(),
            method_throw_type_declarations: FxHashMap::default(),
            function_throw_type_declarations: FxHashMap::default(),
            method_whitelist: FxHashMap::default(),
        }
    }
}

impl CheckerOptions {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// State shared by every pass while one compilation unit is checked.
pub struct CheckerContext<'a> {
    pub hierarchy: &'a dyn TypeHierarchy,
    pub file_name: String,
    pub options: CheckerOptions,
    pub policy: CheckedExceptionPolicy,
    pub defaults: DefaultThrowTypes,
    pub whitelist: MethodWhitelist,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> CheckerContext<'a> {
    pub fn new(
        hierarchy: &'a dyn TypeHierarchy,
        file_name: String,
        options: CheckerOptions,
    ) -> Result<Self, ConfigError> {
        let policy = CheckedExceptionPolicy::from_options(&options)?;
        let defaults = DefaultThrowTypes::from_options(&options);
        let whitelist = MethodWhitelist::from_options(&options)?;
        Ok(Self {
            hierarchy,
            file_name,
            options,
            policy,
            defaults,
            whitelist,
            diagnostics: Vec::new(),
        })
    }
}

#[cfg(test)]
#[path = "../tests/context_tests.rs"]
mod tests;
