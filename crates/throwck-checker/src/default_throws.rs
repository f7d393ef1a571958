//! Configured default throw types.
//!
//! `methodThrowTypeDeclarations` and `functionThrowTypeDeclarations` pin the
//! throw set of callees whose own annotations are missing or wrong (typically
//! the standard library). A method entry applies to the named class and to
//! every subtype that does not have a closer entry.

use crate::context::CheckerOptions;
use rustc_hash::FxHashMap;
use throwck_solver::{ClassName, TypeHierarchy, TypeSet};

#[derive(Clone, Debug, Default)]
pub struct DefaultThrowTypes {
    /// Lower-cased class name -> lower-cased method name -> throw types.
    methods: FxHashMap<String, FxHashMap<String, TypeSet>>,
    /// Lower-cased function name -> throw types.
    functions: FxHashMap<String, TypeSet>,
}

fn function_key(name: &str) -> String {
    name.trim().trim_start_matches('\\').to_ascii_lowercase()
}

impl DefaultThrowTypes {
    pub fn from_options(options: &CheckerOptions) -> Self {
        let mut defaults = Self::default();
        for (class, methods) in &options.method_throw_type_declarations {
            let entry = defaults
                .methods
                .entry(ClassName::new(class).lookup_key())
                .or_default();
            for (method, types) in methods {
                entry.insert(method.to_ascii_lowercase(), TypeSet::from_names(types));
            }
        }
        for (function, types) in &options.function_throw_type_declarations {
            defaults
                .functions
                .insert(function_key(function), TypeSet::from_names(types));
        }
        defaults
    }

    fn own_method_entry(&self, class: &ClassName, method: &str) -> Option<&TypeSet> {
        self.methods
            .get(&class.lookup_key())?
            .get(&method.to_ascii_lowercase())
    }

    /// The configured throw types of `class::method`, looking at the class
    /// first and then its supertypes nearest-first.
    pub fn method_throw_types(
        &self,
        hierarchy: &dyn TypeHierarchy,
        class: &ClassName,
        method: &str,
    ) -> Option<TypeSet> {
        if self.methods.is_empty() {
            return None;
        }
        if let Some(types) = self.own_method_entry(class, method) {
            return Some(types.clone());
        }
        hierarchy
            .ancestors(class)
            .iter()
            .find_map(|ancestor| self.own_method_entry(ancestor, method))
            .cloned()
    }

    pub fn function_throw_types(&self, function: &str) -> Option<TypeSet> {
        self.functions.get(&function_key(function)).cloned()
    }
}

#[cfg(test)]
#[path = "../tests/default_throws_tests.rs"]
mod tests;
