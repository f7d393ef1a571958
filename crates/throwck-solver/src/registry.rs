//! In-memory type hierarchy.
//!
//! `ClassRegistry` is the reference [`TypeHierarchy`]: hosts that do not have
//! a reflection layer of their own can register classes and functions here,
//! and the checker's tests run against it.

use crate::hierarchy::{ClassInfo, FunctionInfo, MethodInfo, TypeHierarchy};
use crate::types::ClassName;
use rustc_hash::FxHashMap;
use tracing::trace;

/// The standard throwable hierarchy as `(class, parent)` pairs.
const BUILTIN_THROWABLES: &[(&str, &str)] = &[
    ("Exception", "Throwable"),
    ("Error", "Throwable"),
    ("ErrorException", "Exception"),
    ("RuntimeException", "Exception"),
    ("LogicException", "Exception"),
    ("JsonException", "Exception"),
    ("BadFunctionCallException", "LogicException"),
    ("BadMethodCallException", "BadFunctionCallException"),
    ("DomainException", "LogicException"),
    ("InvalidArgumentException", "LogicException"),
    ("LengthException", "LogicException"),
    ("OutOfRangeException", "LogicException"),
    ("OutOfBoundsException", "RuntimeException"),
    ("OverflowException", "RuntimeException"),
    ("RangeException", "RuntimeException"),
    ("UnderflowException", "RuntimeException"),
    ("UnexpectedValueException", "RuntimeException"),
    ("TypeError", "Error"),
    ("ValueError", "Error"),
    ("ArithmeticError", "Error"),
    ("AssertionError", "Error"),
    ("ArgumentCountError", "TypeError"),
    ("DivisionByZeroError", "ArithmeticError"),
];

const BUILTIN_FUNCTIONS: &[&str] = &[
    "count",
    "intdiv",
    "iterator_apply",
    "iterator_count",
    "iterator_to_array",
    "json_decode",
    "json_encode",
];

#[derive(Clone, Debug, Default)]
pub struct ClassRegistry {
    classes: FxHashMap<String, ClassInfo>,
    functions: FxHashMap<String, FunctionInfo>,
}

impl ClassRegistry {
    /// An empty registry: no classes, not even `Throwable`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the standard throwables, the iteration,
    /// counting and serialization protocol interfaces, and the standard
    /// functions the checker special-cases.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.add_class(ClassInfo::interface("Throwable"));
        for &(class, parent) in BUILTIN_THROWABLES {
            registry.add_class(
                ClassInfo::class(class)
                    .extends(parent)
                    .method(MethodInfo::new("__construct")),
            );
        }

        registry.add_class(ClassInfo::interface("Traversable"));
        registry.add_class(
            ClassInfo::interface("Iterator")
                .extends("Traversable")
                .method(MethodInfo::new("current").abstract_method())
                .method(MethodInfo::new("next").abstract_method())
                .method(MethodInfo::new("key").abstract_method())
                .method(MethodInfo::new("valid").abstract_method())
                .method(MethodInfo::new("rewind").abstract_method()),
        );
        registry.add_class(
            ClassInfo::interface("IteratorAggregate")
                .extends("Traversable")
                .method(MethodInfo::new("getIterator").abstract_method()),
        );
        registry.add_class(
            ClassInfo::interface("Countable").method(MethodInfo::new("count").abstract_method()),
        );
        registry.add_class(
            ClassInfo::interface("JsonSerializable")
                .method(MethodInfo::new("jsonSerialize").abstract_method()),
        );

        for &name in BUILTIN_FUNCTIONS {
            registry.add_function(FunctionInfo::new(name));
        }
        registry
    }

    /// Register (or replace) a class.
    pub fn add_class(&mut self, info: ClassInfo) -> &mut Self {
        trace!(class = %info.name, kind = ?info.kind, "register class");
        self.classes.insert(info.name.lookup_key(), info);
        self
    }

    /// Register (or replace) a free function.
    pub fn add_function(&mut self, info: FunctionInfo) -> &mut Self {
        let key = function_key(&info.name);
        self.functions.insert(key, info);
        self
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}

fn function_key(name: &str) -> String {
    name.trim().trim_start_matches('\\').to_ascii_lowercase()
}

impl TypeHierarchy for ClassRegistry {
    fn class(&self, name: &ClassName) -> Option<&ClassInfo> {
        self.classes.get(&name.lookup_key())
    }

    fn function(&self, name: &str) -> Option<&FunctionInfo> {
        self.functions.get(&function_key(name))
    }
}

#[cfg(test)]
#[path = "../tests/registry_tests.rs"]
mod tests;
