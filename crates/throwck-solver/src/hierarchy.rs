//! The type hierarchy oracle.
//!
//! Hosts implement [`TypeHierarchy`] on top of their own reflection data.
//! Only the two lookups are required; every subtype and method query the
//! checker makes is derived from them by the provided methods.
//!
//! Lookups are case-insensitive, like class and function names in the host
//! language. An unresolved name is never an error here: callers treat it as
//! "contributes nothing".

use crate::type_set::TypeSet;
use crate::types::ClassName;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassKind {
    Class,
    AbstractClass,
    Interface,
}

/// Reflection record for one class or interface.
#[derive(Clone, Debug)]
pub struct ClassInfo {
    pub name: ClassName,
    pub kind: ClassKind,
    pub parent: Option<ClassName>,
    /// Implemented interfaces, or extended interfaces for an interface.
    pub interfaces: Vec<ClassName>,
    /// Keyed by lower-cased method name.
    pub methods: FxHashMap<String, MethodInfo>,
}

impl ClassInfo {
    fn with_kind(name: &str, kind: ClassKind) -> Self {
        Self {
            name: ClassName::new(name),
            kind,
            parent: None,
            interfaces: Vec::new(),
            methods: FxHashMap::default(),
        }
    }

    pub fn class(name: &str) -> Self {
        Self::with_kind(name, ClassKind::Class)
    }

    pub fn abstract_class(name: &str) -> Self {
        Self::with_kind(name, ClassKind::AbstractClass)
    }

    pub fn interface(name: &str) -> Self {
        Self::with_kind(name, ClassKind::Interface)
    }

    /// Set the parent class; for interfaces this adds an extended interface.
    #[must_use]
    pub fn extends(mut self, parent: &str) -> Self {
        if self.kind == ClassKind::Interface {
            self.interfaces.push(ClassName::new(parent));
        } else {
            self.parent = Some(ClassName::new(parent));
        }
        self
    }

    #[must_use]
    pub fn implements(mut self, interface: &str) -> Self {
        self.interfaces.push(ClassName::new(interface));
        self
    }

    #[must_use]
    pub fn method(mut self, method: MethodInfo) -> Self {
        self.methods.insert(method.name.to_ascii_lowercase(), method);
        self
    }

    pub fn own_method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods.get(&name.to_ascii_lowercase())
    }

    /// Direct supertypes: the parent class first, then interfaces.
    pub fn direct_supertypes(&self) -> impl Iterator<Item = &ClassName> {
        self.parent.iter().chain(self.interfaces.iter())
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }
}

/// Reflection record for one method.
#[derive(Clone, Debug)]
pub struct MethodInfo {
    pub name: String,
    /// Declared throw types; `None` when the method carries no annotation.
    pub throws: Option<TypeSet>,
    pub is_abstract: bool,
}

impl MethodInfo {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            throws: None,
            is_abstract: false,
        }
    }

    #[must_use]
    pub fn throws<S: AsRef<str>>(mut self, types: impl IntoIterator<Item = S>) -> Self {
        self.throws = Some(TypeSet::from_names(types));
        self
    }

    #[must_use]
    pub fn abstract_method(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// The declared throw set, empty when unannotated.
    pub fn throw_types(&self) -> TypeSet {
        self.throws.clone().unwrap_or_default()
    }
}

/// Reflection record for one free function.
#[derive(Clone, Debug)]
pub struct FunctionInfo {
    pub name: String,
    pub throws: Option<TypeSet>,
}

impl FunctionInfo {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            throws: None,
        }
    }

    #[must_use]
    pub fn throws<S: AsRef<str>>(mut self, types: impl IntoIterator<Item = S>) -> Self {
        self.throws = Some(TypeSet::from_names(types));
        self
    }

    pub fn throw_types(&self) -> TypeSet {
        self.throws.clone().unwrap_or_default()
    }
}

/// Subtype and reflection queries over named types.
pub trait TypeHierarchy {
    /// Resolve a class or interface by name.
    fn class(&self, name: &ClassName) -> Option<&ClassInfo>;

    /// Resolve a free function by name.
    fn function(&self, name: &str) -> Option<&FunctionInfo>;

    fn has_class(&self, name: &ClassName) -> bool {
        self.class(name).is_some()
    }

    /// The resolved (declared-case) name of a class, if it exists.
    fn resolved_name(&self, name: &ClassName) -> Option<ClassName> {
        self.class(name).map(|info| info.name.clone())
    }

    /// All strict supertypes in breadth-first order, parent before interfaces.
    /// Unresolvable supertypes are listed but not expanded.
    fn ancestors(&self, name: &ClassName) -> Vec<ClassName> {
        let mut result = Vec::new();
        let Some(info) = self.class(name) else {
            return result;
        };

        let mut seen: FxHashSet<String> = FxHashSet::default();
        seen.insert(info.name.lookup_key());
        let mut queue: VecDeque<ClassName> = info.direct_supertypes().cloned().collect();

        while let Some(next) = queue.pop_front() {
            if !seen.insert(next.lookup_key()) {
                continue;
            }
            if let Some(next_info) = self.class(&next) {
                queue.extend(next_info.direct_supertypes().cloned());
                result.push(next_info.name.clone());
            } else {
                result.push(next);
            }
        }
        result
    }

    /// Whether both names denote the same type.
    fn is_same_class(&self, a: &ClassName, b: &ClassName) -> bool {
        if a == b {
            return true;
        }
        match (self.class(a), self.class(b)) {
            (Some(left), Some(right)) => left.name == right.name,
            _ => a.lookup_key() == b.lookup_key(),
        }
    }

    /// Strict subtype query: `class` extends or implements `ancestor`.
    fn is_subclass_of(&self, class: &ClassName, ancestor: &ClassName) -> bool {
        if self.is_same_class(class, ancestor) {
            return false;
        }
        let key = ancestor.lookup_key();
        self.ancestors(class)
            .iter()
            .any(|candidate| candidate.lookup_key() == key)
    }

    fn is_same_or_subclass_of(&self, class: &ClassName, ancestor: &ClassName) -> bool {
        self.is_same_class(class, ancestor) || self.is_subclass_of(class, ancestor)
    }

    /// Find a method on the class or the nearest supertype declaring it.
    /// Returns the declaring class together with the method.
    fn find_method(&self, class: &ClassName, method: &str) -> Option<(&ClassInfo, &MethodInfo)> {
        let info = self.class(class)?;
        if let Some(found) = info.own_method(method) {
            return Some((info, found));
        }
        for ancestor in self.ancestors(class) {
            if let Some(ancestor_info) = self.class(&ancestor)
                && let Some(found) = ancestor_info.own_method(method)
            {
                return Some((ancestor_info, found));
            }
        }
        None
    }

    /// Length of the longest supertype chain above `class`; 0 for roots and
    /// unresolved names. Every strict subtype has a greater depth than each
    /// of its supertypes.
    fn depth(&self, class: &ClassName) -> usize {
        fn walk<H: TypeHierarchy + ?Sized>(
            hierarchy: &H,
            class: &ClassName,
            visiting: &mut FxHashSet<String>,
        ) -> usize {
            let Some(info) = hierarchy.class(class) else {
                return 0;
            };
            if !visiting.insert(info.name.lookup_key()) {
                return 0;
            }
            let depth = info
                .direct_supertypes()
                .map(|parent| 1 + walk(hierarchy, parent, visiting))
                .max()
                .unwrap_or(0);
            visiting.remove(&info.name.lookup_key());
            depth
        }

        let mut visiting = FxHashSet::default();
        walk(self, class, &mut visiting)
    }
}

#[cfg(test)]
#[path = "../tests/hierarchy_tests.rs"]
mod tests;
