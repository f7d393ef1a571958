//! Ordered sets of exception types.
//!
//! Insertion order is preserved so that diagnostics come out in the order
//! the throwing constructs and annotations were written.

use crate::types::ClassName;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeSet {
    types: IndexSet<ClassName, FxBuildHasher>,
}

impl TypeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(ty: ClassName) -> Self {
        let mut set = Self::new();
        set.insert(ty);
        set
    }

    /// Build a set from raw names, canonicalizing each one.
    pub fn from_names<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Self {
        names
            .into_iter()
            .map(|name| ClassName::new(name.as_ref()))
            .collect()
    }

    /// Returns `true` if the type was not already present.
    pub fn insert(&mut self, ty: ClassName) -> bool {
        self.types.insert(ty)
    }

    pub fn contains(&self, ty: &ClassName) -> bool {
        self.types.contains(ty)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassName> {
        self.types.iter()
    }

    /// In-place union; members of `other` keep their relative order.
    pub fn extend_from(&mut self, other: &TypeSet) {
        self.types.extend(other.types.iter().cloned());
    }

    #[must_use]
    pub fn union(&self, other: &TypeSet) -> TypeSet {
        let mut result = self.clone();
        result.extend_from(other);
        result
    }

    /// Members of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &TypeSet) -> TypeSet {
        self.types
            .iter()
            .filter(|ty| !other.contains(ty))
            .cloned()
            .collect()
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&ClassName) -> bool) {
        self.types.retain(|ty| keep(ty));
    }
}

impl FromIterator<ClassName> for TypeSet {
    fn from_iter<I: IntoIterator<Item = ClassName>>(iter: I) -> Self {
        let mut set = TypeSet::new();
        for ty in iter {
            set.insert(ty);
        }
        set
    }
}

impl Extend<ClassName> for TypeSet {
    fn extend<I: IntoIterator<Item = ClassName>>(&mut self, iter: I) {
        self.types.extend(iter);
    }
}

impl IntoIterator for TypeSet {
    type Item = ClassName;
    type IntoIter = indexmap::set::IntoIter<ClassName>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.into_iter()
    }
}

impl<'a> IntoIterator for &'a TypeSet {
    type Item = &'a ClassName;
    type IntoIter = indexmap::set::Iter<'a, ClassName>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}
