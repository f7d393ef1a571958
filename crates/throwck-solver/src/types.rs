//! Class names and statically inferred value types.

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// A canonicalized class name.
///
/// Canonicalization strips the leading namespace separator, so `\Foo\Bar`
/// and `Foo\Bar` are the same name. Names are cheap to clone and compare.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ClassName(Arc<str>);

/// Exception types are named classes in the subtype lattice.
pub type ExceptionType = ClassName;

impl ClassName {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name.trim().trim_start_matches('\\')))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lookup key used by case-insensitive class resolution.
    pub fn lookup_key(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl From<&str> for ClassName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<&String> for ClassName {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

/// The statically inferred type of an operand, as reported by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    /// Nothing is known about the value.
    Mixed,
    Never,
    Null,
    Bool,
    BoolConstant(bool),
    String,
    Float,
    Array,
    /// An integer with no known constant value.
    Int,
    IntConstant(i64),
    /// Inclusive integer range, `None` meaning unbounded on that side.
    IntRange { min: Option<i64>, max: Option<i64> },
    /// An instance of the named class or interface.
    Object(ClassName),
    Union(Vec<Type>),
}

impl Type {
    pub fn object(name: &str) -> Self {
        Type::Object(ClassName::new(name))
    }

    pub fn union_of_ints(values: &[i64]) -> Self {
        Type::Union(values.iter().copied().map(Type::IntConstant).collect())
    }

    /// Visit every non-union member, flattening nested unions.
    pub fn for_each_member(&self, f: &mut impl FnMut(&Type)) {
        match self {
            Type::Union(members) => {
                for member in members {
                    member.for_each_member(f);
                }
            }
            other => f(other),
        }
    }

    /// Named object types this value may be an instance of, in member order.
    pub fn class_names(&self) -> Vec<ClassName> {
        let mut names: Vec<ClassName> = Vec::new();
        self.for_each_member(&mut |member| {
            if let Type::Object(name) = member
                && !names.contains(name)
            {
                names.push(name.clone());
            }
        });
        names
    }

    /// The statically known integer values of this operand.
    pub fn int_values(&self) -> IntValues {
        let mut values = IntValues::default();
        self.for_each_member(&mut |member| match member {
            Type::Never => {}
            Type::IntConstant(value) => {
                if !values.constants.contains(value) {
                    values.constants.push(*value);
                }
            }
            Type::IntRange { min, max } => values.ranges.push((*min, *max)),
            _ => values.residual = true,
        });
        values
    }
}

/// The value set of an integer operand: known constants, known ranges, and
/// whether any non-constant alternative remains.
///
/// Every query answers "may the operand take such a value"; a residual
/// alternative may take any value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntValues {
    pub constants: SmallVec<[i64; 4]>,
    pub ranges: SmallVec<[(Option<i64>, Option<i64>); 2]>,
    pub residual: bool,
}

impl IntValues {
    pub fn may_be(&self, value: i64) -> bool {
        self.residual
            || self.constants.contains(&value)
            || self
                .ranges
                .iter()
                .any(|&(min, max)| min.is_none_or(|m| m <= value) && max.is_none_or(|m| value <= m))
    }

    pub fn may_be_negative(&self) -> bool {
        self.residual
            || self.constants.iter().any(|&v| v < 0)
            || self.ranges.iter().any(|&(min, _)| min.is_none_or(|m| m < 0))
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
