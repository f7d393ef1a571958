//! Type hierarchy oracle and static value types.
//!
//! The checker never inspects host syntax trees or reflection data directly.
//! Everything it needs to know about classes, methods and functions goes
//! through the [`TypeHierarchy`] trait, and everything it needs to know about
//! an operand's statically inferred value goes through [`Type`].
//!
//! - `types` - `ClassName`, static value `Type`, integer value sets
//! - `type_set` - ordered, deduplicated sets of exception types
//! - `hierarchy` - the `TypeHierarchy` oracle trait and reflection records
//! - `registry` - an in-memory `TypeHierarchy` with the built-in throwables
//! - `relation` - catch/subtype ternary relation and deterministic ordering

pub mod hierarchy;
pub mod registry;
pub mod relation;
pub mod type_set;
pub mod types;

pub use hierarchy::{ClassInfo, ClassKind, FunctionInfo, MethodInfo, TypeHierarchy};
pub use registry::ClassRegistry;
pub use relation::{Ternary, catch_relation, compare_supertypes_first};
pub use type_set::TypeSet;
pub use types::{ClassName, ExceptionType, IntValues, Type};
