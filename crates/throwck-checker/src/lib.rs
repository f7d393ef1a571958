//! Exception-flow checker.
//!
//! Verifies declared `@throws` contracts against how exceptions actually
//! propagate through try/catch regions and function bodies. The host walks
//! its syntax tree and feeds [`CheckerState`] one [`Node`] per relevant
//! construct; the checker answers with diagnostics.
//!
//! This crate is organized into several modules:
//! - `node` - the host node protocol
//! - `context` - `CheckerOptions` and `CheckerContext` shared state
//! - `policy` - checked-exception policy
//! - `default_throws` / `whitelist` - configured callee throws and exempt methods
//! - `throw_types` - throw-type inference per construct kind
//! - `extensions` - argument-dependent throw types of standard functions
//! - `scope_stack` - nesting-aware try region and function frames
//! - `state` - `CheckerState`, the per-unit driver
//! - `throws_checker`, `useless_throws`, `catch_checker` - verification passes

pub mod catch_checker;
pub mod context;
pub mod default_throws;
pub mod error;
mod error_reporter;
pub mod extensions;
pub mod node;
pub mod policy;
pub mod scope_stack;
pub mod state;
pub mod throw_types;
mod throws_checker;
pub mod useless_throws;
pub mod well_known;
pub mod whitelist;

pub mod diagnostics {
    pub use throwck_common::diagnostics::*;
}

pub use context::{CheckerContext, CheckerOptions};
pub use error::{CheckerError, ConfigError, FrameKind, FrameMismatch, UnsupportedCallShape};
pub use extensions::{
    FunctionCallSite, FunctionThrowTypeExtension, IntdivThrowTypeExtension,
    JsonThrowOnErrorExtension,
};
pub use node::{
    CatchClause, DivisionOp, FunctionDecl, FunctionKind, Node, ShiftOp, ThrowingConstruct,
    ThrowsTag, TryStatement,
};
pub use policy::CheckedExceptionPolicy;
pub use state::CheckerState;

#[cfg(test)]
#[path = "../tests/test_fixtures.rs"]
mod test_fixtures;
