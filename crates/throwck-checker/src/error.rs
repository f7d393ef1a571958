//! Checker error types.
//!
//! Only host-contract violations and configuration problems are errors.
//! Unresolved symbols and unsupported call shapes are recovered where they
//! occur and never reach the host.

use std::fmt;
use thiserror::Error;

/// The two kinds of frames on the scope stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameKind {
    Try,
    Function,
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameKind::Try => f.write_str("try body"),
            FrameKind::Function => f.write_str("function body"),
        }
    }
}

/// An end marker did not match the innermost open frame.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("end of {expected} does not match the innermost frame ({})", describe_found(.found))]
pub struct FrameMismatch {
    pub expected: FrameKind,
    /// `None` when the stack was empty.
    pub found: Option<FrameKind>,
}

fn describe_found(found: &Option<FrameKind>) -> String {
    match found {
        Some(kind) => kind.to_string(),
        None => "no open frame".to_string(),
    }
}

/// Host-contract violations. Any of these means the node stream broke the
/// nesting invariant and the unit's results cannot be trusted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckerError {
    #[error("line {line}: {source}")]
    FrameMismatch {
        line: u32,
        #[source]
        source: FrameMismatch,
    },

    #[error("{count} frame(s) still open at the end of the unit")]
    UnclosedFrames { count: usize },

    #[error("method {class}::{method} was entered but its class does not declare it")]
    MethodNotMaterialized { class: String, method: String },
}

/// Invalid checker configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("checkedExceptions and uncheckedExceptions cannot both be set")]
    ConflictingExceptionRoots,

    #[error("invalid methodWhitelist pattern for {class}")]
    InvalidWhitelistPattern {
        class: String,
        #[source]
        source: regex::Error,
    },

    #[error("malformed checker configuration")]
    Json(#[from] serde_json::Error),
}

/// A dynamic throw-type extension could not handle a call's shape; the
/// caller falls back to the callee's declared throw types.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{function}() called without argument #{position}")]
pub struct UnsupportedCallShape {
    pub function: String,
    pub position: usize,
}
