//! Common types and utilities for the throwck exception checker.
//!
//! This crate provides foundational types used across all throwck crates:
//! - Diagnostic types, message templates and codes (`Diagnostic`, `format_message`)

// Diagnostics - checker findings and their message table
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, format_message};
