//! Catch clause checks.
//!
//! The dead-catch-union and unreachable-catch checks are purely structural
//! and run when the try construct is entered. The unused-catch check needs
//! the observations collected while the protected body was walked and runs
//! at the body's end marker. Entries reported by a structural check are
//! marked shadowed so that the unused-catch check stays quiet about them.

use crate::diagnostics::diagnostic_codes;
use crate::error::CheckerError;
use crate::node::TryStatement;
use crate::scope_stack::TryRegion;
use crate::state::CheckerState;
use throwck_solver::{ClassName, TypeHierarchy};

/// A structural finding about one catch entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatchFinding {
    /// The entry names the same type as an earlier entry of its clause.
    Redundant { ty: ClassName },
    /// The entry is a subtype of another entry of its clause.
    AlreadyCaughtBy { ty: ClassName, by: ClassName },
    /// An earlier clause already catches a supertype of the entry.
    Unreachable { ty: ClassName, by: ClassName },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocatedCatchFinding {
    pub clause: usize,
    pub entry: usize,
    pub line: u32,
    pub finding: CatchFinding,
}

/// Dead-catch-union findings of every multi-type clause, then
/// unreachable-catch findings, each in declaration order.
pub fn structural_catch_findings(
    hierarchy: &dyn TypeHierarchy,
    statement: &TryStatement,
) -> Vec<LocatedCatchFinding> {
    let mut findings = Vec::new();

    for (clause_index, clause) in statement.catches.iter().enumerate() {
        if clause.types.len() < 2 {
            continue;
        }
        for (index, ty) in clause.types.iter().enumerate() {
            let Some(resolved) = hierarchy.resolved_name(ty) else {
                continue;
            };
            for (other_index, other) in clause.types.iter().enumerate() {
                if other_index == index {
                    continue;
                }
                let Some(other_resolved) = hierarchy.resolved_name(other) else {
                    continue;
                };
                let finding = if resolved == other_resolved {
                    // Reported once, on the later repeat.
                    if index < other_index {
                        continue;
                    }
                    CatchFinding::Redundant { ty: ty.clone() }
                } else if hierarchy.is_subclass_of(&resolved, &other_resolved) {
                    CatchFinding::AlreadyCaughtBy {
                        ty: ty.clone(),
                        by: other.clone(),
                    }
                } else {
                    continue;
                };
                findings.push(LocatedCatchFinding {
                    clause: clause_index,
                    entry: index,
                    line: clause.line,
                    finding,
                });
                break;
            }
        }
    }

    if statement.catches.len() > 1 {
        let mut caught: Vec<ClassName> = Vec::new();
        for (clause_index, clause) in statement.catches.iter().enumerate() {
            let mut declared_here = Vec::with_capacity(clause.types.len());
            for (index, ty) in clause.types.iter().enumerate() {
                let Some(resolved) = hierarchy.resolved_name(ty) else {
                    continue;
                };
                if let Some(by) = caught
                    .iter()
                    .find(|earlier| hierarchy.is_same_or_subclass_of(&resolved, earlier))
                {
                    findings.push(LocatedCatchFinding {
                        clause: clause_index,
                        entry: index,
                        line: clause.line,
                        finding: CatchFinding::Unreachable {
                            ty: ty.clone(),
                            by: by.clone(),
                        },
                    });
                }
                declared_here.push(resolved);
            }
            caught.extend(declared_here);
        }
    }

    findings
}

impl<'a> CheckerState<'a> {
    pub(crate) fn enter_try(&mut self, statement: &TryStatement) {
        let mut region = TryRegion::new(statement);
        for located in structural_catch_findings(self.ctx.hierarchy, statement) {
            region.mark_shadowed(located.clause, located.entry);
            match &located.finding {
                CatchFinding::Redundant { ty } => self.error_at_line_msg(
                    located.line,
                    diagnostic_codes::CATCH_TYPE_IS_REDUNDANT,
                    &[ty.as_str()],
                ),
                CatchFinding::AlreadyCaughtBy { ty, by } => self.error_at_line_msg(
                    located.line,
                    diagnostic_codes::CATCH_TYPE_ALREADY_CAUGHT_BY,
                    &[ty.as_str(), by.as_str()],
                ),
                CatchFinding::Unreachable { ty, by } => self.error_at_line_msg(
                    located.line,
                    diagnostic_codes::CATCH_IS_UNREACHABLE,
                    &[ty.as_str(), by.as_str()],
                ),
            }
        }
        self.scopes.enter_try(region);
    }

    pub(crate) fn exit_try_body(&mut self, line: u32) -> Result<(), CheckerError> {
        let region = self
            .scopes
            .exit_try_body()
            .map_err(|source| CheckerError::FrameMismatch { line, source })?;

        let report_unchecked = self.ctx.options.report_unused_catches_of_unchecked_exceptions;
        for clause in &region.clauses {
            for entry in &clause.entries {
                if entry.observed > 0 || entry.shadowed {
                    continue;
                }
                let Some(resolved) = self.ctx.hierarchy.resolved_name(&entry.ty) else {
                    continue;
                };
                if !report_unchecked && !self.ctx.policy.is_checked(self.ctx.hierarchy, &resolved) {
                    continue;
                }
                self.error_at_line_msg(
                    clause.line,
                    diagnostic_codes::CATCH_TYPE_NEVER_THROWN_IN_TRY,
                    &[entry.ty.as_str()],
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/catch_checker_tests.rs"]
mod tests;
