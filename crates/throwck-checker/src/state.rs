//! The per-unit checker driver.
//!
//! `CheckerState` receives the host's node stream one node at a time, keeps
//! the scope stack in step with it and runs the verification passes at the
//! points where their inputs are complete:
//!
//! - function start: useless-annotation check
//! - throwing construct: missing-annotation and global-scope checks
//! - function end: unused-annotation check
//! - try start: dead-catch-union and unreachable-catch checks
//! - try body end: unused-catch check

use crate::context::{CheckerContext, CheckerOptions};
use crate::error::{CheckerError, ConfigError};
use crate::extensions::{FunctionThrowTypeExtension, builtin_extensions};
use crate::node::Node;
use crate::scope_stack::ScopeStack;
use crate::throw_types::ThrowTypeResolver;
use throwck_common::Diagnostic;
use throwck_solver::TypeHierarchy;
use tracing::debug;

pub struct CheckerState<'a> {
    pub ctx: CheckerContext<'a>,
    pub(crate) scopes: ScopeStack,
    pub(crate) extensions: Vec<Box<dyn FunctionThrowTypeExtension>>,
}

impl<'a> CheckerState<'a> {
    /// A checker for one compilation unit with the built-in extensions.
    pub fn new(
        hierarchy: &'a dyn TypeHierarchy,
        file_name: impl Into<String>,
        options: CheckerOptions,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            ctx: CheckerContext::new(hierarchy, file_name.into(), options)?,
            scopes: ScopeStack::new(),
            extensions: builtin_extensions(),
        })
    }

    pub fn register_extension(&mut self, extension: Box<dyn FunctionThrowTypeExtension>) {
        self.extensions.push(extension);
    }

    pub(crate) fn resolver(&self) -> ThrowTypeResolver<'_> {
        ThrowTypeResolver::new(self.ctx.hierarchy, &self.ctx.defaults, &self.extensions)
    }

    /// Feed one node of the host walk, in document order.
    #[tracing::instrument(level = "trace", skip(self, node))]
    pub fn check_node(&mut self, node: &Node, line: u32) -> Result<(), CheckerError> {
        match node {
            Node::FunctionStart(decl) => self.enter_function(decl, line),
            Node::FunctionEnd => self.exit_function(line),
            Node::TryStart(statement) => {
                self.enter_try(statement);
                Ok(())
            }
            Node::TryBodyEnd => self.exit_try_body(line),
            Node::Throwing(construct) => {
                self.check_throwing_construct(construct, line);
                Ok(())
            }
        }
    }

    /// Feed a whole unit; stops at the first contract violation.
    pub fn check_nodes<'n>(
        &mut self,
        nodes: impl IntoIterator<Item = (&'n Node, u32)>,
    ) -> Result<(), CheckerError> {
        for (node, line) in nodes {
            self.check_node(node, line)?;
        }
        Ok(())
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.ctx.diagnostics
    }

    /// End of the unit: every frame must have been closed.
    pub fn finish(self) -> Result<Vec<Diagnostic>, CheckerError> {
        if !self.scopes.is_empty() {
            return Err(CheckerError::UnclosedFrames {
                count: self.scopes.depth(),
            });
        }
        debug!(
            file = %self.ctx.file_name,
            count = self.ctx.diagnostics.len(),
            "unit checked"
        );
        Ok(self.ctx.diagnostics)
    }
}

#[cfg(test)]
#[path = "../tests/state_tests.rs"]
mod tests;
