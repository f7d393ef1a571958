//! `@throws` contract checks: missing declarations at throw sites, checked
//! throws escaping into global scope, and unused declarations at the end of
//! each function body.

use crate::diagnostics::diagnostic_codes;
use crate::error::CheckerError;
use crate::node::{FunctionDecl, FunctionKind, ThrowingConstruct};
use crate::scope_stack::{AnnotationContext, Boundary};
use crate::state::CheckerState;
use throwck_solver::{ClassName, TypeSet};
use tracing::trace;

impl<'a> CheckerState<'a> {
    pub(crate) fn enter_function(
        &mut self,
        decl: &FunctionDecl,
        line: u32,
    ) -> Result<(), CheckerError> {
        let whitelisted = match &decl.kind {
            FunctionKind::Method { class, name } => {
                if let Some(info) = self.ctx.hierarchy.class(class)
                    && info.own_method(name).is_none()
                {
                    return Err(CheckerError::MethodNotMaterialized {
                        class: class.to_string(),
                        method: name.clone(),
                    });
                }
                self.ctx
                    .whitelist
                    .is_whitelisted(self.ctx.hierarchy, class, name)
            }
            FunctionKind::Function { .. } | FunctionKind::Closure => false,
        };

        self.check_useless_throws(decl, line);

        self.scopes.enter_function(AnnotationContext::new(
            decl.kind.clone(),
            decl.declared_throws(),
            whitelisted,
        ));
        Ok(())
    }

    pub(crate) fn exit_function(&mut self, line: u32) -> Result<(), CheckerError> {
        let context = self
            .scopes
            .exit_function()
            .map_err(|source| CheckerError::FrameMismatch { line, source })?;
        self.check_unused_throws(&context, line);
        Ok(())
    }

    pub(crate) fn check_throwing_construct(&mut self, construct: &ThrowingConstruct, line: u32) {
        let types = self.resolver().infer(construct);
        if types.is_empty() {
            return;
        }

        let residual = self.scopes.record_throw(self.ctx.hierarchy, &types);
        let escaping = self
            .ctx
            .policy
            .filter_checked(self.ctx.hierarchy, &residual.undeclared);

        match residual.boundary {
            Boundary::Function { whitelisted: true } => {}
            Boundary::Function { whitelisted: false } => {
                for ty in &escaping {
                    self.error_at_line_msg(
                        line,
                        diagnostic_codes::MISSING_THROWS_ANNOTATION,
                        &[ty.as_str()],
                    );
                }
            }
            Boundary::Global => {
                if !self.ctx.options.report_checked_throws_in_global_scope {
                    trace!(?escaping, "global escapes allowed");
                    return;
                }
                for ty in &escaping {
                    self.error_at_line_msg(
                        line,
                        diagnostic_codes::CHECKED_EXCEPTION_IN_GLOBAL_SCOPE,
                        &[ty.as_str()],
                    );
                }
            }
        }
    }

    fn check_unused_throws(&mut self, context: &AnnotationContext, line: u32) {
        if context.whitelisted || context.declared.is_empty() {
            return;
        }
        if !self.ctx.options.report_unused_checked_throws_in_subtypes
            && let FunctionKind::Method { class, name } = &context.kind
            && self.implements_abstract_method(class, name)
        {
            trace!(%class, name, "unused throws not reported in subtype");
            return;
        }

        let hierarchy = self.ctx.hierarchy;
        let baseline = self.default_throws_baseline(&context.kind);
        let mut unused = context.declared.difference(&context.used);
        unused.retain(|ty| !baseline.iter().any(|default| hierarchy.is_same_class(ty, default)));
        let unused = self.ctx.policy.filter_checked(hierarchy, &unused);
        for ty in &unused {
            self.error_at_line_msg(
                line,
                diagnostic_codes::UNUSED_THROWS_ANNOTATION,
                &[ty.as_str()],
            );
        }
    }

    /// Configured default throw types of the function itself.
    fn default_throws_baseline(&self, kind: &FunctionKind) -> TypeSet {
        let defaults = match kind {
            FunctionKind::Method { class, name } => {
                self.ctx
                    .defaults
                    .method_throw_types(self.ctx.hierarchy, class, name)
            }
            FunctionKind::Function { name } => self.ctx.defaults.function_throw_types(name),
            FunctionKind::Closure => None,
        };
        defaults.unwrap_or_default()
    }

    /// Whether `class::method` implements a method an interface or abstract
    /// supertype declares.
    fn implements_abstract_method(&self, class: &ClassName, method: &str) -> bool {
        self.ctx
            .hierarchy
            .ancestors(class)
            .iter()
            .filter_map(|ancestor| self.ctx.hierarchy.class(ancestor))
            .any(|info| {
                info.own_method(method)
                    .is_some_and(|found| found.is_abstract || info.is_interface())
            })
    }
}

