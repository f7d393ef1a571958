//! Useless `@throws` check.
//!
//! Annotation-only: a tag is useless when it repeats an earlier tag, or when
//! it names a subtype of another tag without saying anything about it. A
//! subtype tag with a description documents a specific failure and is kept.

use crate::diagnostics::diagnostic_codes;
use crate::node::FunctionDecl;
use crate::state::CheckerState;
use throwck_solver::relation::compare_supertypes_first;
use throwck_solver::{ClassName, TypeHierarchy};

/// Tags reported useless, in report order.
pub fn useless_throws(hierarchy: &dyn TypeHierarchy, decl: &FunctionDecl) -> Vec<ClassName> {
    let mut tags: Vec<(ClassName, bool)> = decl
        .throws
        .iter()
        .map(|tag| (ClassName::new(&tag.type_name), tag.has_description()))
        .collect();
    // Stable: among repeats of one type the first written tag is the useful one.
    tags.sort_by(|(a, _), (b, _)| compare_supertypes_first(hierarchy, a, b));

    let mut useful: Vec<ClassName> = Vec::with_capacity(tags.len());
    let mut useless = Vec::new();
    for (ty, described) in tags {
        let repeated = useful.iter().any(|seen| hierarchy.is_same_class(seen, &ty));
        let restated = !described && useful.iter().any(|seen| hierarchy.is_subclass_of(&ty, seen));
        if repeated || restated {
            useless.push(ty);
        } else {
            useful.push(ty);
        }
    }
    useless
}

impl<'a> CheckerState<'a> {
    pub(crate) fn check_useless_throws(&mut self, decl: &FunctionDecl, line: u32) {
        if decl.throws.len() < 2 {
            return;
        }
        for ty in useless_throws(self.ctx.hierarchy, decl) {
            self.error_at_line_msg(
                line,
                diagnostic_codes::USELESS_THROWS_ANNOTATION,
                &[ty.as_str()],
            );
        }
    }
}

#[cfg(test)]
#[path = "../tests/useless_throws_tests.rs"]
mod tests;
