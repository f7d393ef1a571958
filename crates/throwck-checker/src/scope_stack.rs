//! The scope stack: nesting-aware model of try regions and function bodies.
//!
//! Frames are pushed and popped in exactly the nesting order of the source.
//! A thrown type is offered to every enclosing try region from the innermost
//! outward until one catches it, or until the nearest function frame is
//! reached, where it leaves the function and is matched against that
//! function's declared throws. With no function frame on the stack the type
//! escapes into global scope.

use crate::error::{FrameKind, FrameMismatch};
use crate::node::{FunctionKind, TryStatement};
use smallvec::SmallVec;
use throwck_solver::{ClassName, Ternary, TypeHierarchy, TypeSet, catch_relation};
use tracing::trace;

/// One type of one catch clause, with its observation count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatchEntry {
    pub ty: ClassName,
    /// Throw sites in the protected body this entry may intercept.
    pub observed: u32,
    /// Already reported as unreachable or redundant.
    pub shadowed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionClause {
    pub line: u32,
    pub entries: SmallVec<[CatchEntry; 2]>,
}

/// Live state of one try construct while its protected body is walked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TryRegion {
    pub clauses: Vec<RegionClause>,
}

impl TryRegion {
    pub fn new(statement: &TryStatement) -> Self {
        let clauses = statement
            .catches
            .iter()
            .map(|clause| RegionClause {
                line: clause.line,
                entries: clause
                    .types
                    .iter()
                    .map(|ty| CatchEntry {
                        ty: ty.clone(),
                        observed: 0,
                        shadowed: false,
                    })
                    .collect(),
            })
            .collect();
        Self { clauses }
    }

    pub fn mark_shadowed(&mut self, clause: usize, entry: usize) {
        if let Some(found) = self
            .clauses
            .get_mut(clause)
            .and_then(|c| c.entries.get_mut(entry))
        {
            found.shadowed = true;
        }
    }

    /// Offer a thrown type to the clauses in declaration order. Returns
    /// `true` when some clause intercepts every value of the type; later
    /// clauses are not consulted.
    fn intercept(&mut self, hierarchy: &dyn TypeHierarchy, thrown: &ClassName) -> bool {
        for clause in &mut self.clauses {
            let mut caught = false;
            for entry in &mut clause.entries {
                match catch_relation(hierarchy, &entry.ty, thrown) {
                    Ternary::Yes => {
                        entry.observed += 1;
                        caught = true;
                    }
                    Ternary::Maybe => entry.observed += 1,
                    Ternary::No => {}
                }
            }
            if caught {
                return true;
            }
        }
        false
    }

    fn would_intercept(&self, hierarchy: &dyn TypeHierarchy, thrown: &ClassName) -> bool {
        self.clauses.iter().any(|clause| {
            clause
                .entries
                .iter()
                .any(|entry| catch_relation(hierarchy, &entry.ty, thrown) == Ternary::Yes)
        })
    }
}

/// Live state of one function body's declared-versus-used throws.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotationContext {
    pub kind: FunctionKind,
    pub declared: TypeSet,
    /// Declared types matched by some escaping throw.
    pub used: TypeSet,
    /// Escaping types are allowed without declaration.
    pub whitelisted: bool,
}

impl AnnotationContext {
    pub fn new(kind: FunctionKind, declared: TypeSet, whitelisted: bool) -> Self {
        Self {
            kind,
            declared,
            used: TypeSet::new(),
            whitelisted,
        }
    }

    /// Mark declarations matching an escaping type as used. Returns `true`
    /// when some declaration covers every value of the type.
    fn absorb(&mut self, hierarchy: &dyn TypeHierarchy, thrown: &ClassName) -> bool {
        let mut covered = false;
        for declared in self.declared.iter() {
            match catch_relation(hierarchy, declared, thrown) {
                Ternary::Yes => {
                    self.used.insert(declared.clone());
                    covered = true;
                }
                Ternary::Maybe => {
                    self.used.insert(declared.clone());
                }
                Ternary::No => {}
            }
        }
        covered
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    Try(TryRegion),
    Function(AnnotationContext),
}

impl Frame {
    pub fn kind(&self) -> FrameKind {
        match self {
            Frame::Try(_) => FrameKind::Try,
            Frame::Function(_) => FrameKind::Function,
        }
    }
}

/// Where the uncaught part of a throw ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    Function { whitelisted: bool },
    Global,
}

/// Result of recording one throw site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Residual {
    /// Types that left the innermost function (or reached global scope)
    /// without being covered by a declaration.
    pub undeclared: TypeSet,
    pub boundary: Boundary,
}

#[derive(Clone, Debug, Default)]
pub struct ScopeStack {
    frames: Vec<Frame>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn is_global_scope(&self) -> bool {
        !self
            .frames
            .iter()
            .any(|frame| matches!(frame, Frame::Function(_)))
    }

    pub fn enter_try(&mut self, region: TryRegion) {
        trace!(depth = self.frames.len(), clauses = region.clauses.len(), "enter try");
        self.frames.push(Frame::Try(region));
    }

    /// Close the innermost try body and hand back its observations.
    pub fn exit_try_body(&mut self) -> Result<TryRegion, FrameMismatch> {
        match self.frames.pop() {
            Some(Frame::Try(region)) => {
                trace!(depth = self.frames.len(), "exit try body");
                Ok(region)
            }
            other => Err(self.mismatch(FrameKind::Try, other)),
        }
    }

    pub fn enter_function(&mut self, context: AnnotationContext) {
        trace!(
            depth = self.frames.len(),
            kind = ?context.kind,
            declared = ?context.declared,
            "enter function"
        );
        self.frames.push(Frame::Function(context));
    }

    /// Close the innermost function body; the returned context carries the
    /// declared and used sets.
    pub fn exit_function(&mut self) -> Result<AnnotationContext, FrameMismatch> {
        match self.frames.pop() {
            Some(Frame::Function(context)) => {
                trace!(depth = self.frames.len(), used = ?context.used, "exit function");
                Ok(context)
            }
            other => Err(self.mismatch(FrameKind::Function, other)),
        }
    }

    /// A popped frame of the wrong kind is pushed back so the stack is left
    /// as the host last saw it.
    fn mismatch(&mut self, expected: FrameKind, popped: Option<Frame>) -> FrameMismatch {
        let found = popped.as_ref().map(Frame::kind);
        if let Some(frame) = popped {
            self.frames.push(frame);
        }
        FrameMismatch { expected, found }
    }

    /// Record one throw site. Each type walks the frames from the innermost
    /// outward; see the module docs.
    pub fn record_throw(&mut self, hierarchy: &dyn TypeHierarchy, types: &TypeSet) -> Residual {
        let boundary = self.innermost_function_boundary();
        let mut undeclared = TypeSet::new();
        for thrown in types {
            if !self.propagate(hierarchy, thrown) {
                undeclared.insert(thrown.clone());
            }
        }
        Residual {
            undeclared,
            boundary,
        }
    }

    /// Returns `true` when a try region catches the type or a declaration of
    /// the innermost function covers it.
    fn propagate(&mut self, hierarchy: &dyn TypeHierarchy, thrown: &ClassName) -> bool {
        for frame in self.frames.iter_mut().rev() {
            match frame {
                Frame::Try(region) => {
                    if region.intercept(hierarchy, thrown) {
                        trace!(%thrown, "caught by enclosing try");
                        return true;
                    }
                }
                Frame::Function(context) => {
                    let declared = context.absorb(hierarchy, thrown);
                    trace!(%thrown, declared, "escapes function");
                    return declared;
                }
            }
        }
        trace!(%thrown, "escapes into global scope");
        false
    }

    fn innermost_function_boundary(&self) -> Boundary {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| match frame {
                Frame::Function(context) => Some(Boundary::Function {
                    whitelisted: context.whitelisted,
                }),
                Frame::Try(_) => None,
            })
            .unwrap_or(Boundary::Global)
    }

    /// Whether a throw of `thrown` here would be fully intercepted by an
    /// enclosing try before leaving the innermost function. Observations are
    /// not touched.
    pub fn is_caught_ahead(&self, hierarchy: &dyn TypeHierarchy, thrown: &ClassName) -> bool {
        for frame in self.frames.iter().rev() {
            match frame {
                Frame::Try(region) => {
                    if region.would_intercept(hierarchy, thrown) {
                        return true;
                    }
                }
                Frame::Function(_) => return false,
            }
        }
        false
    }
}

#[cfg(test)]
#[path = "../tests/scope_stack_tests.rs"]
mod tests;
