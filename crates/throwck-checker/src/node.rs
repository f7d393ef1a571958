//! The node protocol between the host's tree walk and the checker.
//!
//! The host visits its syntax tree in document order and hands the checker
//! one [`Node`] per relevant construct. Function bodies and try bodies are
//! bracketed by explicit start/end nodes, so the checker never needs to look
//! back into host-owned tree storage.

use throwck_solver::{ClassName, Type, TypeSet};

/// What kind of callable a function body belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FunctionKind {
    Function { name: String },
    Method { class: ClassName, name: String },
    /// Closures and arrow functions.
    Closure,
}

/// One raw `@throws TypeName [reason]` tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThrowsTag {
    pub type_name: String,
    pub description: Option<String>,
}

impl ThrowsTag {
    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDecl {
    pub kind: FunctionKind,
    /// Tags in the order they were written.
    pub throws: Vec<ThrowsTag>,
}

impl FunctionDecl {
    pub fn function(name: &str) -> Self {
        Self {
            kind: FunctionKind::Function {
                name: name.to_string(),
            },
            throws: Vec::new(),
        }
    }

    pub fn method(class: &str, name: &str) -> Self {
        Self {
            kind: FunctionKind::Method {
                class: ClassName::new(class),
                name: name.to_string(),
            },
            throws: Vec::new(),
        }
    }

    pub fn closure() -> Self {
        Self {
            kind: FunctionKind::Closure,
            throws: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_throws(mut self, type_name: &str) -> Self {
        self.throws.push(ThrowsTag {
            type_name: type_name.to_string(),
            description: None,
        });
        self
    }

    #[must_use]
    pub fn with_described_throws(mut self, type_name: &str, description: &str) -> Self {
        self.throws.push(ThrowsTag {
            type_name: type_name.to_string(),
            description: Some(description.to_string()),
        });
        self
    }

    /// The declared-throws set: every tag's type, canonicalized, first
    /// occurrence wins.
    pub fn declared_throws(&self) -> TypeSet {
        TypeSet::from_names(self.throws.iter().map(|tag| tag.type_name.as_str()))
    }
}

/// One catch clause: `catch (A | B $e)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatchClause {
    pub types: Vec<ClassName>,
    pub line: u32,
}

impl CatchClause {
    pub fn new(types: &[&str], line: u32) -> Self {
        Self {
            types: types.iter().map(|name| ClassName::new(name)).collect(),
            line,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TryStatement {
    pub catches: Vec<CatchClause>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DivisionOp {
    Divide,
    Modulo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftOp {
    Left,
    Right,
}

/// The closed set of constructs that can raise an exception, with the
/// statically known types of the operands that matter.
#[derive(Clone, Debug, PartialEq)]
pub enum ThrowingConstruct {
    /// `throw <value>`
    Throw { value: Type },
    /// `<receiver>-><method>(...)`
    MethodCall { receiver: Type, method: String },
    /// `<class>::<method>(...)`, with `self`/`static`/`parent` already resolved.
    StaticCall { class: ClassName, method: String },
    /// `new <class>(...)`
    New { class: ClassName },
    Division { op: DivisionOp, divisor: Type },
    Shift { op: ShiftOp, amount: Type },
    /// `foreach (<subject> as [$key =>] $value)`
    Iteration { subject: Type, binds_key: bool },
    /// `<name>(<args>...)`
    FunctionCall { name: String, args: Vec<Type> },
}

/// One visited node, as delivered by the host walk.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    FunctionStart(FunctionDecl),
    /// Synthetic end of the innermost function body; its line is the body's
    /// terminal statement.
    FunctionEnd,
    TryStart(TryStatement),
    /// Synthetic end of the innermost try construct's protected body.
    TryBodyEnd,
    Throwing(ThrowingConstruct),
}

impl Node {
    pub fn throw(value: Type) -> Self {
        Node::Throwing(ThrowingConstruct::Throw { value })
    }

    pub fn throw_new(class: &str) -> Self {
        Node::throw(Type::object(class))
    }

    pub fn try_start(catches: Vec<CatchClause>) -> Self {
        Node::TryStart(TryStatement { catches })
    }
}
