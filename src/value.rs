//! Runtime value model and the AST-to-value reader.
//!
//! Mirrors the tagged-union `lval` of the original interpreter, but as a
//! proper Rust enum: no manual tag field, no union, and deep copies are
//! ordinary `Clone` impls instead of a hand-rolled `lval_copy`.

use std::fmt;
use std::rc::Rc;

use crate::env::Env;
use crate::parse::AstNode;
use crate::source::SourceContext;
use crate::string_interner::{self, InternedSymbol};

/// A builtin's native implementation.
pub type BuiltinFn = fn(&Env, Vec<Value>) -> Value;

#[derive(Clone)]
pub enum FunctionKind {
    Builtin {
        name: InternedSymbol,
        func: BuiltinFn,
    },
    UserDefined {
        /// Raw formal-parameter symbols, in order, exactly as written —
        /// including a literal `&` marking a variadic tail if present.
        /// [`crate::eval::call`] is what interprets `&`, at call time, so a
        /// lambda with a malformed `&` placement is a perfectly constructible
        /// value that only errors if and when it is actually called.
        formals: Vec<InternedSymbol>,
        body: Rc<Value>,
        /// The environment captured at definition time (the closure).
        env: Env,
    },
}

/// A callable value: either a native builtin or a user-defined lambda.
///
/// Partial application of a `UserDefined` function does not need a separate
/// "already bound" list: [`crate::eval::call`] binds the supplied arguments
/// straight into a child of the closure environment and hands back a new
/// `LispFunction` whose `formals` list has shrunk accordingly.
#[derive(Clone)]
pub struct LispFunction {
    pub kind: FunctionKind,
}

impl LispFunction {
    /// Total number of formals this function expects before the variadic
    /// tail (if any) starts absorbing the rest.
    pub fn required_arity(&self) -> usize {
        match &self.kind {
            FunctionKind::Builtin { .. } => usize::MAX,
            FunctionKind::UserDefined { formals, .. } => formals.len(),
        }
    }

    pub fn name(&self) -> String {
        match &self.kind {
            FunctionKind::Builtin { name, .. } => string_interner::resolve(*name),
            FunctionKind::UserDefined { .. } => "\\".to_string(),
        }
    }
}

#[derive(Clone)]
pub enum Value {
    Integer(i64),
    String(Rc<str>),
    Symbol(InternedSymbol),
    Error {
        message: Rc<str>,
        ctx: Option<SourceContext>,
    },
    SExpr(Vec<Value>),
    QExpr(Vec<Value>),
    Function(Rc<LispFunction>),
}

impl Value {
    pub fn error(message: impl Into<Rc<str>>) -> Self {
        Value::Error {
            message: message.into(),
            ctx: None,
        }
    }

    pub fn error_at(message: impl Into<Rc<str>>, ctx: Option<SourceContext>) -> Self {
        Value::Error {
            message: message.into(),
            ctx,
        }
    }

    pub fn symbol(name: &str) -> Self {
        Value::Symbol(string_interner::intern(name))
    }

    pub fn builtin(name: &str, func: BuiltinFn) -> Self {
        Value::Function(Rc::new(LispFunction {
            kind: FunctionKind::Builtin {
                name: string_interner::intern(name),
                func,
            },
        }))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error { .. })
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Number",
            Value::String(_) => "String",
            Value::Symbol(_) => "Symbol",
            Value::Error { .. } => "Error",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
            Value::Function(_) => "Function",
        }
    }

    pub fn as_children(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(c) | Value::QExpr(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Symbol(s) => write!(f, "{}", string_interner::resolve(*s)),
            Value::Error { message, .. } => write!(f, "Error: {message}"),
            Value::SExpr(children) => write_bracketed(f, "(", ")", children),
            Value::QExpr(children) => write_bracketed(f, "{", "}", children),
            Value::Function(func) => match &func.kind {
                FunctionKind::Builtin { .. } => write!(f, "<builtin>"),
                FunctionKind::UserDefined { formals, body, .. } => {
                    write!(f, "(lambda {{")?;
                    for (i, formal) in formals.iter().enumerate() {
                        if i > 0 {
                            write!(f, " ")?;
                        }
                        write!(f, "{}", string_interner::resolve(*formal))?;
                    }
                    write!(f, "}} {body})")
                }
            },
        }
    }
}

fn write_bracketed(f: &mut fmt::Formatter<'_>, open: &str, close: &str, children: &[Value]) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{child}")?;
    }
    write!(f, "{close}")
}

/// Convert an [`AstNode`] into a runtime [`Value`] tree: numbers become
/// `Integer`s (or an `Error` if the lexed text isn't a valid integer —
/// decimal points survive tokenizing but are rejected here), string text is
/// stored verbatim (no escape-sequence interpretation — the reader copies
/// the token text as-is, same as the original), symbols are interned, and
/// `SExpr`/`QExpr` nodes recurse over their children.
pub fn read(node: &AstNode) -> Value {
    match node {
        AstNode::Number { text, ctx } => match text.parse::<i64>() {
            Ok(n) => Value::Integer(n),
            Err(_) => Value::error_at(format!("invalid number '{text}'"), ctx.clone()),
        },
        AstNode::String { text, .. } => Value::String(Rc::from(text.as_str())),
        AstNode::Symbol { text, .. } => Value::symbol(text),
        AstNode::Error { message, ctx } => Value::error_at(message.clone(), ctx.clone()),
        AstNode::SExpr { children, .. } => Value::SExpr(children.iter().map(read).collect()),
        AstNode::QExpr { children, .. } => Value::QExpr(children.iter().map(read).collect()),
    }
}
