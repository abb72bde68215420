//! Statement tree for parsed Python snippets.
//!
//! A closed set of statement kinds; anything the builders have no use for
//! collapses into [`Stmt::Other`], which every walk treats as pass-through.
//! Expression text is stored in source form (trimmed, with comments removed),
//! which is exactly the rendered form the builders embed in labels.

/// A parsed module body: top-level statements in source order.
pub type Suite = Vec<Stmt>;

/// A single statement.
#[derive(Debug, Clone)]
pub enum Stmt {
    FunctionDef(FunctionDef),
    ClassDef(ClassDef),
    If(If),
    While(While),
    For(For),
    Return(Return),
    Assign(Assign),
    /// An expression in statement position, e.g. a bare call.
    Expr(Expr),
    /// Any statement kind the builders ignore (`import`, `pass`, `try`, ...).
    Other,
}

/// `def name(params):` and its body.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    pub name: String,
    /// Parameter names in declaration order, defaults and annotations dropped.
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
}

/// `class Name:` / `class Name(bases):` and its body.
#[derive(Debug, Clone)]
pub struct ClassDef {
    pub name: String,
    pub body: Vec<Stmt>,
}

/// `if test:` with its true branch and false branch. An `elif` chain parses
/// as a nested `If` as the sole statement of `orelse`.
#[derive(Debug, Clone)]
pub struct If {
    pub test: String,
    pub body: Vec<Stmt>,
    pub orelse: Vec<Stmt>,
}

/// `while test:` loop. A trailing `else:` clause is consumed but not kept —
/// no builder inspects it.
#[derive(Debug, Clone)]
pub struct While {
    pub test: String,
    pub body: Vec<Stmt>,
}

/// `for target in iter:` loop.
#[derive(Debug, Clone)]
pub struct For {
    pub target: String,
    pub iter: String,
    pub body: Vec<Stmt>,
}

/// `return` with an optional value expression.
#[derive(Debug, Clone)]
pub struct Return {
    pub value: Option<String>,
}

/// Plain assignment `a = value`, possibly chained (`a = b = value`).
/// Augmented (`+=`) and annotated (`x: int = 1`) forms do not qualify and
/// stay opaque expression text.
#[derive(Debug, Clone)]
pub struct Assign {
    pub targets: Vec<String>,
    pub value: String,
}

/// An expression in statement position.
#[derive(Debug, Clone)]
pub enum Expr {
    Call(Call),
    Raw(String),
}

/// A call expression: the callee text and the full rendered call.
#[derive(Debug, Clone)]
pub struct Call {
    /// Text of the called target, e.g. `b` or `obj.method`.
    pub func: String,
    /// Full call text, e.g. `obj.method(1, 2)`.
    pub text: String,
}
