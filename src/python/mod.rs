//! Python snippet analyzer front end.
//!
//! Parses a Python snippet into a statement tree that the diagram builders
//! walk. The parser is deliberately statement-level: it recognizes the
//! constructs the builders care about (`def`, `class`, `if`/`elif`/`else`,
//! `while`, `for`, `return`, assignments, call statements) and keeps
//! expression text verbatim, since expressions only ever end up inside node
//! labels.

pub mod ast;
pub mod parse;

pub use ast::{Expr, Stmt, Suite};
pub use parse::{ParseError, parse};
