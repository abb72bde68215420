//! Sequence diagram builder: top-level functions as lifelines, their direct
//! call statements as messages.

use crate::python::ast::{Expr, Stmt};
use crate::sanitize::sanitize_ident;

/// Build the `sequenceDiagram` for a parsed snippet.
///
/// Only top-level `def`s are scanned, and only their direct statements —
/// calls inside nested blocks are deliberately out of frame. Participants
/// are declared once each, in first-encounter order; messages repeat, one
/// per call site.
#[must_use]
pub fn build(tree: &[Stmt]) -> String {
    let mut lifelines: Vec<String> = Vec::new();
    let mut messages: Vec<(String, String)> = Vec::new();

    for stmt in tree {
        let Stmt::FunctionDef(def) = stmt else { continue };
        let caller = sanitize_ident(&def.name);
        register(&mut lifelines, &caller);
        for stmt in &def.body {
            if let Stmt::Expr(Expr::Call(call)) = stmt {
                let callee = sanitize_ident(&call.func);
                register(&mut lifelines, &callee);
                messages.push((caller.clone(), callee));
            }
        }
    }

    let mut lines = vec!["sequenceDiagram".to_owned()];
    for lifeline in &lifelines {
        lines.push(format!("participant {lifeline}"));
    }
    for (caller, callee) in &messages {
        lines.push(format!("{caller} ->> {callee}: call"));
    }
    lines.join("\n")
}

fn register(lifelines: &mut Vec<String>, name: &str) {
    if !lifelines.iter().any(|l| l == name) {
        lifelines.push(name.to_owned());
    }
}

#[cfg(test)]
#[path = "sequence_test.rs"]
mod tests;
