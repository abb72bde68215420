//! State machine builder: functions become states, conditionals fork into
//! `_T`/`_F` substates.
//!
//! Unlike the flowchart walk there is no "last node" threading — every
//! nested statement branches from the state it was entered under, and forked
//! branches never re-merge. That asymmetry is intentional.

use crate::python::ast::Stmt;
use crate::sanitize::{sanitize_ident, sanitize_label};

/// Build the `stateDiagram-v2` diagram for a parsed snippet.
#[must_use]
pub fn build(tree: &[Stmt]) -> String {
    let mut lines = vec!["stateDiagram-v2".to_owned(), "[*] --> Start".to_owned()];
    for stmt in tree {
        walk(stmt, "Start", &mut lines);
    }
    lines.push("Start --> [*]".to_owned());
    lines.join("\n")
}

fn walk(stmt: &Stmt, current: &str, lines: &mut Vec<String>) {
    match stmt {
        Stmt::FunctionDef(def) => {
            let state = sanitize_ident(&def.name);
            lines.push(format!("state {state}"));
            lines.push(format!("{current} --> {state}: enter {state}"));
            for stmt in &def.body {
                walk(stmt, &state, lines);
            }
        }
        Stmt::If(cond) => {
            let label = sanitize_label(&cond.test);
            let true_state = format!("{current}_T");
            let false_state = format!("{current}_F");
            lines.push(format!("state {true_state}"));
            lines.push(format!("state {false_state}"));
            lines.push(format!("{current} --> {true_state}: {label}"));
            lines.push(format!("{current} --> {false_state}: not {label}"));
            for stmt in &cond.body {
                walk(stmt, &true_state, lines);
            }
            for stmt in &cond.orelse {
                walk(stmt, &false_state, lines);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
