//! Flowchart builder: control-flow walk over the statement tree.
//!
//! The walk threads a "previous node" reference through the tree and returns
//! the terminal node of whatever it emitted, so siblings chain naturally.
//! Conditionals re-converge through a synthesized merge node; loops close
//! with a back-edge to their own header and continue from it.

use std::fmt;

use crate::python::ast::{Expr, Stmt};
use crate::sanitize::sanitize_label;

/// Build the `flowchart TD` diagram for a parsed snippet.
#[must_use]
pub fn build(tree: &[Stmt]) -> String {
    let mut chart = Flowchart::new();

    let start = chart.node("Start", Shape::Terminator);
    let mut last = start;
    for stmt in tree {
        last = chart.walk(stmt, last);
    }
    let end = chart.node("End", Shape::Terminator);
    chart.edge(last, end);

    chart.lines.join("\n")
}

/// Node identifier, unique within one build. Renders as `N<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

#[derive(Debug, Clone, Copy)]
enum Shape {
    Process,
    Decision,
    Io,
    Terminator,
}

struct Flowchart {
    lines: Vec<String>,
    counter: u32,
}

impl Flowchart {
    fn new() -> Self {
        Self { lines: vec!["flowchart TD".to_owned()], counter: 0 }
    }

    /// Allocate the next node id and emit its declaration line.
    fn node(&mut self, label: &str, shape: Shape) -> NodeId {
        self.counter += 1;
        let id = NodeId(self.counter);
        let label = sanitize_label(label);
        let decl = match shape {
            Shape::Process => format!("{id}[{label}]"),
            Shape::Decision => format!("{id}{{{label}}}"),
            Shape::Io => format!("{id}[/ {label} /]"),
            Shape::Terminator => format!("{id}(({label}))"),
        };
        self.lines.push(decl);
        id
    }

    fn edge(&mut self, from: NodeId, to: NodeId) {
        self.lines.push(format!("{from} --> {to}"));
    }

    /// Emit nodes and edges for one statement chained after `prev`, and
    /// return the node subsequent statements should chain from.
    fn walk(&mut self, stmt: &Stmt, prev: NodeId) -> NodeId {
        match stmt {
            Stmt::FunctionDef(def) => {
                let func = self.node(&format!("Function: {}", def.name), Shape::Terminator);
                self.edge(prev, func);
                let mut last = func;
                for stmt in &def.body {
                    last = self.walk(stmt, last);
                }
                last
            }
            Stmt::If(cond) => {
                let decision = self.node(&format!("If {}", cond.test), Shape::Decision);
                self.edge(prev, decision);

                let mut last_true = decision;
                for stmt in &cond.body {
                    last_true = self.walk(stmt, last_true);
                }
                let mut last_false = decision;
                for stmt in &cond.orelse {
                    last_false = self.walk(stmt, last_false);
                }

                let merge = self.node("Merge", Shape::Process);
                self.edge(last_true, merge);
                self.edge(last_false, merge);
                merge
            }
            Stmt::While(loop_) => {
                let header = format!("Loop: while {}", loop_.test);
                self.walk_loop(&header, &loop_.body, prev)
            }
            Stmt::For(loop_) => {
                let header = format!("Loop: for {} in {}", loop_.target, loop_.iter);
                self.walk_loop(&header, &loop_.body, prev)
            }
            Stmt::Return(ret) => {
                let label = format!("Return: {}", ret.value.as_deref().unwrap_or(""));
                let node = self.node(&label, Shape::Io);
                self.edge(prev, node);
                node
            }
            Stmt::Assign(assign) => {
                let stmt_text = format!("{} = {}", assign.targets.join(" = "), assign.value);
                let node = self.node(&format!("Assign: {stmt_text}"), Shape::Process);
                self.edge(prev, node);
                node
            }
            Stmt::Expr(Expr::Call(call)) => {
                let node = self.node(&format!("Call: {}", call.text), Shape::Process);
                self.edge(prev, node);
                node
            }
            // Everything else is pass-through: the next sibling chains from
            // the same point.
            Stmt::ClassDef(_) | Stmt::Expr(Expr::Raw(_)) | Stmt::Other => prev,
        }
    }

    /// Shared shape for `while` and `for`: decision header, body chained from
    /// it, back-edge from the body's last node, and the header itself as the
    /// continuation point (loop or exit).
    fn walk_loop(&mut self, header: &str, body: &[Stmt], prev: NodeId) -> NodeId {
        let loop_node = self.node(header, Shape::Decision);
        self.edge(prev, loop_node);
        let mut last = loop_node;
        for stmt in body {
            last = self.walk(stmt, last);
        }
        self.edge(last, loop_node);
        loop_node
    }
}

#[cfg(test)]
#[path = "flowchart_test.rs"]
mod tests;
