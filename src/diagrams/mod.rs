//! Mermaid diagram builders for parsed Python snippets.
//!
//! The dispatcher parses the snippet once and hands the same statement tree
//! to four independent builders; none of them depends on another's output.
//! A snippet that does not parse degrades to four identical comment lines
//! carrying the parser's message — the request itself never fails.

pub mod class_diagram;
pub mod fallback;
pub mod flowchart;
pub mod sequence;
pub mod state;

use serde::Serialize;

use crate::python;

/// The four diagram strings generated for one snippet.
#[derive(Debug, Clone, Serialize)]
pub struct DiagramSet {
    pub flowchart: String,
    pub sequence: String,
    pub state: String,
    #[serde(rename = "class")]
    pub class_diagram: String,
}

/// Generate all four diagrams for a Python snippet.
#[must_use]
pub fn generate_python(code: &str) -> DiagramSet {
    match python::parse(code) {
        Ok(tree) => DiagramSet {
            flowchart: flowchart::build(&tree),
            sequence: sequence::build(&tree),
            state: state::build(&tree),
            class_diagram: class_diagram::build(&tree),
        },
        Err(err) => {
            tracing::warn!(error = %err, "python snippet failed to parse");
            let comment = format!("%% Error parsing Python code: {err}");
            DiagramSet {
                flowchart: comment.clone(),
                sequence: comment.clone(),
                state: comment.clone(),
                class_diagram: comment,
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
