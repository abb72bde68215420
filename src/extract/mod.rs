//! Java/C path: regex extraction plus stub diagram generators.
//!
//! No structural understanding — a signature-shaped pattern pulls function
//! names and raw parameter text, a keyword pattern pulls class names.
//! Matches inside comments and string literals are false positives we accept;
//! this path exists to give Java/C snippets *some* diagram, not a faithful
//! one.

use std::sync::OnceLock;

use regex::Regex;

use crate::diagrams::DiagramSet;

/// Function and class names extracted from raw source text.
#[derive(Debug, Clone)]
pub struct ParsedSource {
    pub functions: Vec<FunctionSig>,
    pub classes: Vec<String>,
}

/// One signature-like match: function name and its raw parameter text.
#[derive(Debug, Clone)]
pub struct FunctionSig {
    pub name: String,
    pub params: String,
}

fn function_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:public|private|protected)?\s*(?:static)?\s*\w+\s+(\w+)\s*\((.*?)\)\s*\{")
            .expect("function pattern compiles")
    })
}

fn class_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"class\s+(\w+)").expect("class pattern compiles"))
}

/// Scan raw Java/C source for function signatures and class declarations,
/// in source order, duplicates preserved.
#[must_use]
pub fn parse_source(code: &str) -> ParsedSource {
    let functions = function_pattern()
        .captures_iter(code)
        .map(|caps| FunctionSig { name: caps[1].to_owned(), params: caps[2].to_owned() })
        .collect();
    let classes = class_pattern()
        .captures_iter(code)
        .map(|caps| caps[1].to_owned())
        .collect();
    ParsedSource { functions, classes }
}

/// Generate all four stub diagrams for a Java/C snippet.
#[must_use]
pub fn generate(code: &str) -> DiagramSet {
    let parsed = parse_source(code);
    DiagramSet {
        flowchart: flowchart(&parsed),
        sequence: sequence(&parsed),
        state: state_machine(&parsed),
        class_diagram: class_diagram(&parsed),
    }
}

/// Functions chained Start → f1 → f2 → ... → End. No control flow.
fn flowchart(parsed: &ParsedSource) -> String {
    let mut lines = vec!["flowchart TD".to_owned(), "Start([Start])".to_owned()];
    let mut last = "Start".to_owned();
    for func in &parsed.functions {
        let node = format!("N{}", func.name);
        lines.push(format!("{last} --> {node}"));
        last = node;
    }
    lines.push(format!("{last} --> End([End])"));
    lines.join("\n")
}

/// Participants only; the extractor sees no call sites.
fn sequence(parsed: &ParsedSource) -> String {
    let mut lines = vec!["sequenceDiagram".to_owned()];
    for func in &parsed.functions {
        lines.push(format!("participant {}", func.name));
    }
    lines.join("\n")
}

/// Every function enters from Start and exits to the terminal pseudo-state.
fn state_machine(parsed: &ParsedSource) -> String {
    let mut lines = vec!["stateDiagram-v2".to_owned(), "[*] --> Start".to_owned()];
    for func in &parsed.functions {
        lines.push(format!("Start --> {name}: enter {name}", name = func.name));
        lines.push(format!("{} --> [*]", func.name));
    }
    lines.join("\n")
}

/// Empty class blocks; member extraction is beyond the regex path.
fn class_diagram(parsed: &ParsedSource) -> String {
    let mut lines = vec!["classDiagram".to_owned()];
    for class in &parsed.classes {
        lines.push(format!("class {class} {{}}"));
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
