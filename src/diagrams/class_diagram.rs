//! Class diagram builder: top-level classes with their direct members.

use crate::python::ast::Stmt;
use crate::sanitize::is_identifier;

/// Build the `classDiagram` for a parsed snippet.
///
/// Shallow by contract: only top-level `class` statements are emitted, and
/// only their direct members — a method line per `def` (receiver parameter
/// dropped), an attribute line per plain-name assignment target. Memberless
/// classes still emit their header/close pair.
#[must_use]
pub fn build(tree: &[Stmt]) -> String {
    let mut lines = vec!["classDiagram".to_owned()];

    for stmt in tree {
        let Stmt::ClassDef(class) = stmt else { continue };
        lines.push(format!("class {} {{", class.name));
        for member in &class.body {
            match member {
                Stmt::FunctionDef(method) => {
                    let params: Vec<&str> = method
                        .params
                        .iter()
                        .map(String::as_str)
                        .filter(|p| *p != "self")
                        .collect();
                    lines.push(format!("  +{}({})", method.name, params.join(", ")));
                }
                Stmt::Assign(assign) => {
                    for target in &assign.targets {
                        if is_identifier(target) {
                            lines.push(format!("  +{target}"));
                        }
                    }
                }
                _ => {}
            }
        }
        lines.push("}".to_owned());
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "class_diagram_test.rs"]
mod tests;
