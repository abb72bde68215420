//! Parser-free fallback: render a snippet as a line-by-line box list.
//!
//! Useful for eyeballing the HTTP pipeline without a working parser behind
//! it — every non-diagram bug reproduces against this output too.

/// Render each source line as a flowchart box chained to the previous one.
#[must_use]
pub fn fallback_flowchart(code: &str) -> String {
    let mut lines = vec!["flowchart TD".to_owned()];
    for (i, line) in code.lines().enumerate() {
        lines.push(format!("  A{i}[{}]", line.trim()));
        if i > 0 {
            lines.push(format!("  A{} --> A{i}", i - 1));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "fallback_test.rs"]
mod tests;
