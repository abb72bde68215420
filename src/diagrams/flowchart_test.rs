//! Tests for the flowchart builder.

use super::build;
use crate::python::parse;

fn chart(src: &str) -> String {
    build(&parse(src).unwrap())
}

#[test]
fn function_with_return() {
    let expected = "flowchart TD\n\
                    N1((Start))\n\
                    N2((Function f))\n\
                    N1 --> N2\n\
                    N3[/ Return 1 /]\n\
                    N2 --> N3\n\
                    N4((End))\n\
                    N3 --> N4";
    assert_eq!(chart("def f():\n    return 1\n"), expected);
}

#[test]
fn empty_input_is_start_to_end() {
    assert_eq!(chart(""), "flowchart TD\nN1((Start))\nN2((End))\nN1 --> N2");
}

#[test]
fn pass_through_statements_leave_chain_untouched() {
    assert_eq!(chart("import os\npass\n"), "flowchart TD\nN1((Start))\nN2((End))\nN1 --> N2");
}

#[test]
fn branches_converge_in_merge_node() {
    let out = chart("if x > 0:\n    y = 1\nelse:\n    y = 2\n");
    // Decision, two assigns, one merge.
    assert!(out.contains("N2{If x > 0}"), "{out}");
    assert!(out.contains("N5[Merge]"), "{out}");
    assert!(out.contains("N3 --> N5"), "{out}");
    assert!(out.contains("N4 --> N5"), "{out}");
}

#[test]
fn empty_false_branch_chains_decision_to_merge() {
    let out = chart("if ready:\n    launch()\n");
    // N1 Start, N2 decision, N3 call, N4 merge: the false side is the
    // decision node itself.
    assert!(out.contains("N3 --> N4"), "{out}");
    assert!(out.contains("N2 --> N4"), "{out}");
}

#[test]
fn loop_emits_back_edge_and_continues_from_header() {
    let out = chart("while x > 0:\n    x = x - 1\ndone()\n");
    // Assign loops back to the while header; the next statement chains from
    // the header (loop-or-exit), not from the body.
    assert!(out.contains("N2{Loop while x > 0}"), "{out}");
    assert!(out.contains("N3 --> N2"), "{out}");
    assert!(out.contains("N2 --> N4"), "{out}");
}

#[test]
fn for_loop_header_label() {
    let out = chart("for i in range(3):\n    total = total + i\n");
    assert!(out.contains("N2{Loop for i in range3}"), "{out}");
}

#[test]
fn statement_labels_are_sanitized() {
    let out = chart("x = compute(1, 2)\nlog(x)\n");
    assert!(out.contains("N2[Assign x = compute1 2]"), "{out}");
    assert!(out.contains("N3[Call logx]"), "{out}");
}

#[test]
fn class_defs_are_invisible() {
    let out = chart("class Foo:\n    def bar(self):\n        return 1\n");
    assert_eq!(out, "flowchart TD\nN1((Start))\nN2((End))\nN1 --> N2");
}

#[test]
fn edges_only_reference_declared_nodes() {
    let out = chart("def f(x):\n    if x > 0:\n        return 1\n    return 0\n");
    let mut declared = Vec::new();
    for line in out.lines().skip(1) {
        if let Some((from, to)) = line.split_once(" --> ") {
            assert!(declared.contains(&from.to_owned()), "dangling source in {line}");
            assert!(declared.contains(&to.to_owned()), "dangling target in {line}");
        } else {
            let id: String = line.chars().take_while(|c| c.is_ascii_alphanumeric()).collect();
            declared.push(id);
        }
    }
}

#[test]
fn numbering_restarts_per_build() {
    let src = "def f():\n    return 1\n";
    assert_eq!(chart(src), chart(src));
}
