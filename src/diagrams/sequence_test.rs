//! Tests for the sequence diagram builder.

use super::build;
use crate::python::parse;

fn diagram(src: &str) -> String {
    build(&parse(src).unwrap())
}

#[test]
fn one_call_one_message() {
    let expected = "sequenceDiagram\nparticipant a\nparticipant b\na ->> b: call";
    assert_eq!(diagram("def a():\n    b()\n"), expected);
}

#[test]
fn empty_input_is_header_only() {
    assert_eq!(diagram(""), "sequenceDiagram");
}

#[test]
fn repeated_calls_keep_every_message() {
    let out = diagram("def a():\n    b()\n    b()\n");
    assert_eq!(out.matches("a ->> b: call").count(), 2);
    assert_eq!(out.matches("participant b").count(), 1);
}

#[test]
fn participants_in_first_encounter_order() {
    let out = diagram("def worker():\n    fetch()\n    store()\ndef fetch():\n    pass\n");
    let participants: Vec<&str> = out
        .lines()
        .filter_map(|l| l.strip_prefix("participant "))
        .collect();
    assert_eq!(participants, vec!["worker", "fetch", "store"]);
}

#[test]
fn nested_calls_are_out_of_frame() {
    let out = diagram("def a():\n    if x:\n        b()\n");
    assert!(!out.contains("participant b"), "{out}");
    assert!(!out.contains("->>"), "{out}");
}

#[test]
fn dotted_callee_collapses_to_identifier() {
    let out = diagram("def a():\n    obj.method()\n");
    assert!(out.contains("participant objmethod"), "{out}");
    assert!(out.contains("a ->> objmethod: call"), "{out}");
}

#[test]
fn non_call_statements_ignored() {
    let out = diagram("def a():\n    x = b()\n    return c\n");
    assert_eq!(out, "sequenceDiagram\nparticipant a");
}

#[test]
fn only_top_level_functions_scanned() {
    let out = diagram("class C:\n    def m(self):\n        n()\n");
    assert_eq!(out, "sequenceDiagram");
}
