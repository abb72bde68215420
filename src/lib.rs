//! codegram — turn code snippets into Mermaid diagram text.
//!
//! One HTTP endpoint accepts `{code_snippet, language}` and answers with
//! four diagram strings (flowchart, sequence, state machine, class). Python
//! snippets go through a real statement parser and four tree walks; Java/C
//! snippets go through a regex extractor with stub generators. Everything is
//! request-scoped: no persistence, no shared state, no background work.

pub mod diagrams;
pub mod extract;
pub mod python;
pub mod routes;
pub mod sanitize;
