//! Code-to-diagram generation route.

use axum::response::Json;
use serde::Deserialize;
use serde_json::json;

use crate::diagrams;
use crate::extract;

#[derive(Debug, Deserialize)]
pub struct CodeRequest {
    pub code_snippet: String,
    pub language: String,
}

/// `POST /generate-diagram` — generate flowchart/sequence/state/class
/// diagrams for a code snippet.
///
/// Always answers 200: parse failures come back embedded in the diagram
/// strings, and an unrecognized language comes back as an `error` field.
pub async fn generate_diagram(Json(body): Json<CodeRequest>) -> Json<serde_json::Value> {
    let language = body.language.to_lowercase();
    tracing::info!(%language, bytes = body.code_snippet.len(), "generating diagrams");

    match language.as_str() {
        "python" => Json(json!(diagrams::generate_python(&body.code_snippet))),
        "java" | "c" => Json(json!(extract::generate(&body.code_snippet))),
        _ => Json(json!({ "error": format!("Unsupported language: {language}") })),
    }
}

#[cfg(test)]
#[path = "diagram_test.rs"]
mod tests;
