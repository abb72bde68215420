//! End-to-end tests against the real router on an ephemeral port.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

async fn spawn_app() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, codegram::routes::app())
            .await
            .expect("test server failed");
    });
    addr.to_string()
}

/// Minimal HTTP/1.1 exchange: returns (status code, body).
async fn request(addr: &str, raw: &str) -> (u16, String) {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    stream.write_all(raw.as_bytes()).await.expect("write request");
    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.expect("read response");
    let response = String::from_utf8(response).expect("utf8 response");

    let status: u16 = response
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .expect("status line");
    let body = response
        .split_once("\r\n\r\n")
        .map(|(_, b)| b.to_owned())
        .unwrap_or_default();
    (status, body)
}

async fn post_json(addr: &str, path: &str, body: &str) -> (u16, String) {
    let raw = format!(
        "POST {path} HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    request(addr, &raw).await
}

#[tokio::test]
async fn python_snippet_returns_four_diagram_strings() {
    let addr = spawn_app().await;
    let payload = r#"{"code_snippet": "def a():\n    b()\n", "language": "python"}"#;
    let (status, body) = post_json(&addr, "/generate-diagram", payload).await;

    assert_eq!(status, 200);
    let value: serde_json::Value = serde_json::from_str(&body).expect("json body");
    let obj = value.as_object().expect("object body");
    assert_eq!(obj.len(), 4);
    assert!(obj["flowchart"].as_str().unwrap().starts_with("flowchart TD"));
    assert!(obj["sequence"].as_str().unwrap().contains("a ->> b: call"));
    assert!(obj["state"].as_str().unwrap().starts_with("stateDiagram-v2"));
    assert!(obj["class"].as_str().unwrap().starts_with("classDiagram"));
}

#[tokio::test]
async fn trailing_slash_spelling_is_also_routed() {
    let addr = spawn_app().await;
    let payload = r#"{"code_snippet": "x = 1", "language": "python"}"#;
    let (status, _) = post_json(&addr, "/generate-diagram/", payload).await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn unsupported_language_is_http_200_with_error_field() {
    let addr = spawn_app().await;
    let payload = r#"{"code_snippet": "puts 1", "language": "ruby"}"#;
    let (status, body) = post_json(&addr, "/generate-diagram", payload).await;

    assert_eq!(status, 200);
    let value: serde_json::Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(value, serde_json::json!({ "error": "Unsupported language: ruby" }));
}

#[tokio::test]
async fn unparsable_snippet_is_http_200_with_comment_strings() {
    let addr = spawn_app().await;
    let payload = r#"{"code_snippet": "def f(:", "language": "python"}"#;
    let (status, body) = post_json(&addr, "/generate-diagram", payload).await;

    assert_eq!(status, 200);
    let value: serde_json::Value = serde_json::from_str(&body).expect("json body");
    let flowchart = value["flowchart"].as_str().unwrap();
    assert!(flowchart.starts_with("%% Error parsing Python code: "), "{flowchart}");
}

#[tokio::test]
async fn malformed_body_is_rejected_at_the_boundary() {
    let addr = spawn_app().await;
    let (status, _) = post_json(&addr, "/generate-diagram", r#"{"language": "python"}"#).await;
    assert_eq!(status, 422);
}

#[tokio::test]
async fn healthz_answers_ok() {
    let addr = spawn_app().await;
    let raw = "GET /healthz HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n";
    let (status, _) = request(&addr, raw).await;
    assert_eq!(status, 200);
}
