//! Router assembly.
//!
//! One JSON endpoint plus a health probe. CORS is wide open — the service
//! is called straight from browser frontends on other origins.

pub mod diagram;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Both spellings are routed: clients historically call the endpoint with
    // and without the trailing slash.
    Router::new()
        .route("/generate-diagram", post(diagram::generate_diagram))
        .route("/generate-diagram/", post(diagram::generate_diagram))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
