//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget is embedded on third-party pages, so the relay answers
//! cross-origin requests. Every request is traced through `tower-http`.

pub mod chat;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Largest `POST /api/chat` body accepted; larger bodies get a 413 `{ error }`.
pub const MAX_REQUEST_BYTES: usize = 2 * 1024 * 1024;

/// Relay API routes.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(chat::relay_chat))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
