//! # Routes
//!
//! The minimal route table hosted behind the gate: liveness probes inside
//! the exempt part of `/api/`, one protected status endpoint, a public
//! landing page, and a JSON 404 fallback.

use axum::http::Uri;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Response of `GET /api/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub service: String,
    pub version: String,
}

/// Build the route table. Middleware is applied by [`crate::app`].
pub fn router() -> Router {
    Router::new()
        .route("/", get(landing))
        .route("/api/health", get(health))
        .route("/api/ping", get(ping))
        .route("/api/status", get(status))
        .fallback(not_found)
}

async fn landing() -> &'static str {
    "RTB API gate. Protected endpoints live under /api/."
}

/// Liveness probe. Always returns 200 if the process is running.
async fn health() -> &'static str {
    "ok"
}

async fn ping() -> &'static str {
    "pong"
}

/// Only reachable with a valid bearer credential.
async fn status() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
