//! # rtb-api: Axum Service for the RTB API Gate
//!
//! Hosts the `rtb-core` access guard as a Tower layer in front of an Axum
//! router.
//!
//! ## API Surface
//!
//! | Route             | Auth                 | Response            |
//! |-------------------|----------------------|---------------------|
//! | `GET /api/health` | exempt               | `ok`                |
//! | `GET /api/ping`   | exempt               | `pong`              |
//! | `GET /api/status` | `Bearer` credential  | service + version   |
//! | `GET /`           | outside `/api/`      | banner              |
//!
//! Denied requests receive `401` with a JSON [`error::ErrorBody`].
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → AuthLayer → Handler
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

use axum::Router;
use rtb_core::AccessGuard;
use tower_http::trace::TraceLayer;

use crate::auth::AuthLayer;

pub use error::AppError;

/// Assemble the full application router with all routes and middleware.
///
/// The auth layer wraps every route and the fallback; the guard itself
/// decides which paths need a credential.
pub fn app(guard: AccessGuard) -> Router {
    routes::router()
        .layer(AuthLayer::new(guard))
        .layer(TraceLayer::new_for_http())
}
