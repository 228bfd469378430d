//! # Authentication Middleware
//!
//! Tower layer that runs the [`AccessGuard`] before any route handler.
//!
//! The layer is composed explicitly into the router (see [`crate::app`]).
//! For every request it reads the path and the `Authorization` header, asks
//! the guard for a [`Decision`], and either forwards the request untouched
//! or answers with a 401 JSON body whose message is the denial reason.
//!
//! ## Header handling
//!
//! Only the first `Authorization` header is considered. Its raw bytes are
//! decoded as latin-1, so a `Bearer ` value carrying non-ASCII bytes is still
//! compared as a token and rejected as an invalid key.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::extract::Request;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use rtb_core::{AccessGuard, Decision};
use tower::{Layer, Service};

use crate::error::AppError;

/// Layer that wraps services in [`AuthService`].
#[derive(Debug, Clone)]
pub struct AuthLayer {
    guard: AccessGuard,
}

impl AuthLayer {
    pub fn new(guard: AccessGuard) -> Self {
        Self { guard }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthService {
            inner,
            guard: self.guard.clone(),
        }
    }
}

/// Service that short-circuits requests the guard denies.
#[derive(Debug, Clone)]
pub struct AuthService<S> {
    inner: S,
    guard: AccessGuard,
}

impl<S> AuthService<S> {
    fn decide(&self, request: &Request) -> Decision {
        let auth_header = request
            .headers()
            .get(header::AUTHORIZATION)
            .map(|v| latin1(v.as_bytes()));
        self.guard.check(request.uri().path(), auth_header.as_deref())
    }
}

/// Every byte maps to the code point of the same value.
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

impl<S> Service<Request> for AuthService<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        match self.decide(&request) {
            Decision::Allow => Box::pin(self.inner.call(request)),
            Decision::Deny(reason) => {
                tracing::debug!(
                    reason = %reason,
                    path = %request.uri().path(),
                    "request denied"
                );
                let response = AppError::from(reason).into_response();
                Box::pin(std::future::ready(Ok(response)))
            }
        }
    }
}
