//! # Access Guard
//!
//! The authentication decision for one request, evaluated in order, first
//! match wins:
//!
//! 1. Path outside the protected namespace → allow.
//! 2. Path under an exempt probe prefix → allow.
//! 3. No expected credential configured → deny (fail closed) and warn.
//! 4. `Authorization` absent or not `Bearer ` → deny.
//! 5. Trimmed token differs from the expected credential → deny.
//! 6. Otherwise → allow.
//!
//! The decision depends only on the path, the header value, and the
//! credential current at evaluation time. Nothing is cached between calls.

use std::sync::Arc;

use crate::credential::{CredentialSource, EnvCredentialSource, ExpectedCredential};
use crate::decision::{Decision, DenyReason};
use crate::policy::GuardPolicy;

/// Literal scheme prefix of an accepted `Authorization` header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Extract the token from an `Authorization` header value.
///
/// The scheme is case-sensitive and must be followed by exactly one space.
/// The remainder is trimmed; it may be empty.
pub fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix(BEARER_PREFIX).map(str::trim)
}

/// Evaluate a request against the default `/api/` policy.
pub fn evaluate(
    path: &str,
    auth_header: Option<&str>,
    expected_credential: Option<&str>,
) -> Decision {
    evaluate_with(
        &GuardPolicy::default(),
        path,
        auth_header,
        expected_credential,
    )
}

/// Evaluate a request against an explicit policy.
pub fn evaluate_with(
    policy: &GuardPolicy,
    path: &str,
    auth_header: Option<&str>,
    expected_credential: Option<&str>,
) -> Decision {
    decide(policy, path, auth_header, || {
        expected_credential.and_then(ExpectedCredential::new)
    })
}

/// Shared decision procedure. The credential is resolved only once the path
/// is known to need it.
fn decide(
    policy: &GuardPolicy,
    path: &str,
    auth_header: Option<&str>,
    resolve_credential: impl FnOnce() -> Option<ExpectedCredential>,
) -> Decision {
    if !policy.is_protected(path) || policy.is_exempt(path) {
        return Decision::Allow;
    }

    let Some(expected) = resolve_credential() else {
        tracing::warn!(
            event = "credential_not_configured",
            path,
            "API credential not configured; rejecting protected request"
        );
        return Decision::Deny(DenyReason::NotConfigured);
    };

    let Some(token) = auth_header.and_then(bearer_token) else {
        return Decision::Deny(DenyReason::MissingAuthorization);
    };

    if expected.matches(token) {
        Decision::Allow
    } else {
        Decision::Deny(DenyReason::InvalidCredential)
    }
}

// ── AccessGuard ─────────────────────────────────────────────────────────────

/// A path policy bound to a credential source.
///
/// Cheap to clone; the source is shared behind an `Arc`.
#[derive(Clone)]
pub struct AccessGuard {
    policy: GuardPolicy,
    source: Arc<dyn CredentialSource>,
}

impl AccessGuard {
    pub fn new(policy: GuardPolicy, source: impl CredentialSource + 'static) -> Self {
        Self {
            policy,
            source: Arc::new(source),
        }
    }

    /// Default policy, credential read from `RTB_API_KEY` on every request.
    pub fn from_env() -> Self {
        Self::new(GuardPolicy::default(), EnvCredentialSource::default())
    }

    pub fn policy(&self) -> &GuardPolicy {
        &self.policy
    }

    /// Decide whether a request for `path` carrying `auth_header` may proceed.
    pub fn check(&self, path: &str, auth_header: Option<&str>) -> Decision {
        decide(&self.policy, path, auth_header, || {
            self.source.expected_credential()
        })
    }
}

impl std::fmt::Debug for AccessGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGuard")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
