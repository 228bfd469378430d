//! # Expected Credential & Credential Sources
//!
//! The gate compares bearer tokens against a single pre-shared credential.
//! That credential is never cached by the guard: a [`CredentialSource`] is
//! consulted on every evaluation, so rotating the underlying value (for
//! example the `RTB_API_KEY` environment variable) takes effect on the next
//! request.
//!
//! ## Providers
//!
//! - [`EnvCredentialSource`]: reads a named environment variable per call.
//! - [`StaticCredentialSource`]: a fixed value, for embedding and tests.
//! - Any `Fn() -> Option<String> + Send + Sync` closure.

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Environment variable holding the expected credential by default.
pub const DEFAULT_CREDENTIAL_VAR: &str = "RTB_API_KEY";

// ── ExpectedCredential ──────────────────────────────────────────────────────

/// A non-empty pre-shared credential.
///
/// Custom `Debug` redacts the value so it cannot leak through logs, and the
/// backing buffer is wiped on drop.
#[derive(Clone)]
pub struct ExpectedCredential(Zeroizing<String>);

impl ExpectedCredential {
    /// Wrap a configured value. Empty strings count as "not configured" and
    /// yield `None`.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(Zeroizing::new(value)))
        }
    }

    /// Exact, case-sensitive comparison against a presented token.
    pub fn matches(&self, token: &str) -> bool {
        constant_time_token_eq(token, &self.0)
    }
}

impl std::fmt::Debug for ExpectedCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ExpectedCredential")
            .field(&"[REDACTED]")
            .finish()
    }
}

/// Constant-time comparison of bearer tokens.
///
/// On a length mismatch a dummy comparison still runs so the early return
/// does not stand out in timing.
fn constant_time_token_eq(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();
    if provided.len() != expected.len() {
        let _ = expected.ct_eq(expected);
        return false;
    }
    provided.ct_eq(expected).into()
}

// ── CredentialSource ────────────────────────────────────────────────────────

/// Supplies the expected credential at evaluation time.
///
/// Implementations must be cheap and non-blocking: the guard calls this once
/// per protected request, inline on the request path.
pub trait CredentialSource: Send + Sync {
    /// The credential currently configured, or `None` when unset or empty.
    fn expected_credential(&self) -> Option<ExpectedCredential>;
}

impl<F> CredentialSource for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn expected_credential(&self) -> Option<ExpectedCredential> {
        self().and_then(ExpectedCredential::new)
    }
}

/// Reads the credential from a process environment variable on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvCredentialSource {
    var: String,
}

impl EnvCredentialSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the environment variable consulted.
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredentialSource {
    fn default() -> Self {
        Self::new(DEFAULT_CREDENTIAL_VAR)
    }
}

impl CredentialSource for EnvCredentialSource {
    fn expected_credential(&self) -> Option<ExpectedCredential> {
        // Non-unicode values are treated as unset.
        std::env::var(&self.var)
            .ok()
            .and_then(ExpectedCredential::new)
    }
}

/// A fixed credential (or a fixed absence of one).
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialSource {
    credential: Option<ExpectedCredential>,
}

impl StaticCredentialSource {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            credential: ExpectedCredential::new(value),
        }
    }

    /// A source that never has a credential configured.
    pub fn unset() -> Self {
        Self { credential: None }
    }
}

impl CredentialSource for StaticCredentialSource {
    fn expected_credential(&self) -> Option<ExpectedCredential> {
        self.credential.clone()
    }
}
