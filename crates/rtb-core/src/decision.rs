//! # Access Decisions
//!
//! The outcome of evaluating one request against the gate. A decision is
//! computed fresh for every request and never stored.

use serde::Serialize;
use thiserror::Error;

/// HTTP status code carried by every denial.
pub const UNAUTHORIZED_STATUS: u16 = 401;

/// Why a request to the protected namespace was rejected.
///
/// The `Display` output is the exact description returned to the client.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// No expected credential is configured. The gate fails closed.
    #[error("API key not configured")]
    NotConfigured,

    /// The `Authorization` header is absent or does not use the `Bearer ` scheme.
    #[error("Missing Authorization header")]
    MissingAuthorization,

    /// The bearer token does not match the expected credential.
    #[error("Invalid API key")]
    InvalidCredential,
}

impl DenyReason {
    /// HTTP status code for this denial. Always 401.
    pub fn status_code(&self) -> u16 {
        UNAUTHORIZED_STATUS
    }
}

/// Result of running the access guard over a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// The request proceeds to its handler unmodified.
    Allow,
    /// The request is short-circuited with the given reason.
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// The denial reason, if any.
    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Self::Allow => None,
            Self::Deny(reason) => Some(*reason),
        }
    }

    /// Convert into a `Result`, for callers that propagate denials with `?`.
    pub fn into_result(self) -> Result<(), DenyReason> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(reason) => Err(reason),
        }
    }
}

impl From<DenyReason> for Decision {
    fn from(reason: DenyReason) -> Self {
        Self::Deny(reason)
    }
}
