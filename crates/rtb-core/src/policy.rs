//! # Path Policy
//!
//! Which request paths the gate protects, and which probes inside the
//! protected namespace stay reachable without a credential.
//!
//! Matching is plain string-prefix matching on the raw request path, so
//! `/api/healthz` is exempt under the default policy and `/api` (no
//! trailing slash) is outside the protected namespace.

use serde::{Deserialize, Serialize};

/// Prefix of the protected namespace.
pub const DEFAULT_PROTECTED_PREFIX: &str = "/api/";

/// Liveness/readiness probes that bypass authentication.
pub const DEFAULT_EXEMPT_PREFIXES: [&str; 2] = ["/api/health", "/api/ping"];

/// Protected prefix plus its exempt sub-prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardPolicy {
    protected_prefix: String,
    exempt_prefixes: Vec<String>,
}

impl GuardPolicy {
    pub fn new(
        protected_prefix: impl Into<String>,
        exempt_prefixes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            protected_prefix: protected_prefix.into(),
            exempt_prefixes: exempt_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn protected_prefix(&self) -> &str {
        &self.protected_prefix
    }

    pub fn exempt_prefixes(&self) -> &[String] {
        &self.exempt_prefixes
    }

    /// True when `path` falls inside the protected namespace.
    pub fn is_protected(&self, path: &str) -> bool {
        path.starts_with(self.protected_prefix.as_str())
    }

    /// True when `path` starts with one of the exempt sub-prefixes.
    ///
    /// Independent of [`is_protected`](Self::is_protected); the guard only
    /// consults it for protected paths.
    pub fn is_exempt(&self, path: &str) -> bool {
        self.exempt_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_PROTECTED_PREFIX, DEFAULT_EXEMPT_PREFIXES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_protects_api_namespace() {
        let policy = GuardPolicy::default();
        assert!(policy.is_protected("/api/widgets"));
        assert!(policy.is_protected("/api/"));
        assert!(!policy.is_protected("/api"));
        assert!(!policy.is_protected("/admin"));
        assert!(!policy.is_protected("/static/app.js"));
        assert!(!policy.is_protected(""));
    }

    #[test]
    fn default_policy_exempts_probes_by_prefix() {
        let policy = GuardPolicy::default();
        assert!(policy.is_exempt("/api/health"));
        assert!(policy.is_exempt("/api/healthz"));
        assert!(policy.is_exempt("/api/health/ready"));
        assert!(policy.is_exempt("/api/ping"));
        assert!(!policy.is_exempt("/api/widgets"));
        assert!(!policy.is_exempt("/api/"));
    }

    #[test]
    fn prefix_matching_is_case_sensitive() {
        let policy = GuardPolicy::default();
        assert!(!policy.is_protected("/API/widgets"));
        assert!(!policy.is_exempt("/api/Health"));
    }

    #[test]
    fn custom_policy() {
        let policy = GuardPolicy::new("/v1/", ["/v1/status"]);
        assert_eq!(policy.protected_prefix(), "/v1/");
        assert_eq!(policy.exempt_prefixes(), ["/v1/status".to_string()]);
        assert!(policy.is_protected("/v1/orders"));
        assert!(!policy.is_protected("/api/orders"));
        assert!(policy.is_exempt("/v1/status"));
    }

    #[test]
    fn policy_deserializes_from_json() {
        let policy: GuardPolicy = serde_json::from_str(
            r#"{"protected_prefix": "/api/", "exempt_prefixes": ["/api/health", "/api/ping"]}"#,
        )
        .unwrap();
        assert_eq!(policy, GuardPolicy::default());
    }
}
