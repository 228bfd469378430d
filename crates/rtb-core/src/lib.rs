//! # rtb-core: Access Decisions for the RTB API Gate
//!
//! Decides whether a request to the protected `/api/` namespace may proceed,
//! based on a pre-shared bearer credential. This crate has no HTTP framework
//! dependency; `rtb-api` wires it into an Axum/Tower stack.
//!
//! ## Key Design Principles
//!
//! 1. **Fail closed.** An unset or empty credential denies every protected,
//!    non-exempt request and emits a `warn` event.
//!
//! 2. **No cached configuration.** The expected credential comes from a
//!    [`CredentialSource`] on every evaluation, so rotation is immediate.
//!
//! 3. **Fixed error taxonomy.** Three [`DenyReason`]s, all HTTP 401.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Credentials never appear in `Debug` output.

pub mod credential;
pub mod decision;
pub mod guard;
pub mod policy;

pub use credential::{
    CredentialSource, EnvCredentialSource, ExpectedCredential, StaticCredentialSource,
    DEFAULT_CREDENTIAL_VAR,
};
pub use decision::{Decision, DenyReason, UNAUTHORIZED_STATUS};
pub use guard::{bearer_token, evaluate, evaluate_with, AccessGuard, BEARER_PREFIX};
pub use policy::{GuardPolicy, DEFAULT_EXEMPT_PREFIXES, DEFAULT_PROTECTED_PREFIX};
