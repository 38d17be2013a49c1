//! The API key authorization gate.

use crate::config::Environment;

/// Outcome of the gate. The caller is responsible for short-circuiting the
/// pipeline and writing the 401 response on `Deny`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Permit,
    Deny,
}

/// Decide whether a request may proceed.
///
/// Development and test environments always permit, regardless of the
/// presented credential. Elsewhere the presented `X-API-Key` value must be
/// non-empty and exactly equal to the configured key (case-sensitive).
///
/// Pure decision function: no side effects, no clock, no I/O. The
/// comparison is not constant-time; swap in a constant-time equality if the
/// key ever guards something an attacker would time.
pub fn authorize(environment: Environment, presented: Option<&str>, expected: &str) -> Decision {
    if !environment.requires_api_key() {
        return Decision::Permit;
    }

    match presented {
        Some(key) if !key.is_empty() && key == expected => Decision::Permit,
        _ => Decision::Deny,
    }
}
