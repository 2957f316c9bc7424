//! Domain types for the login flow.
//!
//! `Challenge`, `SignedChallenge` and `Credential` are opaque to this crate:
//! the backend mints challenges and credentials, the wallet produces
//! signatures, and we only carry them between the two.

use serde::{Deserialize, Serialize};

/// Opaque login payload issued by the auth backend for a wallet identity.
///
/// Single-use: a challenge is submitted to verification at most once. A
/// failed or abandoned attempt discards it and a retry requests a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Challenge(serde_json::Value);

impl Challenge {
    pub fn new(payload: serde_json::Value) -> Self {
        Self(payload)
    }

    pub fn payload(&self) -> &serde_json::Value {
        &self.0
    }
}

/// A challenge together with the wallet's signature over it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedChallenge {
    pub payload: Challenge,
    pub signature: String,
}

impl SignedChallenge {
    /// Consumes the challenge so it cannot be signed or submitted again.
    pub fn new(payload: Challenge, signature: String) -> Self {
        Self { payload, signature }
    }
}

/// Bearer token proving an authenticated session.
///
/// A JWT in practice, but treated as an opaque string: no local expiry or
/// claims inspection, the backend alone decides when it stops being valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Self(token)
    }
}
