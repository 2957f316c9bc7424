//! HTTP client for the ChainCred auth backend.
//!
//! Wraps the three remote auth procedures: issue a login challenge for a
//! wallet identity, verify a signed challenge into a bearer credential, and
//! check whether a stored credential is still accepted.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Challenge, Credential, SignedChallenge};
use crate::wallet::WalletIdentity;

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// 30s allows for slow backend responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Path of the challenge-issuing endpoint.
const LOGIN_PAYLOAD_PATH: &str = "/auth/login-payload";

/// Path of the signed-challenge verification endpoint.
const VERIFY_PATH: &str = "/auth/verify";

/// Path of the credential validation endpoint.
const VALIDATE_PATH: &str = "/auth/validate";

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginPayloadRequest<'a> {
    address: &'a str,
    chain_id: u64,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    jwt: String,
}

#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    jwt: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateResponse {
    is_logged_in: bool,
}

// ============================================================================
// Backend seam
// ============================================================================

/// Remote auth operations the session manager depends on.
///
/// `AuthClient` is the production implementation; tests substitute
/// programmable fakes.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Ask the backend to mint a single-use challenge for `identity`.
    async fn issue_challenge(&self, identity: &WalletIdentity) -> Result<Challenge, ApiError>;

    /// Submit a signed challenge; returns the bearer credential on success.
    async fn verify(&self, signed: SignedChallenge) -> Result<Credential, ApiError>;

    /// Ask the backend whether `credential` is still accepted.
    async fn validate(&self, credential: &Credential) -> Result<bool, ApiError>;
}

/// Auth API client for the ChainCred backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    /// Create a new auth client against the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url.into()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }
}

/// Trailing slashes in configured URLs would produce `//auth/...` paths.
fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[async_trait]
impl AuthBackend for AuthClient {
    async fn issue_challenge(&self, identity: &WalletIdentity) -> Result<Challenge, ApiError> {
        let url = self.url(LOGIN_PAYLOAD_PATH);
        debug!(address = %identity.address, chain_id = identity.chain_id, "Requesting login challenge");

        let request = LoginPayloadRequest {
            address: &identity.address,
            chain_id: identity.chain_id,
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let response = Self::check_response(response).await?;

        let payload: serde_json::Value = response.json().await?;
        Ok(Challenge::new(payload))
    }

    async fn verify(&self, signed: SignedChallenge) -> Result<Credential, ApiError> {
        let url = self.url(VERIFY_PATH);
        debug!("Submitting signed challenge for verification");

        let response = self.client.post(&url).json(&signed).send().await?;
        let response = Self::check_response(response).await?;

        let verified: VerifyResponse = response.json().await?;
        Ok(Credential::new(verified.jwt))
    }

    async fn validate(&self, credential: &Credential) -> Result<bool, ApiError> {
        let url = self.url(VALIDATE_PATH);
        debug!("Validating stored credential");

        let request = ValidateRequest {
            jwt: credential.as_str(),
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let response = Self::check_response(response).await?;

        let validated: ValidateResponse = response.json().await?;
        Ok(validated.is_logged_in)
    }
}
