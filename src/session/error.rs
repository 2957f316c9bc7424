use thiserror::Error;

use crate::api::ApiError;

/// Typed failures surfaced by the session manager.
///
/// Every error from `login` leaves the session logged out; no partial state
/// is ever observable.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No wallet connected")]
    NoWallet,

    #[error("Failed to obtain login challenge")]
    Challenge(#[source] ApiError),

    #[error("Wallet signing failed: {0}")]
    Signature(anyhow::Error),

    #[error("Challenge verification failed")]
    Verification(#[source] ApiError),

    #[error("Failed to persist credential: {0}")]
    Storage(anyhow::Error),

    #[error("Another login attempt is already in progress")]
    ConcurrentLogin,

    #[error("Login attempt was superseded by a logout")]
    Superseded,
}
