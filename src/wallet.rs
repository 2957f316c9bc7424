//! Wallet provider seam.
//!
//! Real implementations wrap the platform wallet SDK (WalletConnect,
//! embedded wallet, etc.). This crate only defines the capability surface
//! the session manager needs: who is connected, sign a payload, disconnect.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::Challenge;

/// Number of hex characters kept on each side of a truncated address.
const ADDRESS_DISPLAY_CHARS: usize = 4;

/// A connected wallet: account address plus the chain it is connected to.
///
/// Immutable for the lifetime of a connection. Absent entirely when no
/// wallet is connected - never a placeholder value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletIdentity {
    pub address: String,
    pub chain_id: u64,
}

impl WalletIdentity {
    pub fn new(address: impl Into<String>, chain_id: u64) -> Self {
        Self {
            address: address.into(),
            chain_id,
        }
    }

    /// Short display form of the address, e.g. `0x1234…abcd`.
    ///
    /// Resolved once here at the data boundary so rendering code never has
    /// to reason about address shapes.
    pub fn display_name(&self) -> String {
        let stripped = self.address.strip_prefix("0x").unwrap_or(&self.address);
        if stripped.len() <= ADDRESS_DISPLAY_CHARS * 2 {
            return self.address.clone();
        }
        format!(
            "0x{}…{}",
            &stripped[..ADDRESS_DISPLAY_CHARS],
            &stripped[stripped.len() - ADDRESS_DISPLAY_CHARS..]
        )
    }
}

/// Capability surface of an external wallet SDK.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// The currently connected identity, if any.
    fn active_identity(&self) -> Option<WalletIdentity>;

    /// Sign an opaque challenge payload with the active account's key.
    /// Fails if the user rejects the prompt or the wallet errors out.
    async fn sign(&self, challenge: &Challenge) -> Result<String>;

    /// Disconnect the wallet. Best-effort: callers treat failure as
    /// non-fatal and must not let it block a local logout.
    async fn disconnect(&self) -> Result<()>;
}
