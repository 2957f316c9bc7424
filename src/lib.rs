//! Core library for ChainCred - wallet-based session management.
//!
//! This crate owns the authentication lifecycle for the ChainCred client:
//! restoring a cached credential at startup, driving the wallet
//! challenge/sign/verify login flow, persisting the resulting bearer token,
//! and exposing a single authenticated/unauthenticated signal to the UI.
//!
//! The UI never touches session state directly. It calls
//! [`SessionManager::login`], [`SessionManager::logout`] and
//! [`SessionManager::restore`], and watches state changes through
//! [`SessionManager::subscribe`].

pub mod api;
pub mod config;
pub mod models;
pub mod session;
pub mod storage;
pub mod wallet;

pub use api::{ApiError, AuthBackend, AuthClient};
pub use config::Config;
pub use models::{Challenge, Credential, SignedChallenge};
pub use session::{SessionError, SessionManager, SessionState, AUTH_TOKEN_KEY};
pub use storage::{FileStore, KeyValueStore, KeyringStore, MemoryStore};
pub use wallet::{WalletIdentity, WalletProvider};
