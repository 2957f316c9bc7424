//! Auth backend client for the ChainCred API.

pub mod client;
pub mod error;

pub use client::{AuthBackend, AuthClient};
pub use error::ApiError;
