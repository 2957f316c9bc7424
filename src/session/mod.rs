//! Session lifecycle management.
//!
//! This module provides:
//! - `SessionManager`: owns session state and drives restore/login/logout
//! - `SessionState`: the logged-out / pending / logged-in lifecycle
//! - `SessionError`: typed failures surfaced to the UI
//!
//! The manager is the only writer of session state; the UI observes it
//! through `SessionManager::subscribe`.

pub mod error;
pub mod manager;
pub mod state;

pub use error::SessionError;
pub use manager::{SessionManager, AUTH_TOKEN_KEY};
pub use state::SessionState;
