//! Durable key-value storage for the session credential.
//!
//! This module provides:
//! - `KeyValueStore`: the storage seam the session manager writes through
//! - `KeyringStore`: OS-keychain storage via the keyring crate
//! - `FileStore`: file-per-key storage for platforms without a keychain
//! - `MemoryStore`: in-memory storage for tests and ephemeral sessions
//!
//! The store is the source of truth across process restarts: whatever it
//! holds under the auth key is what `restore()` asks the backend to validate.

pub mod file;
pub mod keyring;
pub mod memory;

pub use file::FileStore;
pub use keyring::KeyringStore;
pub use memory::MemoryStore;

use anyhow::Result;

/// Durable string storage keyed by string.
///
/// Implementations must treat a missing key as `Ok(None)` on reads and as a
/// no-op on deletes; only genuine storage failures surface as errors.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn delete(&self, key: &str) -> Result<()>;
}

// Stores are commonly shared between the session manager and the rest of
// the app.
impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }
}
