//! Session manager: the single owner of authentication state.
//!
//! Drives the wallet login flow (challenge -> sign -> verify), restores a
//! persisted credential at startup, and clears everything on logout. All
//! state transitions happen here; the UI only observes.

use std::sync::{Mutex, PoisonError};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::api::AuthBackend;
use crate::models::{Credential, SignedChallenge};
use crate::storage::KeyValueStore;
use crate::wallet::WalletProvider;

use super::{SessionError, SessionState};

/// Well-known storage key the session credential lives under.
pub const AUTH_TOKEN_KEY: &str = "auth.jwt";

/// Owns the in-memory [`SessionState`] and the durable credential entry.
///
/// One logical session per process. Login attempts are serialized: a second
/// `login` while one is in flight fails with
/// [`SessionError::ConcurrentLogin`] instead of racing two challenge/verify
/// sequences. Each attempt carries a generation number; `logout` bumps the
/// generation so a stale attempt resolving afterwards cannot resurrect a
/// logged-in state.
pub struct SessionManager<B, S> {
    backend: B,
    store: S,
    state_tx: watch::Sender<SessionState>,
    login_gate: tokio::sync::Mutex<()>,
    generation: Mutex<u64>,
}

impl<B, S> SessionManager<B, S>
where
    B: AuthBackend,
    S: KeyValueStore,
{
    pub fn new(backend: B, store: S) -> Self {
        let (state_tx, _) = watch::channel(SessionState::LoggedOut);
        Self {
            backend,
            store,
            state_tx,
            login_gate: tokio::sync::Mutex::new(()),
            generation: Mutex::new(0),
        }
    }

    /// Watch session state changes. The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    /// `true` iff the session currently holds a credential.
    pub fn is_authenticated(&self) -> bool {
        self.state_tx.borrow().is_authenticated()
    }

    /// Re-derive session state from the store and the backend.
    ///
    /// Runs at process start. A stored credential counts only if the backend
    /// confirms it; on a rejected or unverifiable credential the stored
    /// value is cleared and the session stays logged out. Failures are
    /// logged, never surfaced - an unreachable backend means not logged in.
    pub async fn restore(&self) -> SessionState {
        let attempt = self.begin_attempt();

        let stored = match self.store.get(AUTH_TOKEN_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "Failed to read stored credential, treating as absent");
                None
            }
        };

        let Some(token) = stored else {
            debug!("No stored credential");
            self.commit_if_current(attempt, SessionState::LoggedOut);
            return self.state();
        };

        let credential = Credential::new(token);
        match self.backend.validate(&credential).await {
            Ok(true) => {
                info!("Restored session from stored credential");
                self.commit_if_current(attempt, SessionState::LoggedIn(credential));
            }
            Ok(false) => {
                info!("Stored credential rejected by backend, clearing");
                self.clear_stored();
                self.commit_if_current(attempt, SessionState::LoggedOut);
            }
            Err(e) => {
                // Fail closed: an unverifiable credential grants nothing.
                warn!(error = %e, "Credential validation failed, clearing");
                self.clear_stored();
                self.commit_if_current(attempt, SessionState::LoggedOut);
            }
        }

        self.state()
    }

    /// Run one full login attempt against the connected wallet.
    ///
    /// Sequential, single attempt: challenge, sign, verify, persist. Every
    /// failure resolves the state back to logged out before the error is
    /// returned; the challenge is discarded on any failure and a retry
    /// requests a fresh one. The credential is persisted only on full
    /// success.
    pub async fn login<W>(&self, wallet: &W) -> Result<Credential, SessionError>
    where
        W: WalletProvider + ?Sized,
    {
        let _gate = self
            .login_gate
            .try_lock()
            .map_err(|_| SessionError::ConcurrentLogin)?;

        let identity = wallet.active_identity().ok_or(SessionError::NoWallet)?;

        let attempt = self.begin_attempt();
        self.commit_if_current(attempt, SessionState::Pending);
        info!(account = %identity.display_name(), chain_id = identity.chain_id, "Starting wallet login");

        let challenge = match self.backend.issue_challenge(&identity).await {
            Ok(challenge) => challenge,
            Err(e) => {
                self.resolve_logged_out(attempt);
                return Err(SessionError::Challenge(e));
            }
        };

        let signature = match wallet.sign(&challenge).await {
            Ok(signature) => signature,
            Err(e) => {
                // Challenge is dropped here; it is single-use and must not
                // be offered for signing again.
                self.resolve_logged_out(attempt);
                return Err(SessionError::Signature(e));
            }
        };

        let signed = SignedChallenge::new(challenge, signature);
        let credential = match self.backend.verify(signed).await {
            Ok(credential) => credential,
            Err(e) => {
                self.resolve_logged_out(attempt);
                return Err(SessionError::Verification(e));
            }
        };

        if !self.is_current(attempt) {
            debug!("Login attempt superseded, discarding credential");
            return Err(SessionError::Superseded);
        }

        if let Err(e) = self.store.set(AUTH_TOKEN_KEY, credential.as_str()) {
            self.resolve_logged_out(attempt);
            return Err(SessionError::Storage(e));
        }

        if !self.commit_if_current(attempt, SessionState::LoggedIn(credential.clone())) {
            // A logout raced the persist; undo it.
            self.clear_stored();
            return Err(SessionError::Superseded);
        }

        info!("Login complete");
        Ok(credential)
    }

    /// Clear the session: stored credential, wallet connection, state.
    ///
    /// Never fails from the caller's perspective and is idempotent - when
    /// already logged out it still clears storage defensively. A wallet
    /// disconnect failure is logged and does not block the local logout.
    pub async fn logout<W>(&self, wallet: &W)
    where
        W: WalletProvider + ?Sized,
    {
        // Supersede any in-flight login before touching shared state.
        let attempt = self.begin_attempt();

        self.clear_stored();

        if let Err(e) = wallet.disconnect().await {
            warn!(error = %e, "Wallet disconnect failed, continuing local logout");
        }

        // A login that started after this logout owns the state by now;
        // publishing over its transitions would make the stream non-monotone.
        if self.commit_if_current(attempt, SessionState::LoggedOut) {
            info!("Logged out");
        }
    }

    fn clear_stored(&self) {
        if let Err(e) = self.store.delete(AUTH_TOKEN_KEY) {
            warn!(error = %e, "Failed to clear stored credential");
        }
    }

    /// Resolve a failed attempt to logged out. A superseded attempt writes
    /// nothing - the logout that superseded it already owns the state.
    fn resolve_logged_out(&self, attempt: u64) {
        self.commit_if_current(attempt, SessionState::LoggedOut);
    }

    /// Start a new attempt generation, invalidating older in-flight ones.
    fn begin_attempt(&self) -> u64 {
        let mut generation = self
            .generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *generation += 1;
        *generation
    }

    fn is_current(&self, attempt: u64) -> bool {
        *self
            .generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            == attempt
    }

    /// Publish `next` only if `attempt` is still the newest generation.
    /// Holds the generation lock across the write so a logout cannot slip
    /// between the check and the publish.
    fn commit_if_current(&self, attempt: u64, next: SessionState) -> bool {
        let generation = self
            .generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if *generation != attempt {
            return false;
        }
        self.state_tx.send_replace(next);
        true
    }
}
