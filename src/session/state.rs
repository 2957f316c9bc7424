use crate::models::Credential;

/// Authentication lifecycle of the single session this process owns.
///
/// Starts `LoggedOut`, cycles for the life of the process, never terminal.
/// `Pending` only exists while a `login` call is in flight - it always
/// resolves to `LoggedOut` or `LoggedIn` before the call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    Pending,
    LoggedIn(Credential),
}

impl SessionState {
    /// `true` iff a credential is held.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::LoggedIn(_))
    }

    /// The held credential, if logged in.
    pub fn credential(&self) -> Option<&Credential> {
        match self {
            SessionState::LoggedIn(credential) => Some(credential),
            _ => None,
        }
    }
}
