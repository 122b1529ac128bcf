//! Process-wide session state.
//!
//! The store holds at most one [`Identity`]. It is shared by `Arc` between the
//! façade and whoever renders the session; writes replace the identity wholesale
//! so readers never observe a half-updated value. A store opened with
//! [`SessionStore::persistent`] also mirrors every change into a [`SessionFile`].

use std::sync::{PoisonError, RwLock};

use fin_core::Identity;
use fin_core::enums::SessionState;

use crate::session_file::SessionFile;

#[derive(Debug, Default)]
pub struct SessionStore {
    auth_data: RwLock<Option<Identity>>,
    file: Option<SessionFile>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a store backed by `file`, restoring any identity saved there.
    #[must_use]
    pub fn persistent(file: SessionFile) -> Self {
        let restored = file.load();
        if let Some(identity) = &restored {
            tracing::debug!(uid = %identity.uid, path = %file.path().display(), "session restored");
        }
        Self {
            auth_data: RwLock::new(restored),
            file: Some(file),
        }
    }

    /// Mark the session authenticated as `identity`, replacing any previous one.
    pub fn set_auth_data(&self, identity: Identity) {
        let mut auth_data = self.auth_data.write().unwrap_or_else(PoisonError::into_inner);
        tracing::debug!(
            uid = %identity.uid,
            provider = %identity.provider,
            replaced = auth_data.is_some(),
            "session authenticated"
        );
        if let Some(file) = &self.file {
            if let Err(error) = file.store(&identity) {
                tracing::warn!(%error, "session kept in memory only");
            }
        }
        *auth_data = Some(identity);
    }

    /// Current identity, or `None` when anonymous.
    #[must_use]
    pub fn get_auth_data(&self) -> Option<Identity> {
        self.auth_data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Return to anonymous. Destroying an anonymous session is a no-op.
    pub fn destroy(&self) {
        let mut auth_data = self.auth_data.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(file) = &self.file {
            if let Err(error) = file.delete() {
                tracing::warn!(%error, "stale session file left behind");
            }
        }
        if let Some(identity) = auth_data.take() {
            tracing::debug!(uid = %identity.uid, "session destroyed");
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.is_authenticated() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.auth_data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
