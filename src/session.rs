use tracing::debug;

use crate::error::StoreError;
use crate::store::{FileStore, TokenStore};

/// The session facade other UI code queries.
///
/// Holds no token in memory; every operation goes straight to the injected
/// store, so state lives entirely in persistent storage. The token itself is
/// opaque here — no expiry, format, or signature check is performed locally.
pub struct Session {
    store: Box<dyn TokenStore>,
}

impl Session {
    /// Wrap an injected token store.
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Session backed by the default slot file on disk.
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::new(FileStore::open_default()?))
    }

    /// Persist a token verbatim, overwriting any prior value.
    ///
    /// Called by the login flow on successful authentication. Storage
    /// failure is surfaced to the caller, never swallowed.
    pub fn store(&self, token: &str) -> Result<(), StoreError> {
        self.store.set(token)
    }

    /// The stored token, or `None` if absent.
    ///
    /// A failing backend also reads as `None`: callers here need a
    /// boolean-shaped answer, not an error to handle.
    pub fn retrieve(&self) -> Option<String> {
        match self.store.get() {
            Ok(token) => token,
            Err(e) => {
                debug!(error = %e, "token slot read failed, treating as absent");
                None
            }
        }
    }

    /// Clear the token. Called by the logout flow; no-op success if the
    /// slot is already empty.
    pub fn remove(&self) -> Result<(), StoreError> {
        self.store.remove()
    }

    /// True iff a non-empty token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.retrieve().is_some_and(|token| !token.is_empty())
    }
}
