use std::sync::Mutex;

use crate::error::StoreError;
use crate::store::TokenStore;

/// In-memory token slot.
///
/// No durability; exists so tests and embedders can run the `Session` facade
/// without touching real persistent storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, StoreError> {
        self.slot
            .lock()
            .map_err(|_| StoreError::Unavailable("token slot mutex poisoned".to_string()))
    }
}

impl TokenStore for MemoryStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.clone())
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        *self.lock()? = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), StoreError> {
        *self.lock()? = None;
        Ok(())
    }
}
