use keyring::Entry;

use crate::error::StoreError;
use crate::store::TokenStore;

/// Service name registered with the OS keychain
const SERVICE_NAME: &str = "foodmap";

/// Keychain entry name for the token slot
const TOKEN_KEY: &str = "auth_token";

/// Token slot held in the OS keychain.
///
/// Preferred over `FileStore` where a keychain is available, since the token
/// is a bearer credential. A missing entry reads as absent; any other
/// keychain failure surfaces as `StoreError::Unavailable`.
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    pub fn new() -> Self {
        Self::with_service(SERVICE_NAME)
    }

    /// Use a non-default keychain service name.
    pub fn with_service(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(&self) -> Result<Entry, StoreError> {
        Entry::new(&self.service, TOKEN_KEY).map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for KeyringStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(StoreError::Unavailable(e.to_string())),
        }
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        self.entry()?
            .set_password(token)
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn remove(&self) -> Result<(), StoreError> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(StoreError::Unavailable(e.to_string())),
        }
    }
}
