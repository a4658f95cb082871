//! Storage backends for the session token slot.
//!
//! This module provides:
//! - `TokenStore`: the trait a backend implements
//! - `FileStore`: a JSON slot file under the platform data directory
//! - `KeyringStore`: a slot in the OS keychain
//! - `MemoryStore`: an in-memory slot for tests and embedders

pub mod file;
pub mod keychain;
pub mod memory;

pub use file::FileStore;
pub use keychain::KeyringStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// A durable single-slot store for the session token.
///
/// The slot holds at most one token; writes overwrite, last write wins.
/// Passed into `Session` explicitly so tests can substitute `MemoryStore`
/// for real persistent storage.
pub trait TokenStore: Send + Sync {
    /// Read the slot. Absent is `Ok(None)`, not an error.
    fn get(&self) -> Result<Option<String>, StoreError>;

    /// Write the slot, overwriting any prior value.
    fn set(&self, token: &str) -> Result<(), StoreError>;

    /// Clear the slot. No-op success if already empty.
    fn remove(&self) -> Result<(), StoreError>;
}
