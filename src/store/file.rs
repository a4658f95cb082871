use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::store::TokenStore;

/// Slot file name under the application data directory
const SLOT_FILE: &str = "auth_token.json";

/// Application name used for the data directory path
const APP_NAME: &str = "foodmap";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenSlot {
    token: String,
}

/// Token slot persisted as a small JSON file.
///
/// Survives restarts at the same path; a missing file reads as absent.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open a store backed by an explicit slot file path.
    pub fn open(path: PathBuf) -> Self {
        Self { path }
    }

    /// Open the store at the platform default location
    /// (`<data_dir>/foodmap/auth_token.json`).
    pub fn open_default() -> Result<Self, StoreError> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| StoreError::Unavailable("could not find data directory".to_string()))?;
        Ok(Self {
            path: data_dir.join(APP_NAME).join(SLOT_FILE),
        })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        let slot: TokenSlot = serde_json::from_str(&contents)?;
        Ok(Some(slot.token))
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let slot = TokenSlot {
            token: token.to_string(),
        };
        let contents = serde_json::to_string_pretty(&slot)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    fn remove(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::open(dir.path().join(SLOT_FILE))
    }

    #[test]
    fn test_missing_file_reads_absent() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);
        assert_eq!(store.get().expect("get"), None);
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);
        store.set("abc123").expect("set");
        assert_eq!(store.get().expect("get").as_deref(), Some("abc123"));
    }

    #[test]
    fn test_value_survives_reopening() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(SLOT_FILE);
        FileStore::open(path.clone()).set("tok1").expect("set");

        let reopened = FileStore::open(path);
        assert_eq!(reopened.get().expect("get").as_deref(), Some("tok1"));
    }

    #[test]
    fn test_set_creates_parent_directories() {
        let dir = tempdir().expect("tempdir");
        let store = FileStore::open(dir.path().join("nested").join(SLOT_FILE));
        store.set("tok1").expect("set");
        assert_eq!(store.get().expect("get").as_deref(), Some("tok1"));
    }

    #[test]
    fn test_remove_clears_slot() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);
        store.set("tok1").expect("set");
        store.remove().expect("remove");
        assert_eq!(store.get().expect("get"), None);
    }

    #[test]
    fn test_remove_on_empty_slot_is_noop() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);
        store.remove().expect("remove on empty slot");
        store.remove().expect("remove again");
    }

    #[test]
    fn test_corrupt_slot_file_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(SLOT_FILE);
        std::fs::write(&path, "not json").expect("write");

        let store = FileStore::open(path);
        assert!(matches!(store.get(), Err(StoreError::Corrupt(_))));
    }
}
