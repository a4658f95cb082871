//! Session token storage for the foodmap client.
//!
//! This crate provides:
//! - `Session`: a four-operation facade over a single durable token slot,
//!   queried by UI code to decide whether authenticated views are shown
//! - `TokenStore`: the storage seam, with file, OS keychain, and in-memory
//!   backends
//!
//! The token is an opaque bearer credential issued by the server; this crate
//! never inspects its contents. Presence of a non-empty token is the only
//! signal of "authenticated" — validity is the server's concern.

pub mod error;
pub mod session;
pub mod store;

pub use error::StoreError;
pub use session::Session;
pub use store::{FileStore, KeyringStore, MemoryStore, TokenStore};
