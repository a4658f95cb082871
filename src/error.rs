use thiserror::Error;

/// Failures accessing the token slot.
///
/// All variants mean the same thing to callers: the backing storage could not
/// be used. `store()` and `remove()` propagate these; `retrieve()` and
/// `is_authenticated()` degrade to an absent result instead.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("token storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to access token slot: {0}")]
    Io(#[from] std::io::Error),

    #[error("token slot is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
