//! Key-value backends holding persisted records.
//!
//! Records live under fixed, well-known keys. Writes replace whatever was
//! stored before (last write wins) and nothing expires.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::future::Future;
use thiserror::Error;

/// Errors raised by a key-value backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored value no longer decodes into a valid record
    #[error("record under `{key}` is corrupt: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The record could not be encoded
    #[error("failed to encode record: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Minimal string-keyed storage.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` when absent.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Delete `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}
