//! Durable key-value storage
//!
//! A small string-to-string store with the same contract as browser
//! `localStorage`: values survive restarts, keys are read and written
//! individually, and a missing key is not an error.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors that can occur while reading or writing durable storage
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying file could not be read or written
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored document is not valid JSON
    #[error("Storage document is malformed: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored document was written by an incompatible version
    #[error("Unsupported storage version: {0}")]
    UnsupportedVersion(u32),

    /// A previous writer panicked while holding the storage lock
    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Durable string key-value storage
///
/// Implementations must be shareable across threads: rehydration reads run
/// on a blocking task while the UI thread keeps a handle.
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key succeeds
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Finish outstanding storage work before the host exits
    ///
    /// Writes are synchronous, so backends without leftover state keep this
    /// default.
    fn flush(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
