// File-backed storage backend
// Keeps every key in a single versioned JSON document on disk

use super::{Storage, StorageError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

const DOCUMENT_VERSION: u32 = 1;

/// On-disk layout of the storage file
#[derive(Debug, Default, Serialize, Deserialize)]
struct StorageDocument {
    /// Format version (for future migration support)
    version: u32,
    /// Stored key-value pairs
    items: BTreeMap<String, String>,
}

/// Durable storage persisted to a JSON file
///
/// Every call re-reads the file so that the document on disk stays the
/// source of truth, the same way `localStorage` behaves across page loads.
/// Writes replace the file through a temporary sibling and a rename. A
/// document that cannot be parsed is moved aside to `<name>.corrupt` on the
/// next write, so one bad file never blocks later writes.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    /// Create a storage handle for the document at `path`
    ///
    /// Nothing is touched on disk until the first write; the parent
    /// directory is created then.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    fn corrupt_path(&self) -> PathBuf {
        self.path.with_extension("json.corrupt")
    }

    fn empty_document() -> StorageDocument {
        StorageDocument {
            version: DOCUMENT_VERSION,
            items: BTreeMap::new(),
        }
    }

    fn load(&self) -> Result<StorageDocument, StorageError> {
        if !self.path.exists() {
            return Ok(Self::empty_document());
        }

        let json = fs::read_to_string(&self.path)?;
        let document: StorageDocument = serde_json::from_str(&json)?;

        if document.version != DOCUMENT_VERSION {
            return Err(StorageError::UnsupportedVersion(document.version));
        }

        Ok(document)
    }

    fn save(&self, document: &StorageDocument) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(document)?;
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn update<F>(&self, apply: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut document = match self.load() {
            Ok(document) => document,
            Err(e @ (StorageError::Json(_) | StorageError::UnsupportedVersion(_))) => {
                let aside = self.corrupt_path();
                warn!(
                    path = %self.path.display(),
                    aside = %aside.display(),
                    error = %e,
                    "Unreadable storage document, starting a fresh one"
                );
                fs::rename(&self.path, &aside)?;
                Self::empty_document()
            }
            Err(e) => return Err(e),
        };
        apply(&mut document.items);
        self.save(&document)
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(self.load()?.items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.update(|items| {
            items.remove(key);
        })
    }

    /// Remove a temporary file left behind by a write that never reached
    /// its rename
    fn flush(&self) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let tmp_path = self.tmp_path();
        if tmp_path.exists() {
            debug!(path = %tmp_path.display(), "Removing stale temporary document");
            fs::remove_file(&tmp_path)?;
        }
        Ok(())
    }
}
