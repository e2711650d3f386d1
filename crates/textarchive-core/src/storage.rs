//! Key-value persistence for client state.
//!
//! The session survives restarts through a [`KeyValueStore`]. Multi-key
//! writes go through [`KeyValueStore::set_many`] / [`KeyValueStore::remove_many`]
//! so a backend can apply them as one operation.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;

use crate::error::StorageError;

pub type StorageResult<T> = Result<T, StorageError>;

/// String key-value persistence.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write every entry or none of them.
    fn set_many(&self, entries: &[(&str, &str)]) -> StorageResult<()>;

    /// Remove every key; missing keys are not an error.
    fn remove_many(&self, keys: &[&str]) -> StorageResult<()>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.set_many(&[(key, value)])
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.remove_many(&[key])
    }
}

/// In-process store, used in tests and for sessions that must not touch disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set_many(&self, new_entries: &[(&str, &str)]) -> StorageResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        for (key, value) in new_entries {
            entries.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> StorageResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}

/// JSON object on disk, rewritten whole on every change.
///
/// Writes go to a uniquely named temp file in the same directory which is
/// then renamed over the target, so readers never see a half-written file.
/// A file that is not valid JSON is an error on read and is replaced on the
/// next write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StorageResult<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent,
            None => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(write_err)?;
        let body = serde_json::to_string_pretty(entries).map_err(StorageError::Serialize)?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(body.as_bytes()).map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;
        tracing::debug!(path = %self.path.display(), keys = entries.len(), "Saved key-value store");
        Ok(())
    }

    /// Like [`FileStore::load`], but a corrupt file reads as empty. The flag
    /// is set when the file was discarded and must be rewritten.
    fn load_or_discard(&self) -> StorageResult<(BTreeMap<String, String>, bool)> {
        match self.load() {
            Ok(entries) => Ok((entries, false)),
            Err(e @ StorageError::Corrupt { .. }) => {
                tracing::warn!(error = %e, "Discarding unreadable key-value store");
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(self.load()?.get(key).cloned())
    }

    fn set_many(&self, new_entries: &[(&str, &str)]) -> StorageResult<()> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let (mut entries, _) = self.load_or_discard()?;
        for (key, value) in new_entries {
            entries.insert(key.to_string(), value.to_string());
        }
        self.save(&entries)
    }

    fn remove_many(&self, keys: &[&str]) -> StorageResult<()> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let (mut entries, mut changed) = self.load_or_discard()?;
        for key in keys {
            changed |= entries.remove(*key).is_some();
        }
        if !changed {
            return Ok(());
        }
        self.save(&entries)
    }
}
