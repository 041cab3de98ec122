//! Persistent key-value backend stored as one JSON document on disk.

use std::collections::BTreeMap;
use std::io;
use std::sync::{Mutex, MutexGuard};

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::warn;

use super::atomic_io::replace_file;
use crate::domain::ports::{KeyValueStore, StorageError};

/// Name of the document inside the storage directory.
pub const DOCUMENT_NAME: &str = "local_storage.json";

type Entries = BTreeMap<String, String>;

/// Key-value store persisted to `<root>/local_storage.json`.
///
/// Each mutation rewrites the whole document atomically. A missing or
/// unparsable document reads as empty, so a damaged file costs the session
/// rather than blocking start-up. Writers in other processes race on a
/// last-writer-wins basis.
#[derive(Debug)]
pub struct FileKeyValueStore {
    dir: Mutex<Dir>,
}

impl FileKeyValueStore {
    /// Open (creating if needed) the storage directory at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the directory cannot be created
    /// or opened.
    pub fn open(root: &Utf8Path) -> Result<Self, StorageError> {
        Dir::create_ambient_dir_all(root, ambient_authority())
            .and_then(|()| Dir::open_ambient_dir(root, ambient_authority()))
            .map(Self::from_dir)
            .map_err(|err| StorageError::backend(format!("{root}: {err}")))
    }

    /// Use an already opened capability directory.
    pub fn from_dir(dir: Dir) -> Self {
        Self {
            dir: Mutex::new(dir),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Dir>, StorageError> {
        self.dir
            .lock()
            .map_err(|_| StorageError::backend("file store lock poisoned"))
    }

    fn mutate(&self, apply: impl FnOnce(&mut Entries)) -> Result<(), StorageError> {
        let dir = self.lock()?;
        let mut entries = load(&dir)?;
        apply(&mut entries);
        save(&dir, &entries)
    }
}

fn load(dir: &Dir) -> Result<Entries, StorageError> {
    let text = match dir.read_to_string(DOCUMENT_NAME) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Entries::new()),
        Err(err) => return Err(StorageError::backend(err.to_string())),
    };
    Ok(serde_json::from_str(&text).unwrap_or_else(|err| {
        warn!(
            document = DOCUMENT_NAME,
            error = %err,
            "storage document unreadable; starting empty"
        );
        Entries::new()
    }))
}

fn save(dir: &Dir, entries: &Entries) -> Result<(), StorageError> {
    let encoded = serde_json::to_vec_pretty(entries)
        .map_err(|err| StorageError::serialization(err.to_string()))?;
    replace_file(dir, Utf8Path::new(DOCUMENT_NAME), &encoded)
        .map_err(|err| StorageError::backend(err.to_string()))
}

impl KeyValueStore for FileKeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let dir = self.lock()?;
        Ok(load(&dir)?.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.mutate(|entries| {
            entries.insert(key.to_owned(), value.to_owned());
        })
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.mutate(|entries| {
            entries.remove(key);
        })
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.mutate(BTreeMap::clear)
    }
}
