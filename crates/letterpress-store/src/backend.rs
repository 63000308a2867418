//! Blob backends.
//!
//! A backend stores whole strings under string keys. The newsletter store
//! keeps its entire collection in one blob, so backends never need partial
//! updates.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::StoreError;

/// A string-keyed blob store.
pub trait BlobStore: Send + Sync {
    /// Read the blob under `key`. `Ok(None)` when nothing was written yet.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the blob under `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<B: BlobStore + ?Sized> BlobStore for std::sync::Arc<B> {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

/// Process-local backend for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a blob, e.g. with data written by another client.
    pub fn with_blob(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        self
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let blobs = self.blobs.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(blobs.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut blobs = self.blobs.lock().unwrap_or_else(PoisonError::into_inner);
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
///
/// Writes go to a sibling temp file that is then renamed over the target,
/// so readers never see a half-written blob.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    /// Use `dir`, creating it on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;

        let target = self.path_for(key);
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &target)?;

        tracing::debug!(path = %target.display(), bytes = value.len(), "Wrote blob");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip() {
        let store = MemoryBlobStore::new();
        assert!(store.read("k").unwrap().is_none());
        store.write("k", "v1").unwrap();
        store.write("k", "v2").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_file_store_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path().join("nested"));
        assert!(store.read("newsletters").unwrap().is_none());
    }

    #[test]
    fn test_file_store_creates_dir_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path().join("data"));

        store.write("newsletters", "[]").unwrap();
        store.write("newsletters", "[1]").unwrap();

        assert_eq!(store.read("newsletters").unwrap().as_deref(), Some("[1]"));
        assert!(store.path_for("newsletters").ends_with("data/newsletters.json"));

        let leftovers: Vec<_> = fs::read_dir(store.dir())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
