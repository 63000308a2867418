//! `localStorage` backend.

use gloo_storage::{LocalStorage, Storage};
use letterpress_store::{BlobStore, NewsletterStore, StoreError};

/// Blob store over `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBlobStore;

impl BlobStore for LocalStorageBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StoreError::Backend(format!("localStorage read failed: {:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("localStorage write failed: {:?}", e)))
    }
}

/// The newsletter collection in this browser.
pub fn newsletters() -> NewsletterStore<LocalStorageBlobStore> {
    NewsletterStore::new(LocalStorageBlobStore)
}
