//! The newsletter collection.

use letterpress_core::{sort_by_recent, NewsletterId, NewsletterRecord, NewsletterSummary};

use crate::backend::BlobStore;
use crate::StoreError;

/// Key the collection is stored under.
pub const DEFAULT_KEY: &str = "newsletters";

/// All newsletters, kept as one JSON array in a [`BlobStore`].
///
/// Every call reads the whole blob; every mutation rewrites it. The plain
/// methods never fail: read errors yield an empty collection and write
/// errors are logged and dropped. Use the `try_*` methods to observe
/// failures.
#[derive(Debug)]
pub struct NewsletterStore<B> {
    backend: B,
    key: String,
}

impl<B: BlobStore> NewsletterStore<B> {
    /// Store under the default `newsletters` key.
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_KEY)
    }

    /// Store under a custom key.
    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // --- fallible API ---

    /// All records, in stored order. Section orders are normalized on load.
    pub fn try_list(&self) -> Result<Vec<NewsletterRecord>, StoreError> {
        let Some(blob) = self.backend.read(&self.key)? else {
            return Ok(Vec::new());
        };
        if blob.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut records: Vec<NewsletterRecord> = serde_json::from_str(&blob)?;
        for record in &mut records {
            record.normalize_sections();
        }
        Ok(records)
    }

    /// The record with `id`, if stored.
    pub fn try_get(&self, id: &NewsletterId) -> Result<Option<NewsletterRecord>, StoreError> {
        Ok(self.try_list()?.into_iter().find(|r| &r.id == id))
    }

    /// Replace the record with the same id, or append it.
    pub fn try_upsert(&self, record: &NewsletterRecord) -> Result<(), StoreError> {
        let mut records = self.try_list()?;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        self.write_all(&records)
    }

    /// Remove the record with `id`. Returns whether one was removed.
    pub fn try_delete(&self, id: &NewsletterId) -> Result<bool, StoreError> {
        let mut records = self.try_list()?;
        let before = records.len();
        records.retain(|r| &r.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.write_all(&records)?;
        Ok(true)
    }

    /// Summaries, most recently updated first.
    pub fn try_summaries(&self) -> Result<Vec<NewsletterSummary>, StoreError> {
        let mut summaries: Vec<_> = self.try_list()?.iter().map(NewsletterSummary::from).collect();
        sort_by_recent(&mut summaries);
        Ok(summaries)
    }

    fn write_all(&self, records: &[NewsletterRecord]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(records)?;
        self.backend.write(&self.key, &blob)
    }

    // --- graceful API ---

    /// All records; empty if the blob cannot be read.
    pub fn list(&self) -> Vec<NewsletterRecord> {
        self.try_list().unwrap_or_else(|e| {
            tracing::error!(key = %self.key, error = %e, "Failed to load newsletters");
            Vec::new()
        })
    }

    /// The record with `id`; `None` if absent or unreadable.
    pub fn get(&self, id: &NewsletterId) -> Option<NewsletterRecord> {
        self.try_get(id).unwrap_or_else(|e| {
            tracing::error!(key = %self.key, id = %id, error = %e, "Failed to load newsletter");
            None
        })
    }

    /// Upsert, logging failures. An unreadable blob is left untouched.
    pub fn upsert(&self, record: &NewsletterRecord) {
        match self.try_upsert(record) {
            Ok(()) => tracing::debug!(id = %record.id, "Saved newsletter"),
            Err(e) => {
                tracing::error!(key = %self.key, id = %record.id, error = %e, "Failed to save newsletter")
            }
        }
    }

    /// Delete, logging failures. An unreadable blob is left untouched.
    pub fn delete(&self, id: &NewsletterId) {
        match self.try_delete(id) {
            Ok(true) => tracing::debug!(id = %id, "Deleted newsletter"),
            Ok(false) => tracing::warn!(id = %id, "Nothing to delete"),
            Err(e) => {
                tracing::error!(key = %self.key, id = %id, error = %e, "Failed to delete newsletter")
            }
        }
    }

    /// Summaries, most recently updated first; empty if unreadable.
    pub fn summaries(&self) -> Vec<NewsletterSummary> {
        self.try_summaries().unwrap_or_else(|e| {
            tracing::error!(key = %self.key, error = %e, "Failed to load newsletters");
            Vec::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{FileBlobStore, MemoryBlobStore};
    use chrono::{Duration, TimeZone, Utc};
    use letterpress_core::{NewsletterStatus, SectionKind};

    fn record(subject: &str) -> NewsletterRecord {
        let mut record = NewsletterRecord::new("simple");
        record.subject = subject.to_string();
        record
    }

    #[test]
    fn test_empty_store() {
        let store = NewsletterStore::new(MemoryBlobStore::new());
        assert!(store.list().is_empty());
        assert!(store.get(&NewsletterId::new("nope")).is_none());
    }

    #[test]
    fn test_upsert_appends_then_replaces() {
        let store = NewsletterStore::new(MemoryBlobStore::new());
        let mut first = record("First");
        store.upsert(&first);
        store.upsert(&record("Second"));
        assert_eq!(store.list().len(), 2);

        first.subject = "First, edited".to_string();
        store.upsert(&first);

        let records = store.list();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, first.id);
        assert_eq!(records[0].subject, "First, edited");
        assert_eq!(store.get(&first.id).unwrap().subject, "First, edited");
    }

    #[test]
    fn test_delete() {
        let store = NewsletterStore::new(MemoryBlobStore::new());
        let a = record("A");
        let b = record("B");
        store.upsert(&a);
        store.upsert(&b);

        assert!(store.try_delete(&a.id).unwrap());
        assert!(!store.try_delete(&a.id).unwrap());
        let ids: Vec<_> = store.list().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![b.id]);
    }

    #[test]
    fn test_blob_is_camel_case_array() {
        let store = NewsletterStore::new(MemoryBlobStore::new());
        let mut r = record("Hello");
        r.add_section(SectionKind::Text);
        store.upsert(&r);

        let blob = store.backend().read(DEFAULT_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
        let first = &value.as_array().unwrap()[0];
        assert_eq!(first["templateId"], "simple");
        assert_eq!(first["status"], "draft");
        assert!(first["createdAt"].is_string());
        assert_eq!(first["sections"][0]["type"], "text");
    }

    #[test]
    fn test_loads_browser_written_blob() {
        let blob = r#"[{
            "id": "abc123",
            "subject": "From the browser",
            "sections": [
                {"id": "s2", "type": "button", "content": "Go", "order": 5, "metadata": {"buttonUrl": "https://example.com"}},
                {"id": "s1", "type": "text", "content": "Hi", "order": 2, "metadata": {}}
            ],
            "templateId": "modern",
            "status": "scheduled",
            "createdAt": "2024-03-01T10:00:00.000Z",
            "updatedAt": "2024-03-02T10:00:00.000Z",
            "scheduledAt": "2024-04-01T09:00:00.000Z"
        }]"#;
        let store = NewsletterStore::new(MemoryBlobStore::new().with_blob(DEFAULT_KEY, blob));

        let record = store.get(&NewsletterId::new("abc123")).unwrap();
        assert_eq!(record.status, NewsletterStatus::Scheduled);
        assert!(record.scheduled_at.is_some());
        let orders: Vec<_> = record.sections.iter().map(|s| (s.id.as_str().to_string(), s.order)).collect();
        assert_eq!(orders, vec![("s1".to_string(), 0), ("s2".to_string(), 1)]);
    }

    #[test]
    fn test_corrupt_blob_degrades_and_is_not_overwritten() {
        let store = NewsletterStore::new(MemoryBlobStore::new().with_blob(DEFAULT_KEY, "{not json"));

        assert!(store.list().is_empty());
        assert!(store.summaries().is_empty());
        assert!(matches!(store.try_list(), Err(StoreError::Serialization(_))));

        store.upsert(&record("Lost"));
        store.delete(&NewsletterId::new("x"));
        assert_eq!(
            store.backend().read(DEFAULT_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_unknown_status_keeps_collection_usable() {
        let blob = r#"[
            {"id": "a1", "subject": "Odd", "sections": [], "templateId": "simple",
             "status": "archived", "createdAt": "2024-03-01T10:00:00Z", "updatedAt": "2024-03-01T10:00:00Z"},
            {"id": "b2", "subject": "Fine", "sections": [], "templateId": "simple",
             "status": "sent", "createdAt": "2024-03-01T10:00:00Z", "updatedAt": "2024-03-02T10:00:00Z"}
        ]"#;
        let store = NewsletterStore::new(MemoryBlobStore::new().with_blob(DEFAULT_KEY, blob));

        let records = store.try_list().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, NewsletterStatus::Draft);
        assert_eq!(records[1].status, NewsletterStatus::Sent);

        store.try_upsert(&record("New")).unwrap();
        assert!(store.try_delete(&NewsletterId::new("b2")).unwrap());
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_summaries_newest_first() {
        let store = NewsletterStore::new(MemoryBlobStore::new());
        let base = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        for (subject, offset) in [("old", 0), ("newest", 20), ("middle", 10)] {
            let mut r = record(subject);
            r.touch(base + Duration::minutes(offset));
            store.upsert(&r);
        }

        let subjects: Vec<_> = store.summaries().into_iter().map(|s| s.subject).collect();
        assert_eq!(subjects, vec!["newest", "middle", "old"]);
    }

    #[test]
    fn test_custom_key_on_file_backend() {
        let dir = tempfile::tempdir().unwrap();
        let store = NewsletterStore::with_key(FileBlobStore::new(dir.path()), "team");
        let r = record("On disk");
        store.upsert(&r);

        assert!(dir.path().join("team.json").exists());

        let reopened = NewsletterStore::with_key(FileBlobStore::new(dir.path()), "team");
        assert_eq!(reopened.get(&r.id).unwrap().subject, "On disk");
    }
}
