//! One newsletter being edited.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use letterpress_core::{
    Direction, NewsletterError, NewsletterId, NewsletterRecord, SectionId, SectionKind,
    SectionPatch,
};
use letterpress_render::template_by_id;
use letterpress_render::RenderError;
use letterpress_store::{BlobStore, NewsletterStore};

use crate::config::EditorConfig;
use crate::debounce::Debouncer;
use crate::preview::PreviewPane;
use crate::EditorError;

/// An editing session over a single record.
///
/// Every edit goes through the session, which restarts the auto-save timer
/// and, when a [`PreviewPane`] is attached, the preview timer. Auto-save only
/// writes records that have a subject or at least one section. Explicit
/// saves (`save_draft`, `schedule`, `send`) write immediately and cancel any
/// pending auto-save.
pub struct EditorSession<B: BlobStore + 'static> {
    record: Arc<Mutex<NewsletterRecord>>,
    store: Arc<NewsletterStore<B>>,
    autosave: Debouncer,
    preview: Option<PreviewPane>,
}

impl<B: BlobStore + 'static> EditorSession<B> {
    /// Start a new, unsaved record with the configured default template.
    ///
    /// Fails if that template is not registered.
    pub fn create(
        store: Arc<NewsletterStore<B>>,
        config: &EditorConfig,
    ) -> Result<Self, EditorError> {
        if template_by_id(&config.default_template).is_none() {
            return Err(RenderError::UnknownTemplate(config.default_template.clone()).into());
        }
        let record = NewsletterRecord::new(config.default_template.clone());
        tracing::debug!(id = %record.id, "Created newsletter");
        Ok(Self::with_record(store, record, config))
    }

    /// Open a stored record.
    pub fn open(
        store: Arc<NewsletterStore<B>>,
        id: &NewsletterId,
        config: &EditorConfig,
    ) -> Result<Self, EditorError> {
        let record = store
            .try_get(id)?
            .ok_or_else(|| EditorError::NotFound(id.to_string()))?;
        Ok(Self::with_record(store, record, config))
    }

    /// Open `id` if given, otherwise start a new record.
    pub fn open_or_create(
        store: Arc<NewsletterStore<B>>,
        id: Option<&NewsletterId>,
        config: &EditorConfig,
    ) -> Result<Self, EditorError> {
        match id {
            Some(id) => Self::open(store, id, config),
            None => Self::create(store, config),
        }
    }

    fn with_record(
        store: Arc<NewsletterStore<B>>,
        record: NewsletterRecord,
        config: &EditorConfig,
    ) -> Self {
        Self {
            record: Arc::new(Mutex::new(record)),
            store,
            autosave: Debouncer::new(config.autosave_delay()),
            preview: None,
        }
    }

    /// Attach a preview pane, rendering the current state right away.
    pub fn with_preview(mut self, pane: PreviewPane) -> Self {
        pane.render_now(&self.snapshot());
        self.preview = Some(pane);
        self
    }

    pub fn preview(&self) -> Option<&PreviewPane> {
        self.preview.as_ref()
    }

    pub fn store(&self) -> &NewsletterStore<B> {
        &self.store
    }

    pub fn id(&self) -> NewsletterId {
        self.lock().id.clone()
    }

    /// A copy of the record as it stands.
    pub fn snapshot(&self) -> NewsletterRecord {
        self.lock().clone()
    }

    /// Whether an auto-save is waiting to run.
    pub fn has_pending_save(&self) -> bool {
        self.autosave.is_pending()
    }

    // --- edits ---

    pub fn set_subject(&self, subject: impl Into<String>) {
        self.edit(|record| record.subject = subject.into());
    }

    /// Switch templates. Unknown ids are rejected and leave the record alone.
    pub fn set_template(&self, template_id: &str) -> Result<(), EditorError> {
        if template_by_id(template_id).is_none() {
            return Err(RenderError::UnknownTemplate(template_id.to_string()).into());
        }
        self.edit(|record| record.template_id = template_id.to_string());
        Ok(())
    }

    pub fn add_section(&self, kind: SectionKind) -> SectionId {
        self.edit(|record| record.add_section(kind))
    }

    pub fn update_section(&self, id: &SectionId, patch: SectionPatch) -> Result<(), EditorError> {
        self.try_edit(|record| record.update_section(id, patch))
    }

    pub fn set_section_kind(&self, id: &SectionId, kind: SectionKind) -> Result<(), EditorError> {
        self.try_edit(|record| record.set_section_kind(id, kind))
    }

    /// Move a section. Returns false for boundary moves and unknown ids.
    pub fn move_section(&self, id: &SectionId, direction: Direction) -> bool {
        let moved = self.lock().move_section(id, direction);
        if moved {
            self.changed();
        }
        moved
    }

    pub fn remove_section(&self, id: &SectionId) -> bool {
        let removed = self.lock().remove_section(id);
        if removed {
            self.changed();
        }
        removed
    }

    // --- saves ---

    /// Persist as a draft now.
    pub fn save_draft(&self) -> Result<NewsletterRecord, EditorError> {
        self.commit(|record, now| {
            record.mark_draft(now);
            Ok(())
        })
    }

    /// Persist as scheduled for `at`, which must be in the future.
    pub fn schedule(&self, at: DateTime<Utc>) -> Result<NewsletterRecord, EditorError> {
        self.commit(|record, now| record.mark_scheduled(at, now))
    }

    /// Persist as sent. Fails if a subject or content is missing.
    pub fn send(&self) -> Result<NewsletterRecord, EditorError> {
        self.commit(|record, now| record.mark_sent(now))
    }

    /// Run a pending auto-save and preview refresh now.
    pub fn flush(&self) -> bool {
        if let Some(preview) = &self.preview {
            preview.flush();
        }
        self.autosave.flush()
    }

    // --- internals ---

    fn lock(&self) -> MutexGuard<'_, NewsletterRecord> {
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn edit<T>(&self, f: impl FnOnce(&mut NewsletterRecord) -> T) -> T {
        let out = f(&mut self.lock());
        self.changed();
        out
    }

    fn try_edit(
        &self,
        f: impl FnOnce(&mut NewsletterRecord) -> Result<(), NewsletterError>,
    ) -> Result<(), EditorError> {
        f(&mut self.lock())?;
        self.changed();
        Ok(())
    }

    fn changed(&self) {
        let record = Arc::clone(&self.record);
        let store = Arc::clone(&self.store);
        self.autosave.schedule(move || autosave(&record, &store));

        if let Some(preview) = &self.preview {
            preview.refresh(&self.snapshot());
        }
    }

    fn commit(
        &self,
        f: impl FnOnce(&mut NewsletterRecord, DateTime<Utc>) -> Result<(), NewsletterError>,
    ) -> Result<NewsletterRecord, EditorError> {
        let mut record = self.lock();
        let mut updated = record.clone();
        f(&mut updated, Utc::now())?;

        // The session keeps its state and pending auto-save until the write lands.
        self.store.try_upsert(&updated)?;
        self.autosave.cancel();
        *record = updated;
        tracing::info!(id = %record.id, status = %record.status, "Saved newsletter");
        Ok(record.clone())
    }
}

fn autosave<B: BlobStore>(record: &Mutex<NewsletterRecord>, store: &NewsletterStore<B>) {
    let mut record = record.lock().unwrap_or_else(PoisonError::into_inner);
    if !record.has_content() {
        tracing::debug!(id = %record.id, "Skipping auto-save of empty newsletter");
        return;
    }
    record.touch(Utc::now());
    store.upsert(&record);
    tracing::debug!(id = %record.id, "Auto-saved");
}

impl<B: BlobStore + 'static> std::fmt::Debug for EditorSession<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("id", &self.id())
            .field("autosave", &self.autosave)
            .field("preview", &self.preview)
            .finish_non_exhaustive()
    }
}
