//! Debounced preview regeneration.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use letterpress_core::NewsletterRecord;
use letterpress_render::{render_preview, RenderOptions};

use crate::debounce::Debouncer;

type Sink = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps a rendered preview of the record being edited.
///
/// `refresh` takes a snapshot and renders it after the quiet period, so
/// typing does not re-render on every keystroke. The latest HTML is kept
/// in memory and, if a sink is set, handed to it.
pub struct PreviewPane {
    debouncer: Debouncer,
    options: Arc<RenderOptions>,
    latest: Arc<Mutex<Option<String>>>,
    sink: Option<Sink>,
}

impl PreviewPane {
    pub fn new(delay: Duration, options: RenderOptions) -> Self {
        Self {
            debouncer: Debouncer::new(delay),
            options: Arc::new(options),
            latest: Arc::new(Mutex::new(None)),
            sink: None,
        }
    }

    /// Also deliver each rendered document to `sink`.
    pub fn with_sink<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Schedule a render of `record`.
    pub fn refresh(&self, record: &NewsletterRecord) {
        let record = record.clone();
        let options = Arc::clone(&self.options);
        let latest = Arc::clone(&self.latest);
        let sink = self.sink.clone();

        self.debouncer.schedule(move || {
            let html = render_preview(&record, &options);
            tracing::debug!(id = %record.id, bytes = html.len(), "Preview regenerated");
            if let Some(sink) = &sink {
                sink(&html);
            }
            *latest.lock().unwrap_or_else(PoisonError::into_inner) = Some(html);
        });
    }

    /// Render `record` immediately, dropping any pending refresh.
    pub fn render_now(&self, record: &NewsletterRecord) -> String {
        self.debouncer.cancel();
        let html = render_preview(record, &self.options);
        if let Some(sink) = &self.sink {
            sink(&html);
        }
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = Some(html.clone());
        html
    }

    /// Run a pending refresh now.
    pub fn flush(&self) -> bool {
        self.debouncer.flush()
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// The most recently rendered document.
    pub fn latest(&self) -> Option<String> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl std::fmt::Debug for PreviewPane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewPane")
            .field("debouncer", &self.debouncer)
            .field("has_sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}
