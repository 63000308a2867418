//! The newsletter editor.
//!
//! Every change to the record restarts two timers: the preview re-renders
//! after a short pause and the record is auto-saved after a longer one.
//! Explicit saves write at once and drop any pending auto-save. A pending
//! auto-save is written when the editor is left, by any route.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use letterpress_core::{NewsletterError, NewsletterId, NewsletterRecord};
use letterpress_render::{render_preview, RenderOptions, DEFAULT_TEMPLATE_ID};
use letterpress_store::{BlobStore, NewsletterStore};

use super::{Actions, EmailPreview, MetadataForm, Notice, SectionEditor, TemplateSelector};
use crate::storage;
use crate::timer::{Debounce, AUTOSAVE_DELAY, PREVIEW_DELAY};

/// Write an edited record unless it is still empty.
fn autosave<B: BlobStore>(
    record: &mut NewsletterRecord,
    store: &NewsletterStore<B>,
    now: DateTime<Utc>,
) {
    if !record.has_content() {
        return;
    }
    record.touch(now);
    store.upsert(record);
}

/// Persist the outcome of an explicit save. `Err` carries the message to show.
fn persist<B: BlobStore>(
    store: &NewsletterStore<B>,
    result: Result<NewsletterRecord, NewsletterError>,
) -> Result<NewsletterRecord, String> {
    let updated = result.map_err(|e| e.to_string())?;
    match store.try_upsert(&updated) {
        Ok(()) => Ok(updated),
        Err(e) => {
            tracing::error!(id = %updated.id, error = %e, "Failed to save newsletter");
            Err(format!("Could not save: {}", e))
        }
    }
}

/// Whether an auto-save is owed. Owed saves run when the owner is cleaned up.
#[derive(Clone, Copy)]
struct PendingSave {
    owed: StoredValue<bool>,
}

impl PendingSave {
    fn new(save: impl Fn() + Send + Sync + 'static) -> Self {
        let pending = Self {
            owed: StoredValue::new(false),
        };
        on_cleanup(move || {
            if pending.take() {
                save();
            }
        });
        pending
    }

    fn mark(&self) {
        self.owed.set_value(true);
    }

    /// Clear the flag, returning whether a save was owed.
    fn take(&self) -> bool {
        self.owed.try_update_value(std::mem::take).unwrap_or(false)
    }
}

#[component]
pub fn EditorView(id: Option<NewsletterId>, #[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let initial = id
        .as_ref()
        .and_then(|id| storage::newsletters().get(id))
        .unwrap_or_else(|| NewsletterRecord::new(DEFAULT_TEMPLATE_ID));
    let options = StoredValue::new(RenderOptions::default());

    let preview_html = RwSignal::new(render_preview(&initial, &options.get_value()));
    let record = RwSignal::new(initial);
    let notice = RwSignal::new(None::<Notice>);

    let autosave_timer = Debounce::new();
    let preview_timer = Debounce::new();
    let save_now = move || {
        record.try_update_untracked(|r| autosave(r, &storage::newsletters(), Utc::now()));
    };
    let pending = PendingSave::new(save_now);
    // Set while an explicit save writes the record back, so it is not
    // queued for auto-save again.
    let committing = StoredValue::new(false);

    Effect::new(move |prev: Option<()>| {
        let current = record.get();
        preview_timer.schedule(PREVIEW_DELAY, move || {
            preview_html.set(render_preview(&current, &options.get_value()));
        });

        if prev.is_some() && !committing.get_value() {
            pending.mark();
            autosave_timer.schedule(AUTOSAVE_DELAY, move || {
                if pending.take() {
                    save_now();
                }
            });
        }
        committing.set_value(false);
    });

    let commit = move |result: Result<NewsletterRecord, NewsletterError>, done: &str| {
        match persist(&storage::newsletters(), result) {
            Ok(updated) => {
                autosave_timer.cancel();
                pending.take();
                committing.set_value(true);
                record.set(updated);
                notice.set(Some(Notice::success(done)));
            }
            Err(message) => notice.set(Some(Notice::failure(message))),
        }
    };

    let save_draft = Callback::new(move |()| {
        let mut r = record.get_untracked();
        r.mark_draft(Utc::now());
        commit(Ok(r), "Saved as draft");
    });
    let schedule = Callback::new(move |at: DateTime<Utc>| {
        let mut r = record.get_untracked();
        let result = r.mark_scheduled(at, Utc::now()).map(|()| r);
        commit(result, "Scheduled");
    });
    let send = Callback::new(move |()| {
        let mut r = record.get_untracked();
        let result = r.mark_sent(Utc::now()).map(|()| r);
        commit(result, "Marked as sent");
    });

    let back = move |_: leptos::ev::MouseEvent| {
        autosave_timer.cancel();
        if pending.take() {
            save_now();
        }
        on_back.run(());
    };

    view! {
        <section class="editor">
            <div class="editor-toolbar">
                <button class="btn" on:click=back>"← Back"</button>
                <span class="editor-status">
                    {move || record.with(|r| r.status.label())}
                </span>
            </div>
            <div class="editor-layout">
                <div class="editor-form">
                    <MetadataForm record=record/>
                    <TemplateSelector record=record/>
                    <SectionEditor record=record/>
                    <Actions
                        record=record
                        notice=notice
                        on_save_draft=save_draft
                        on_schedule=schedule
                        on_send=send
                    />
                </div>
                <div class="editor-preview">
                    <h3>"Preview"</h3>
                    <EmailPreview html=preview_html/>
                </div>
            </div>
        </section>
    }
}
