//! Rendered email previews.

use leptos::prelude::*;
use letterpress_core::NewsletterId;
use letterpress_render::{render_preview, RenderOptions};

use crate::storage;

/// Sandboxed iframe showing a rendered document.
#[component]
pub fn EmailPreview(#[prop(into)] html: Signal<String>) -> impl IntoView {
    view! {
        <iframe
            class="email-preview"
            title="Email preview"
            sandbox=""
            srcdoc=move || html.get()
        ></iframe>
    }
}

/// Full-page preview of a stored newsletter.
#[component]
pub fn PreviewView(
    id: NewsletterId,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_edit: Callback<NewsletterId>,
) -> impl IntoView {
    let Some(record) = storage::newsletters().get(&id) else {
        return view! {
            <section class="preview-page">
                <p class="empty-state">"Newsletter not found"</p>
                <button class="btn" on:click=move |_| on_back.run(())>"Back"</button>
            </section>
        }
        .into_any();
    };

    let html = render_preview(&record, &RenderOptions::default());
    let subject = record.display_subject().to_string();

    view! {
        <section class="preview-page">
            <div class="preview-toolbar">
                <button class="btn" on:click=move |_| on_back.run(())>"Back"</button>
                <h2>{subject}</h2>
                <button class="btn btn-primary" on:click=move |_| on_edit.run(id.clone())>
                    "Edit"
                </button>
            </div>
            <EmailPreview html=Signal::stored(html)/>
        </section>
    }
    .into_any()
}
