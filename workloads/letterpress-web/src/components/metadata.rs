use leptos::prelude::*;
use letterpress_core::NewsletterRecord;

/// Subject line input.
#[component]
pub fn MetadataForm(record: RwSignal<NewsletterRecord>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for="subject">"Subject"</label>
            <input
                id="subject"
                type="text"
                class="input"
                placeholder="Enter your newsletter subject..."
                prop:value=move || record.with(|r| r.subject.clone())
                on:input=move |ev| {
                    let subject = event_target_value(&ev);
                    record.update(|r| r.subject = subject);
                }
            />
        </div>
    }
}
