use leptos::prelude::*;
use letterpress_core::NewsletterRecord;
use letterpress_render::templates;

use super::TemplateThumbnail;

/// One card per registered template; clicking selects it.
#[component]
pub fn TemplateSelector(record: RwSignal<NewsletterRecord>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>"Template"</label>
            <div class="template-grid">
                {templates().iter().map(|template| {
                    let id = template.id;
                    let is_selected = move || record.with(|r| r.template_id == id);
                    view! {
                        <button
                            class="template-card"
                            class:selected=is_selected
                            on:click=move |_| record.update(|r| r.template_id = id.to_string())
                        >
                            <TemplateThumbnail template_id=id/>
                            <span class="template-name">{template.name}</span>
                            <span class="template-description">{template.description}</span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
