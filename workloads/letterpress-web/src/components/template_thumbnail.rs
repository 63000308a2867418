//! Miniature layout sketches for the template picker.

use leptos::prelude::*;

/// Sketch style for a template id. Unknown ids get a plain placeholder.
pub(crate) fn thumbnail_class(template_id: &str) -> &'static str {
    match template_id {
        "simple" => "thumb thumb-simple",
        "modern" => "thumb thumb-modern",
        "newsletter" => "thumb thumb-newsletter",
        _ => "thumb thumb-unknown",
    }
}

/// A wireframe of the template: header, a few text lines and a button.
#[component]
pub fn TemplateThumbnail(template_id: &'static str) -> impl IntoView {
    view! {
        <div class={thumbnail_class(template_id)} aria-hidden="true">
            <div class="thumb-header"></div>
            <div class="thumb-line"></div>
            <div class="thumb-line thumb-line-short"></div>
            <div class="thumb-line"></div>
            <div class="thumb-button"></div>
            <div class="thumb-footer"></div>
        </div>
    }
}
