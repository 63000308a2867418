//! Collapsible Markdown cheat sheet shown under text sections.

use leptos::prelude::*;

/// Example syntax, grouped the way the guide lays it out.
const GROUPS: [(&str, &[&str]); 3] = [
    ("Text formatting", &["**Bold text**", "*Italic text*", "***Bold and italic***"]),
    ("Headings", &["# Heading 1", "## Heading 2", "### Heading 3"]),
    (
        "Links & lists",
        &[
            "[Link text](https://example.com)",
            "- Bullet point",
            "- Another point",
            "1. Numbered list",
            "2. Second item",
        ],
    ),
];

#[component]
pub fn MarkdownHelp() -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <Show
            when=move || open.get()
            fallback=move || view! {
                <button class="btn btn-small btn-ghost" on:click=move |_| open.set(true)>
                    "? Markdown help"
                </button>
            }
        >
            <div class="markdown-help">
                <div class="markdown-help-header">
                    <strong>"Markdown formatting guide"</strong>
                    <button
                        class="btn btn-small btn-ghost"
                        title="Close"
                        on:click=move |_| open.set(false)
                    >
                        "✕"
                    </button>
                </div>
                <div class="markdown-help-grid">
                    {GROUPS
                        .iter()
                        .map(|(title, lines)| view! {
                            <div>
                                <p class="markdown-help-title">{*title}</p>
                                <pre class="markdown-help-sample">{lines.join("\n")}</pre>
                            </div>
                        })
                        .collect_view()}
                </div>
                <p class="markdown-help-tip">
                    "The preview updates as you type."
                </p>
            </div>
        </Show>
    }
}
