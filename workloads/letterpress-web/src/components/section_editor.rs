//! Section list: add, edit, retype, move and remove.

use leptos::prelude::*;
use letterpress_core::{Direction, NewsletterRecord, Section, SectionId, SectionKind, SectionPatch};
use wasm_bindgen::JsCast;

use super::MarkdownHelp;

#[component]
pub fn SectionEditor(record: RwSignal<NewsletterRecord>) -> impl IntoView {
    let sections = move || {
        record.with(|r| r.sorted_sections().into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="form-group">
            <label>"Content"</label>
            <div class="section-add">
                {SectionKind::SELECTABLE.iter().map(|&kind| view! {
                    <button
                        class="btn btn-small"
                        on:click=move |_| {
                            record.update(|r| {
                                r.add_section(kind);
                            });
                        }
                    >
                        "+ " {kind.label()}
                    </button>
                }).collect_view()}
            </div>
            <Show
                when=move || !record.with(|r| r.sections.is_empty())
                fallback=|| view! {
                    <p class="empty-state">"No content sections yet. Add one above."</p>
                }
            >
                <For
                    each=sections
                    key=section_key
                    children=move |section| view! { <SectionCard record=record section=section/> }
                />
            </Show>
        </div>
    }
}

#[component]
fn SectionCard(record: RwSignal<NewsletterRecord>, section: Section) -> impl IntoView {
    let id = StoredValue::new(section.id.clone());
    let kind = section.kind;

    let apply = move |patch: SectionPatch| {
        record.update(|r| {
            if let Err(e) = r.update_section(&id.get_value(), patch) {
                tracing::warn!(error = %e, "Section update ignored");
            }
        });
    };
    let move_by = move |direction: Direction| {
        record.update(|r| {
            r.move_section(&id.get_value(), direction);
        });
    };
    let position = move || record.with(|r| r.section(&id.get_value()).map(|s| s.order));
    let is_first = move || position() == Some(0);
    let is_last = move || position().map(|p| p + 1) == Some(record.with(|r| r.sections.len()));

    let on_kind_change = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let select: web_sys::HtmlSelectElement = target.unchecked_into();
        if let Ok(kind) = select.value().parse::<SectionKind>() {
            record.update(|r| {
                let _ = r.set_section_kind(&id.get_value(), kind);
            });
        }
    };

    let fields = match kind {
        SectionKind::Text => view! {
            <textarea
                class="input textarea"
                rows="6"
                placeholder="Write in Markdown: **bold**, *italic*, [links](https://example.com), # headings, - lists"
                prop:value={section.content.clone()}
                on:input=move |ev| apply(SectionPatch {
                    content: Some(event_target_value(&ev)),
                    ..Default::default()
                })
            ></textarea>
            <MarkdownHelp/>
        }
        .into_any(),
        SectionKind::Image => view! {
            <input
                type="url"
                class="input"
                placeholder="Image URL"
                prop:value={section.metadata.image_url.clone().unwrap_or_default()}
                on:input=move |ev| apply(SectionPatch {
                    image_url: Some(event_target_value(&ev)),
                    ..Default::default()
                })
            />
            <input
                type="text"
                class="input"
                placeholder="Alt text"
                prop:value={section.metadata.image_alt.clone().unwrap_or_default()}
                on:input=move |ev| apply(SectionPatch {
                    image_alt: Some(event_target_value(&ev)),
                    ..Default::default()
                })
            />
        }
        .into_any(),
        SectionKind::Button => view! {
            <input
                type="text"
                class="input"
                placeholder="Button text"
                prop:value={section.button_label().to_string()}
                on:input=move |ev| apply(SectionPatch {
                    button_text: Some(event_target_value(&ev)),
                    ..Default::default()
                })
            />
            <input
                type="url"
                class="input"
                placeholder="Button URL"
                prop:value={section.metadata.button_url.clone().unwrap_or_default()}
                on:input=move |ev| apply(SectionPatch {
                    button_url: Some(event_target_value(&ev)),
                    ..Default::default()
                })
            />
        }
        .into_any(),
        SectionKind::Divider => view! { <hr class="divider-preview"/> }.into_any(),
        SectionKind::Unknown => view! {
            <p class="section-unknown">"This section type is not supported and will not be rendered."</p>
        }
        .into_any(),
    };

    view! {
        <div class="section-card">
            <div class="section-toolbar">
                <select class="input select" on:change=on_kind_change>
                    {SectionKind::SELECTABLE.iter().map(|&option| view! {
                        <option value={option.as_str()} selected={option == kind}>
                            {option.label()}
                        </option>
                    }).collect_view()}
                </select>
                <div class="section-buttons">
                    <button
                        class="btn btn-small"
                        title="Move up"
                        disabled=is_first
                        on:click=move |_| move_by(Direction::Up)
                    >
                        "↑"
                    </button>
                    <button
                        class="btn btn-small"
                        title="Move down"
                        disabled=is_last
                        on:click=move |_| move_by(Direction::Down)
                    >
                        "↓"
                    </button>
                    <button
                        class="btn btn-small btn-danger"
                        title="Remove"
                        on:click=move |_| {
                            record.update(|r| {
                                r.remove_section(&id.get_value());
                            });
                        }
                    >
                        "✕"
                    </button>
                </div>
            </div>
            <div class="section-fields">{fields}</div>
        </div>
    }
}

/// Cards are rebuilt when a section changes kind, so their fields match.
fn section_key(section: &Section) -> (SectionId, SectionKind) {
    (section.id.clone(), section.kind)
}
