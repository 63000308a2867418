//! Newsletter list with create, edit, preview and delete.

use chrono::{DateTime, Local, Utc};
use leptos::prelude::*;
use letterpress_core::{NewsletterId, NewsletterStatus};

use crate::storage;

fn format_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%b %e, %Y %H:%M").to_string()
}

fn status_class(status: NewsletterStatus) -> &'static str {
    match status {
        NewsletterStatus::Draft => "badge badge-draft",
        NewsletterStatus::Scheduled => "badge badge-scheduled",
        NewsletterStatus::Sent => "badge badge-sent",
    }
}

#[component]
pub fn ManagementView(
    #[prop(into)] on_create: Callback<()>,
    #[prop(into)] on_edit: Callback<NewsletterId>,
    #[prop(into)] on_preview: Callback<NewsletterId>,
) -> impl IntoView {
    let summaries = RwSignal::new(storage::newsletters().summaries());

    let delete = move |id: NewsletterId, subject: String| {
        let confirmed = window()
            .confirm_with_message(&format!("Delete \"{}\"? This cannot be undone.", subject))
            .unwrap_or(false);
        if confirmed {
            let store = storage::newsletters();
            store.delete(&id);
            summaries.set(store.summaries());
        }
    };

    view! {
        <section class="management">
            <div class="management-header">
                <h2>"Your newsletters"</h2>
                <button class="btn btn-primary" on:click=move |_| on_create.run(())>
                    "New newsletter"
                </button>
            </div>

            <Show
                when=move || !summaries.with(|s| s.is_empty())
                fallback=|| view! { <p class="empty-state">"No newsletters yet"</p> }
            >
                <ul class="newsletter-list">
                    {move || summaries.get().into_iter().map(|summary| {
                        let id_for_edit = summary.id.clone();
                        let id_for_preview = summary.id.clone();
                        let id_for_delete = summary.id.clone();
                        let subject = summary.display_subject().to_string();
                        let subject_for_delete = subject.clone();

                        view! {
                            <li class="newsletter-item">
                                <div class="newsletter-info">
                                    <h3 class="newsletter-subject">{subject}</h3>
                                    <span class={status_class(summary.status)}>
                                        {summary.status.label()}
                                    </span>
                                    <p class="newsletter-dates">
                                        "Created " {format_time(summary.created_at)}
                                        " · Updated " {format_time(summary.updated_at)}
                                    </p>
                                    {summary.scheduled_at.map(|at| view! {
                                        <p class="newsletter-scheduled">
                                            "Scheduled for " {format_time(at)}
                                        </p>
                                    })}
                                </div>
                                <div class="newsletter-actions">
                                    <button
                                        class="btn"
                                        on:click=move |_| on_edit.run(id_for_edit.clone())
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        class="btn"
                                        on:click=move |_| on_preview.run(id_for_preview.clone())
                                    >
                                        "Preview"
                                    </button>
                                    <button
                                        class="btn btn-danger"
                                        on:click=move |_| {
                                            delete(id_for_delete.clone(), subject_for_delete.clone())
                                        }
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </section>
    }
}
