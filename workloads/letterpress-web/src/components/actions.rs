//! Save draft, schedule and send.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use leptos::prelude::*;
use letterpress_core::NewsletterRecord;

/// Outcome of the last explicit save, shown under the buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub ok: bool,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Parse the value of an `<input type="datetime-local">` as local time.
pub fn parse_datetime_local(value: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|at| at.with_timezone(&Utc))
}

#[component]
pub fn Actions(
    record: RwSignal<NewsletterRecord>,
    #[prop(into)] notice: Signal<Option<Notice>>,
    #[prop(into)] on_save_draft: Callback<()>,
    #[prop(into)] on_schedule: Callback<DateTime<Utc>>,
    #[prop(into)] on_send: Callback<()>,
) -> impl IntoView {
    let schedule_input = RwSignal::new(String::new());
    let blockers = move || record.with(|r| r.send_blockers());
    let schedule_at = move || schedule_input.with(|v| parse_datetime_local(v));

    view! {
        <div class="actions">
            <div class="actions-row">
                <button class="btn" on:click=move |_| on_save_draft.run(())>"Save draft"</button>

                <input
                    type="datetime-local"
                    class="input input-inline"
                    prop:value=move || schedule_input.get()
                    on:input=move |ev| schedule_input.set(event_target_value(&ev))
                />
                <button
                    class="btn"
                    disabled=move || schedule_at().is_none()
                    on:click=move |_| {
                        if let Some(at) = schedule_at() {
                            on_schedule.run(at);
                        }
                    }
                >
                    "Schedule"
                </button>

                <button
                    class="btn btn-primary"
                    disabled=move || !blockers().is_empty()
                    on:click=move |_| on_send.run(())
                >
                    "Send"
                </button>
            </div>

            <ul class="blockers">
                {move || blockers().into_iter().map(|b| view! { <li>{b.to_string()}</li> }).collect_view()}
            </ul>

            {move || notice.get().map(|n| view! {
                <p class="notice" class:notice-error={!n.ok}>{n.message}</p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_datetime_local() {
        let at = parse_datetime_local("2031-05-06T07:08").unwrap();
        let local = at.with_timezone(&Local);
        assert_eq!((local.hour(), local.minute()), (7, 8));
        assert!(parse_datetime_local("").is_none());
        assert!(parse_datetime_local("2031-05-06").is_none());
    }
}
