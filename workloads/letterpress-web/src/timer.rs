//! Debounce on Leptos timers.

use std::time::Duration;

use leptos::prelude::*;

/// Quiet period before an edit is persisted.
pub const AUTOSAVE_DELAY: Duration = Duration::from_millis(2000);

/// Quiet period before the preview is re-rendered.
pub const PREVIEW_DELAY: Duration = Duration::from_millis(500);

/// A single pending timeout that each `schedule` replaces.
///
/// Cleared automatically when the owning component is unmounted.
#[derive(Clone, Copy)]
pub struct Debounce {
    handle: StoredValue<Option<TimeoutHandle>>,
}

impl Debounce {
    pub fn new() -> Self {
        let debounce = Self {
            handle: StoredValue::new(None),
        };
        on_cleanup(move || {
            debounce.cancel();
        });
        debounce
    }

    /// Run `action` after `delay` unless rescheduled or cancelled first.
    pub fn schedule(&self, delay: Duration, action: impl FnOnce() + 'static) {
        self.cancel();
        let handle = self.handle;
        match set_timeout_with_handle(
            move || {
                handle.set_value(None);
                action();
            },
            delay,
        ) {
            Ok(timeout) => self.handle.set_value(Some(timeout)),
            Err(e) => tracing::warn!(error = ?e, "Failed to set timeout"),
        }
    }

    /// Drop the pending action. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        match self.handle.try_update_value(Option::take).flatten() {
            Some(timeout) => {
                timeout.clear();
                true
            }
            None => false,
        }
    }
}
