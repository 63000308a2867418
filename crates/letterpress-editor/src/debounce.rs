//! Cancelable delayed actions.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

type Action = Box<dyn FnOnce() + Send + 'static>;

#[derive(Default)]
struct Slot {
    generation: u64,
    action: Option<Action>,
    timer: Option<JoinHandle<()>>,
}

impl Slot {
    fn clear(&mut self) -> Option<Action> {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.action.take()
    }
}

/// Runs the most recently scheduled action once things go quiet.
///
/// Each `schedule` replaces the pending action and restarts the timer, so a
/// burst of calls collapses into one trailing run. Must be used from inside
/// a tokio runtime. Dropping the debouncer cancels whatever is pending.
pub struct Debouncer {
    delay: Duration,
    slot: Arc<Mutex<Slot>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            slot: Arc::new(Mutex::new(Slot::default())),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending action with `action`, to run after the delay.
    pub fn schedule<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.schedule_in(self.delay, action);
    }

    /// Like [`schedule`](Self::schedule) with a one-off delay.
    pub fn schedule_in<F>(&self, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.clear();
        slot.generation = slot.generation.wrapping_add(1);
        slot.action = Some(Box::new(action));

        let generation = slot.generation;
        let shared = Arc::clone(&self.slot);
        slot.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let action = {
                let mut slot = shared.lock().unwrap_or_else(PoisonError::into_inner);
                if slot.generation != generation {
                    return;
                }
                slot.timer = None;
                slot.action.take()
            };
            if let Some(action) = action {
                action();
            }
        }));
    }

    /// Drop the pending action without running it. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.clear().is_some()
    }

    /// Run the pending action now, if any. Returns whether one ran.
    pub fn flush(&self) -> bool {
        let action = {
            let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            slot.clear()
        };
        match action {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .action
            .is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl std::fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn() -> Box<dyn FnOnce() + Send>) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let make = move || {
            let c = Arc::clone(&c);
            Box::new(move || {
                c.fetch_add(1, Ordering::SeqCst);
            }) as Box<dyn FnOnce() + Send>
        };
        (count, make)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_runs_once() {
        let (count, make) = counter();
        let debouncer = Debouncer::new(Duration::from_millis(500));

        for _ in 0..5 {
            debouncer.schedule(make());
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let (count, make) = counter();
        let debouncer = Debouncer::new(Duration::from_millis(200));

        debouncer.schedule(make());
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_runs_immediately_once() {
        let (count, make) = counter();
        let debouncer = Debouncer::new(Duration::from_millis(200));

        debouncer.schedule(make());
        assert!(debouncer.flush());
        assert_eq!(count.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!debouncer.flush());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (count, make) = counter();
        let debouncer = Debouncer::new(Duration::from_millis(200));
        debouncer.schedule(make());
        drop(debouncer);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
