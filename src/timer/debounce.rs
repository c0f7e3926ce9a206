use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

type Action = Box<dyn FnOnce() + Send + 'static>;

struct Pending {
    handle: JoinHandle<()>,
    action: Arc<Mutex<Option<Action>>>,
}

/// Runs an action once `delay` has passed since the last
/// [`schedule`](Debouncer::schedule) call.
///
/// Each new call replaces the pending action. Dropping the debouncer
/// cancels whatever is pending; call [`flush`](Debouncer::flush) first to
/// keep it.
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, action: impl FnOnce() + Send + 'static) {
        self.cancel();

        let slot: Arc<Mutex<Option<Action>>> = Arc::new(Mutex::new(Some(Box::new(action))));
        let shared = Arc::clone(&slot);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let action = shared.lock().unwrap_or_else(PoisonError::into_inner).take();
            if let Some(action) = action {
                action();
            }
        });

        self.pending = Some(Pending {
            handle,
            action: slot,
        });
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }

    /// Runs the pending action now, if it has not run yet.
    pub fn flush(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        pending.handle.abort();

        let action = pending
            .action
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(action) = action {
            action();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|pending| !pending.handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
