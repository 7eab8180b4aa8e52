//! Single-shot, cancellable celebration timer.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Owns at most one pending expiry task.
///
/// Arming the timer aborts whatever was pending before, so expiries never
/// overlap. Dropping the timer aborts the pending task, so nothing fires
/// into state whose owner is gone.
#[derive(Debug, Default)]
pub struct CelebrationTimer {
    handle: Option<JoinHandle<()>>,
}

impl CelebrationTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `on_expiry` after `delay`, replacing any pending expiry.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm<F>(&mut self, delay: Duration, on_expiry: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.cancel() {
            tracing::trace!("Re-arming celebration timer");
        }
        // Deadline is taken at arm time, not when the task is first polled.
        let deadline = Instant::now() + delay;
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_expiry();
        }));
    }

    /// Aborts the pending expiry. Returns whether one was still pending.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for CelebrationTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
