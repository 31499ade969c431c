//! Transient success/error/info banner with auto-dismiss.
//!
//! # Design
//! `Notifier` owns at most one pending dismiss task. Showing a new message
//! aborts the previous task before scheduling its own, so an older timer can
//! never hide a newer message. A generation counter backs this up on
//! multi-threaded runtimes, where an aborted task may already be running.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

/// How long a banner stays up unless dismissed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub show: bool,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Debug, Default)]
struct Shared {
    current: Notification,
    generation: u64,
}

#[derive(Debug)]
pub struct Notifier {
    shared: Arc<Mutex<Shared>>,
    timeout: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl Notifier {
    pub fn new(timeout: Duration) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared::default())),
            timeout,
            pending: None,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Show `message` and schedule it to hide after the timeout.
    ///
    /// Outside a tokio runtime nothing is scheduled and the banner stays
    /// until `hide` is called.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.cancel_pending();
        let generation = {
            let mut shared = lock(&self.shared);
            shared.generation += 1;
            shared.current = Notification {
                show: true,
                message: message.into(),
                kind,
            };
            debug!(%kind, text = %shared.current.message, "notification shown");
            shared.generation
        };

        let Ok(handle) = Handle::try_current() else {
            return;
        };
        let shared = Arc::clone(&self.shared);
        let timeout = self.timeout;
        self.pending = Some(handle.spawn(async move {
            tokio::time::sleep(timeout).await;
            let mut shared = lock(&shared);
            if shared.generation == generation {
                shared.current.show = false;
            }
        }));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Info);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Error);
    }

    /// Hide the banner now and drop its pending timer.
    pub fn hide(&mut self) {
        self.cancel_pending();
        lock(&self.shared).current.show = false;
    }

    /// Snapshot of the banner.
    pub fn current(&self) -> Notification {
        lock(&self.shared).current.clone()
    }

    fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn auto_hides_after_timeout() {
        let mut notifier = Notifier::default();
        notifier.success("Saved");
        assert!(notifier.current().show);

        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert!(notifier.current().show);

        tokio::time::sleep(Duration::from_millis(200)).await;
        let banner = notifier.current();
        assert!(!banner.show);
        assert_eq!(banner.message, "Saved");
        assert_eq!(banner.kind, NotificationKind::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn hide_works_before_timeout() {
        let mut notifier = Notifier::default();
        notifier.error("Boom");
        notifier.hide();
        assert!(!notifier.current().show);
    }

    #[tokio::test(start_paused = true)]
    async fn renotify_restarts_the_timer() {
        let mut notifier = Notifier::default();
        notifier.info("first");
        tokio::time::sleep(Duration::from_secs(4)).await;
        notifier.error("second");

        // the first timer would have fired here
        tokio::time::sleep(Duration::from_secs(2)).await;
        let banner = notifier.current();
        assert!(banner.show);
        assert_eq!(banner.message, "second");

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert!(!notifier.current().show);
    }

    #[test]
    fn without_runtime_banner_stays_until_hidden() {
        let mut notifier = Notifier::new(Duration::from_millis(1));
        notifier.info("hello");
        std::thread::sleep(Duration::from_millis(5));
        assert!(notifier.current().show);
        notifier.hide();
        assert!(!notifier.current().show);
    }
}
