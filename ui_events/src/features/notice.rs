use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

/// Default time a notice stays up before dismissing itself
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Visual level of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
}

/// A transient notification shown in the corner of the page
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Holds the notices currently on screen
///
/// A shown notice dismisses itself after the configured delay unless its
/// close button dismisses it first.
pub struct NoticeBoard {
    dismiss_after: Duration,
    next_id: AtomicU64,
    active: Arc<Mutex<Vec<Notice>>>,
}

impl NoticeBoard {
    pub fn new(dismiss_after: Duration) -> Self {
        Self { dismiss_after, next_id: AtomicU64::new(1), active: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Show a notice and schedule its auto-dismissal
    ///
    /// Returns the notice id, which the close button uses for an early
    /// dismissal. Requires a Tokio runtime for the dismissal timer.
    pub fn show(&self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let notice = Notice { id, level, message: message.into() };
        debug!("Showing notice {id}: {}", notice.message);
        self.active.lock().push(notice);

        let active = Arc::clone(&self.active);
        let dismiss_after = self.dismiss_after;
        tokio::spawn(async move {
            tokio::time::sleep(dismiss_after).await;

            let mut active = active.lock();
            let before = active.len();
            active.retain(|notice| notice.id != id);
            if active.len() != before {
                debug!("Notice {id} auto-dismissed");
            }
        });

        id
    }

    /// Dismiss a notice; returns `false` if it was already gone
    pub fn dismiss(&self, id: u64) -> bool {
        let mut active = self.active.lock();
        let before = active.len();
        active.retain(|notice| notice.id != id);
        active.len() != before
    }

    /// Snapshot of the notices currently on screen
    pub fn active(&self) -> Vec<Notice> {
        self.active.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss() {
        let board = NoticeBoard::new(DEFAULT_DISMISS_AFTER);

        board.show(NoticeLevel::Success, "Message sent");
        assert_eq!(board.active().len(), 1);

        tokio::time::sleep(Duration::from_millis(4_999)).await;
        assert_eq!(board.active().len(), 1);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(board.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_dismiss_beats_timer() {
        let board = NoticeBoard::new(DEFAULT_DISMISS_AFTER);

        let id = board.show(NoticeLevel::Info, "Heads up");
        assert!(board.dismiss(id));
        assert!(board.active().is_empty());

        // The timer later finds nothing to remove
        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(!board.dismiss(id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_notices_stack_with_distinct_ids() {
        let board = NoticeBoard::new(DEFAULT_DISMISS_AFTER);

        let first = board.show(NoticeLevel::Info, "one");
        let second = board.show(NoticeLevel::Success, "two");
        assert_ne!(first, second);
        assert_eq!(board.active().len(), 2);

        board.dismiss(first);
        let remaining = board.active();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].message, "two");
    }
}
