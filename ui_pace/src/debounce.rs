use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::PaceError;
use crate::error::Result;

/// Trailing-edge debouncer
///
/// Coalesces a burst of calls into a single deferred execution: every call
/// cancels the previously scheduled one and re-arms the timer with the
/// latest arguments. The callback runs exactly once per burst, one quiet
/// period after the last call, on a Tokio timer task.
///
/// At most one timer is pending per instance. There is no external cancel
/// operation; the only cancellation semantic is the re-arm performed by the
/// next call.
pub struct Debouncer<T> {
    /// Quiet period that must elapse after the last call
    quiet: Duration,

    /// Callback shared with the in-flight timer task
    callback: Arc<dyn Fn(T) + Send + Sync>,

    /// Handle of the pending timer task, if any
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a new debouncer
    ///
    /// # Panics
    /// Panics if the quiet period is zero
    pub fn new<F>(callback: F, quiet: Duration) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self::try_new(callback, quiet).expect("Quiet period must be greater than 0")
    }

    /// Create a new debouncer, rejecting a zero quiet period
    pub fn try_new<F>(callback: F, quiet: Duration) -> Result<Self>
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        if quiet.is_zero() {
            return Err(PaceError::InvalidInterval("quiet period must be greater than 0"));
        }

        Ok(Self { quiet, callback: Arc::new(callback), pending: Mutex::new(None) })
    }

    /// Record a call, cancelling any pending execution and scheduling a new
    /// one a quiet period from now with these arguments
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime; use [`Self::try_call`]
    /// for a fallible variant.
    pub fn call(&self, args: T) {
        self.try_call(args).expect("Debouncer::call requires a Tokio runtime")
    }

    /// Fallible variant of [`Self::call`]
    pub fn try_call(&self, args: T) -> Result<()> {
        let handle = Handle::try_current().map_err(|_| PaceError::NoRuntime)?;

        let callback = Arc::clone(&self.callback);
        let quiet = self.quiet;

        // Swap the pending timer under the lock so two racing calls cannot
        // both leave a task scheduled
        let mut pending = self.pending.lock();
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        *pending = Some(handle.spawn(async move {
            tokio::time::sleep(quiet).await;
            callback(args);
        }));

        Ok(())
    }

    /// Whether an execution is currently scheduled
    pub fn is_pending(&self) -> bool {
        self.pending.lock().as_ref().is_some_and(|task| !task.is_finished())
    }

    /// The configured quiet period
    pub fn quiet(&self) -> Duration {
        self.quiet
    }
}

/// Wrap a callback so a burst of calls yields one trailing execution
///
/// Each invocation cancels the previously scheduled execution and schedules
/// a new one a quiet period in the future with the latest arguments. A panic
/// inside the deferred callback is confined to its timer task and leaves the
/// debouncer usable.
pub fn debounce<T, F>(callback: F, quiet: Duration) -> impl Fn(T)
where
    T: Send + 'static,
    F: Fn(T) + Send + Sync + 'static,
{
    let debouncer = Debouncer::new(callback, quiet);

    move |args: T| debouncer.call(args)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicU32;
    use std::sync::atomic::Ordering;

    use super::*;

    #[test]
    fn test_zero_quiet_rejected() {
        let result = Debouncer::try_new(|_: u32| {}, Duration::ZERO);
        assert!(matches!(result, Err(PaceError::InvalidInterval(_))));
    }

    #[test]
    fn test_call_outside_runtime() {
        let debouncer = Debouncer::new(|_: u32| {}, Duration::from_millis(50));
        assert_eq!(debouncer.try_call(1), Err(PaceError::NoRuntime));
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_coalesces_to_last_arguments() {
        // Calls at t=0,50,100 with A,B,C and a 200ms quiet period: exactly
        // one execution at t=300 with C
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let debouncer = Debouncer::new(move |value: char| seen_clone.lock().push(value), Duration::from_millis(200));

        debouncer.call('A');
        tokio::time::sleep(Duration::from_millis(50)).await;
        debouncer.call('B');
        tokio::time::sleep(Duration::from_millis(50)).await;
        debouncer.call('C');

        // Not yet fired one tick before the deadline
        tokio::time::sleep(Duration::from_millis(199)).await;
        assert!(seen.lock().is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(*seen.lock(), vec!['C']);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_execute_separately() {
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = Arc::clone(&count);
        let debounced = debounce(move |()| { count_clone.fetch_add(1, Ordering::Relaxed); }, Duration::from_millis(100));

        debounced(());
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(count.load(Ordering::Relaxed), 1);

        debounced(());
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(count.load(Ordering::Relaxed), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_calls_single_execution() {
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = Arc::clone(&count);
        let debouncer = Debouncer::new(move |_: u32| { count_clone.fetch_add(1, Ordering::Relaxed); }, Duration::from_millis(100));

        for i in 0..50 {
            debouncer.call(i);
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(count.load(Ordering::Relaxed), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_is_pending() {
        let debouncer = Debouncer::new(|_: u32| {}, Duration::from_millis(100));
        assert!(!debouncer.is_pending());

        debouncer.call(1);
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_callback_leaves_debouncer_usable() {
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = Arc::clone(&count);
        let debouncer = Debouncer::new(
            move |value: u32| {
                if value == 0 {
                    panic!("callback failure");
                }
                count_clone.fetch_add(1, Ordering::Relaxed);
            },
            Duration::from_millis(100),
        );

        // The panic is confined to the timer task
        debouncer.call(0);
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(count.load(Ordering::Relaxed), 0);

        // The debouncer still schedules and fires
        debouncer.call(7);
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(count.load(Ordering::Relaxed), 1);
    }
}
