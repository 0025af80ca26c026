use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Duration;

use crate::error::PaceError;
use crate::error::Result;
use crate::time::TimeSource;
use crate::time::duration_to_nanos;

/// Leading-edge throttle gate
///
/// Bounds execution frequency to at most once per fixed interval. The first
/// call of any free interval passes immediately and opens a suppression
/// window; every call while the window is open is dropped permanently, with
/// no queueing and no trailing execution.
pub struct Throttle {
    /// Deadline (nanoseconds since the gate's epoch) at which the current
    /// suppression window closes; 0 means no window has been opened yet
    window_until: AtomicU64,

    /// Suppression window length in nanoseconds
    interval_nanos: u64,

    /// Time source for consistent measurements
    time_source: TimeSource,
}

impl Throttle {
    /// Create a new throttle gate
    ///
    /// # Panics
    /// Panics if the interval is zero
    pub fn new(interval: Duration) -> Self {
        Self::try_new(interval).expect("Interval must be greater than 0")
    }

    /// Create a new throttle gate, rejecting a zero interval
    pub fn try_new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(PaceError::InvalidInterval("interval must be greater than 0"));
        }

        Ok(Self { window_until: AtomicU64::new(0), interval_nanos: duration_to_nanos(interval), time_source: TimeSource::new() })
    }

    /// Create a builder for configuring a throttle gate
    pub fn builder() -> ThrottleBuilder {
        ThrottleBuilder::new()
    }

    /// Try to pass the gate
    ///
    /// Returns `true` if no suppression window is open; the caller should
    /// execute now and a new window opens that closes one interval later.
    /// Returns `false` while a window is open; the call is dropped.
    #[inline]
    pub fn try_pass(&self) -> bool {
        let now = self.time_source.now_nanos();

        loop {
            let until = self.window_until.load(Ordering::Acquire);

            if now < until {
                // Window still open, drop the call
                return false;
            }

            // Window expired (or never opened), try to claim the next one
            match self.window_until.compare_exchange_weak(until, now + self.interval_nanos, Ordering::Release, Ordering::Relaxed) {
                Ok(_) => return true,
                Err(_) => continue, // Another caller raced us, re-check
            }
        }
    }

    /// Whether a suppression window is currently open
    pub fn is_suppressing(&self) -> bool {
        self.time_source.now_nanos() < self.window_until.load(Ordering::Relaxed)
    }

    /// The configured suppression interval
    pub fn interval(&self) -> Duration {
        Duration::from_nanos(self.interval_nanos)
    }

    /// Close any open suppression window
    pub fn reset(&self) {
        self.window_until.store(0, Ordering::Release);
    }
}

/// Wrap a callback so it executes at most once per interval
///
/// Leading-edge semantics: the first invocation in any free interval calls
/// `callback` synchronously with the given arguments; invocations during an
/// open window are dropped. A panic in the callback propagates to the caller
/// and leaves the gate's window open, so suppression state survives.
pub fn throttle<T, F>(mut callback: F, interval: Duration) -> impl FnMut(T)
where
    F: FnMut(T),
{
    let gate = Throttle::new(interval);

    move |args: T| {
        // The window is opened before the callback runs
        if gate.try_pass() {
            callback(args);
        }
    }
}

/// Builder for configuring a throttle gate
pub struct ThrottleBuilder {
    interval: Option<Duration>,
}

impl ThrottleBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self { interval: None }
    }

    /// Set the suppression interval
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Set the suppression interval in milliseconds
    pub fn interval_ms(mut self, millis: u64) -> Self {
        self.interval = Some(Duration::from_millis(millis));
        self
    }

    /// Build the throttle gate
    ///
    /// # Panics
    /// Panics if the interval is not set or is zero
    pub fn build(self) -> Throttle {
        let interval = self.interval.expect("Interval must be set");
        Throttle::new(interval)
    }
}

impl Default for ThrottleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
