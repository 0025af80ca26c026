use tokio::time::Instant;

/// Time tracking for pacers
///
/// Uses the Tokio clock for monotonic measurements with nanosecond precision,
/// so a paused test clock drives the gate deterministically. Outside a paused
/// runtime this reads the system monotonic clock.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TimeSource {
    /// Epoch for relative time measurements
    epoch: Instant,
}

impl TimeSource {
    /// Create a new time source with current time as epoch
    #[inline(always)]
    pub fn new() -> Self {
        Self { epoch: Instant::now() }
    }

    /// Get current time in nanoseconds since epoch
    #[inline(always)]
    pub fn now_nanos(&self) -> u64 {
        self.epoch.elapsed().as_nanos() as u64
    }
}

impl Default for TimeSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert duration to nanoseconds
#[inline(always)]
pub(crate) fn duration_to_nanos(duration: std::time::Duration) -> u64 {
    duration.as_nanos() as u64
}
