use std::time::Duration;

use tokio::time::MissedTickBehavior;

/// Animated count-up for a stat tile
///
/// Climbs from zero to the target in a fixed number of equal increments,
/// one per tick, clamping the final frame at the target.
#[derive(Debug, Clone, Copy)]
pub struct CounterAnimation {
    /// Number of increments used to reach the target
    pub steps: u32,

    /// Time between increments
    pub tick: Duration,
}

impl Default for CounterAnimation {
    fn default() -> Self {
        Self { steps: 100, tick: Duration::from_millis(20) }
    }
}

impl CounterAnimation {
    pub fn new(steps: u32, tick: Duration) -> Self {
        assert!(steps > 0, "Steps must be greater than 0");
        Self { steps, tick }
    }

    /// Count up to `target`, feeding each frame to the sink
    pub async fn run<F>(&self, target: u64, mut sink: F)
    where
        F: FnMut(u64),
    {
        let mut ticker = tokio::time::interval(self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of a fresh interval completes immediately
        ticker.tick().await;

        let increment = target as f64 / f64::from(self.steps);
        let mut current = 0.0;

        loop {
            ticker.tick().await;
            current += increment;

            if current >= target as f64 {
                sink(target);
                return;
            }
            sink(current.floor() as u64);
        }
    }
}

/// Render a stat value with its suffix, e.g. `500+`, `50K+`, `99%`
pub fn format_stat(value: u64, suffix: &str) -> String {
    format!("{value}{suffix}")
}
