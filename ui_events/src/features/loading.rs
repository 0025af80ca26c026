use std::time::Duration;

use tracing::debug;

/// Phase of the load-screen fade-out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Visible,
    Fading,
    Hidden,
}

/// Delays of the load-screen fade-out
#[derive(Debug, Clone, Copy)]
pub struct FadeTiming {
    /// Time the loading screen stays fully visible after the page loads
    pub hold: Duration,

    /// Length of the opacity transition before the screen is removed
    pub fade: Duration,
}

impl Default for FadeTiming {
    fn default() -> Self {
        Self { hold: Duration::from_millis(1000), fade: Duration::from_millis(500) }
    }
}

/// Run the load-screen fade once the page has loaded
///
/// Walks Visible → Fading → Hidden on the Tokio clock, reporting each phase
/// to the observer (including the initial `Visible`).
pub async fn run_fade<F>(timing: FadeTiming, mut on_phase: F)
where
    F: FnMut(LoadingPhase),
{
    on_phase(LoadingPhase::Visible);

    tokio::time::sleep(timing.hold).await;
    on_phase(LoadingPhase::Fading);
    debug!("Loading screen fading");

    tokio::time::sleep(timing.fade).await;
    on_phase(LoadingPhase::Hidden);
    debug!("Loading screen hidden");
}
