use std::path::Path;

use config::Config;
use config::ConfigError;
use config::File;
use serde::Deserialize;

/// Pacing applied between the event stream and the feature handlers
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Throttle interval for header and back-to-top scroll handling
    pub scroll_throttle_ms: u64,

    /// Throttle interval for the parallax scroll handler (one frame)
    pub parallax_throttle_ms: u64,

    /// Quiet period before a form field's input is validated
    pub input_debounce_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self { scroll_throttle_ms: 100, parallax_throttle_ms: 16, input_debounce_ms: 300 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Scroll depth past which the header switches to its compact style
    pub compact_px: f64,

    /// Scroll depth past which scrolling down hides the header
    pub hide_px: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self { compact_px: 50.0, hide_px: 100.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrollTopConfig {
    /// Scroll depth past which the back-to-top button shows
    pub show_px: f64,
}

impl Default for ScrollTopConfig {
    fn default() -> Self {
        Self { show_px: 300.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Ratio of hero movement to scroll movement
    pub speed: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { speed: 0.5 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Time the simulated submission spends in flight
    pub send_delay_ms: u64,

    /// Time the success state is held before the form resets
    pub reset_delay_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self { send_delay_ms: 1500, reset_delay_ms: 2000 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Time a notice stays up before dismissing itself
    pub dismiss_ms: u64,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self { dismiss_ms: 5000 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    /// Time the loading screen stays fully visible after load
    pub hold_ms: u64,

    /// Length of the fade before the screen is removed
    pub fade_ms: u64,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self { hold_ms: 1000, fade_ms: 500 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Delay before the first character appears
    pub start_delay_ms: u64,

    /// Time between characters
    pub tick_ms: u64,

    /// Text revealed in the hero section
    pub text: String,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 1500,
            tick_ms: 50,
            text: "Strategic consulting for modern businesses".to_string(),
        }
    }
}

/// One animated stat tile
#[derive(Debug, Clone, Deserialize)]
pub struct StatConfig {
    pub target: u64,
    pub suffix: String,
    pub label: String,
}

/// Full page configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub pacing: PacingConfig,
    pub header: HeaderConfig,
    pub scroll_top: ScrollTopConfig,
    pub parallax: ParallaxConfig,
    pub form: FormConfig,
    pub notice: NoticeConfig,
    pub loading: LoadingConfig,
    pub typewriter: TypewriterConfig,
    pub counters: Vec<StatConfig>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            pacing: PacingConfig::default(),
            header: HeaderConfig::default(),
            scroll_top: ScrollTopConfig::default(),
            parallax: ParallaxConfig::default(),
            form: FormConfig::default(),
            notice: NoticeConfig::default(),
            loading: LoadingConfig::default(),
            typewriter: TypewriterConfig::default(),
            counters: vec![
                StatConfig { target: 500, suffix: "+".to_string(), label: "Clients Served".to_string() },
                StatConfig { target: 50, suffix: "K+".to_string(), label: "Transactions Processed".to_string() },
                StatConfig { target: 99, suffix: "%".to_string(), label: "Client Satisfaction".to_string() },
            ],
        }
    }
}

pub fn load_page_config<P: AsRef<Path>>(path: P) -> Result<PageConfig, ConfigError> {
    let config = Config::builder().add_source(File::from(path.as_ref())).build()?;

    config.try_deserialize()
}

/// Load page config with fallback to defaults
pub fn load_page_config_or_default(path: &str) -> PageConfig {
    match load_page_config(path) {
        Ok(config) => {
            tracing::info!("Loaded page config from {path}");
            config
        }
        Err(err) => {
            tracing::warn!("Failed to load page config from {}: {}. Using defaults.", path, err);
            PageConfig::default()
        }
    }
}
