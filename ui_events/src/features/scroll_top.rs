/// Default scroll depth (pixels) past which the back-to-top button shows
pub const DEFAULT_SHOW_PX: f64 = 300.0;

/// A requested programmatic scroll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub target_offset: f64,
    pub smooth: bool,
}

/// Visibility state of the back-to-top button
pub struct ScrollTopButton {
    show_px: f64,
    visible: bool,
}

impl ScrollTopButton {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_SHOW_PX)
    }

    pub fn with_threshold(show_px: f64) -> Self {
        Self { show_px, visible: false }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Feed a scroll offset; returns the new visibility if it changed
    pub fn on_scroll(&mut self, offset: f64) -> Option<bool> {
        let visible = offset > self.show_px;
        if visible == self.visible {
            return None;
        }

        self.visible = visible;
        Some(visible)
    }

    /// A click requests a smooth scroll back to the top of the page
    pub fn on_click(&self) -> ScrollRequest {
        ScrollRequest { target_offset: 0.0, smooth: true }
    }
}

impl Default for ScrollTopButton {
    fn default() -> Self {
        Self::new()
    }
}
