/// Default scroll depth (pixels) past which the header switches to its
/// compact style
pub const DEFAULT_COMPACT_PX: f64 = 50.0;

/// Default scroll depth past which scrolling down hides the header
pub const DEFAULT_HIDE_PX: f64 = 100.0;

/// Rendered style of the page header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    /// Translucent, blurred background while scrolled into the page
    pub compact: bool,

    /// Header slid out of view while scrolling down
    pub hidden: bool,
}

/// Scroll-driven header state
///
/// Compact above the compact threshold; hidden while scrolling down past the
/// hide threshold, shown again on any upward scroll. The previous offset is
/// per-instance state, never shared between handlers.
pub struct HeaderState {
    compact_px: f64,
    hide_px: f64,
    style: HeaderStyle,
    last_offset: f64,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::with_thresholds(DEFAULT_COMPACT_PX, DEFAULT_HIDE_PX)
    }

    pub fn with_thresholds(compact_px: f64, hide_px: f64) -> Self {
        Self { compact_px, hide_px, style: HeaderStyle { compact: false, hidden: false }, last_offset: 0.0 }
    }

    /// Current style
    pub fn style(&self) -> HeaderStyle {
        self.style
    }

    /// Feed a scroll offset; returns the new style if it changed
    pub fn on_scroll(&mut self, offset: f64) -> Option<HeaderStyle> {
        let compact = offset > self.compact_px;
        let hidden = offset > self.last_offset && offset > self.hide_px;
        self.last_offset = offset;

        let next = HeaderStyle { compact, hidden };
        if next == self.style {
            return None;
        }

        self.style = next;
        Some(next)
    }
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new()
    }
}
