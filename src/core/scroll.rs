//! Scroll-position derived UI state: reading progress, navbar, back-to-top,
//! parallax and scroll depth

/// Navbar gets its solid background past this offset
pub const NAVBAR_SCROLLED_OFFSET: f64 = 50.0;

/// Navbar may hide when scrolling down past this offset
pub const NAVBAR_HIDE_OFFSET: f64 = 100.0;

/// Back-to-top button appears past this offset
pub const BACK_TO_TOP_OFFSET: f64 = 300.0;

/// Header parallax rate used across the site
pub const HEADER_PARALLAX_RATE: f64 = -0.5;

/// Snapshot of the document scroll position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            viewport_height,
        }
    }

    /// Scrollable distance
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.viewport_height).max(0.0)
    }

    /// Reading progress in percent, clamped to 0..=100.
    /// A page that does not scroll reports 0.
    pub fn reading_progress(&self) -> f64 {
        let max = self.max_scroll();
        if max <= 0.0 {
            return 0.0;
        }
        (self.scroll_top / max * 100.0).clamp(0.0, 100.0)
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.scroll_top > BACK_TO_TOP_OFFSET
    }

    /// Vertical translation for a parallax layer
    pub fn parallax_offset(&self, rate: f64) -> f64 {
        self.scroll_top * rate
    }
}

/// Navbar presentation derived from scroll direction and offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavbarState {
    pub scrolled: bool,
    pub hidden: bool,
}

/// Tracks the last scroll offset to detect scroll direction
#[derive(Debug, Clone, Default)]
pub struct NavbarTracker {
    last_scroll_top: f64,
    state: NavbarState,
}

impl NavbarTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a new scroll offset and get the resulting navbar state
    pub fn update(&mut self, scroll_top: f64) -> NavbarState {
        let scrolling_down = scroll_top > self.last_scroll_top;
        self.state = NavbarState {
            scrolled: scroll_top > NAVBAR_SCROLLED_OFFSET,
            hidden: scrolling_down && scroll_top > NAVBAR_HIDE_OFFSET,
        };
        self.last_scroll_top = scroll_top;
        self.state
    }

    pub fn state(&self) -> NavbarState {
        self.state
    }
}

/// Deepest scroll position reached on the page, in whole percent
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollDepth {
    max_percent: u8,
}

impl ScrollDepth {
    pub fn record(&mut self, metrics: &ScrollMetrics) -> u8 {
        let percent = metrics.reading_progress().round() as u8;
        self.max_percent = self.max_percent.max(percent);
        self.max_percent
    }

    pub fn max_percent(&self) -> u8 {
        self.max_percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_progress() {
        let metrics = ScrollMetrics::new(500.0, 2000.0, 1000.0);
        assert_eq!(metrics.reading_progress(), 50.0);

        let end = ScrollMetrics::new(1000.0, 2000.0, 1000.0);
        assert_eq!(end.reading_progress(), 100.0);
    }

    #[test]
    fn test_reading_progress_clamps_overscroll() {
        let bounce = ScrollMetrics::new(1100.0, 2000.0, 1000.0);
        assert_eq!(bounce.reading_progress(), 100.0);

        let negative = ScrollMetrics::new(-20.0, 2000.0, 1000.0);
        assert_eq!(negative.reading_progress(), 0.0);
    }

    #[test]
    fn test_reading_progress_short_page() {
        let metrics = ScrollMetrics::new(0.0, 600.0, 800.0);
        assert_eq!(metrics.max_scroll(), 0.0);
        assert_eq!(metrics.reading_progress(), 0.0);
    }

    #[test]
    fn test_back_to_top_threshold() {
        assert!(!ScrollMetrics::new(300.0, 5000.0, 800.0).back_to_top_visible());
        assert!(ScrollMetrics::new(301.0, 5000.0, 800.0).back_to_top_visible());
    }

    #[test]
    fn test_parallax_offset() {
        let metrics = ScrollMetrics::new(200.0, 5000.0, 800.0);
        assert_eq!(metrics.parallax_offset(HEADER_PARALLAX_RATE), -100.0);
    }

    #[test]
    fn test_navbar_hides_when_scrolling_down() {
        let mut tracker = NavbarTracker::new();

        let state = tracker.update(60.0);
        assert!(state.scrolled);
        assert!(!state.hidden);

        let state = tracker.update(150.0);
        assert!(state.hidden);

        let state = tracker.update(120.0);
        assert!(!state.hidden);
        assert!(state.scrolled);

        let state = tracker.update(10.0);
        assert_eq!(state, NavbarState::default());
    }

    #[test]
    fn test_scroll_depth_keeps_maximum() {
        let mut depth = ScrollDepth::default();
        depth.record(&ScrollMetrics::new(500.0, 2000.0, 1000.0));
        depth.record(&ScrollMetrics::new(100.0, 2000.0, 1000.0));
        assert_eq!(depth.max_percent(), 50);
    }
}
