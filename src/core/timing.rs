//! Rate limiting helpers for scroll, resize and input handlers
//!
//! Browser time is not available through `std::time::Instant` on wasm, so
//! every helper takes the current time explicitly as milliseconds (e.g.
//! `performance.now()` or `Date.now()`).
//!
//! # Overview
//!
//! - [`Throttle`]: leading edge, at most one call per interval (scroll handlers)
//! - [`Debounce`]: trailing edge, fires once input has settled (form re-validation)
//! - [`FrameGate`]: at most one pending animation frame

/// Default throttle interval for scroll handlers (100ms)
pub const DEFAULT_SCROLL_THROTTLE_MS: f64 = 100.0;

/// Throttle interval matching one frame at ~60fps
pub const FRAME_THROTTLE_MS: f64 = 16.0;

/// Default debounce wait for input re-validation (300ms)
pub const DEFAULT_INPUT_DEBOUNCE_MS: f64 = 300.0;

/// Leading-edge throttle
///
/// # Example
/// ```
/// # use epic_adventures::core::timing::Throttle;
/// let mut throttle = Throttle::new(100.0);
///
/// assert!(throttle.try_fire(0.0));
/// assert!(!throttle.try_fire(50.0));
/// assert!(throttle.try_fire(100.0));
/// ```
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    last_fired: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            last_fired: None,
        }
    }

    /// Returns `true` (and records the call) if the interval has elapsed
    /// since the last accepted call, or if this is the first call.
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        let ready = match self.last_fired {
            Some(last) => now_ms - last >= self.limit_ms,
            None => true,
        };
        if ready {
            self.last_fired = Some(now_ms);
        }
        ready
    }

    pub fn reset(&mut self) {
        self.last_fired = None;
    }

    pub fn limit_ms(&self) -> f64 {
        self.limit_ms
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THROTTLE_MS)
    }
}

/// Trailing-edge debounce
///
/// Each [`touch`](Debounce::touch) pushes the deadline out by `wait_ms`;
/// [`poll`](Debounce::poll) reports `true` exactly once after the deadline.
#[derive(Debug, Clone)]
pub struct Debounce {
    wait_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            deadline: None,
        }
    }

    /// Record an event at `now_ms`
    pub fn touch(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.wait_ms);
    }

    /// Whether the debounced action should run now
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn wait_ms(&self) -> f64 {
        self.wait_ms
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_DEBOUNCE_MS)
    }
}

/// Single pending animation frame ("ticking" flag)
#[derive(Debug, Clone, Default)]
pub struct FrameGate {
    ticking: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the caller should schedule a frame
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Mark the scheduled frame as done
    pub fn complete(&mut self) {
        self.ticking = false;
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_first_call_fires() {
        let mut throttle = Throttle::default();
        assert_eq!(throttle.limit_ms(), DEFAULT_SCROLL_THROTTLE_MS);
        assert!(throttle.try_fire(1234.0));
    }

    #[test]
    fn test_throttle_suppresses_within_interval() {
        let mut throttle = Throttle::new(16.0);
        assert!(throttle.try_fire(0.0));
        assert!(!throttle.try_fire(5.0));
        assert!(!throttle.try_fire(15.9));
        assert!(throttle.try_fire(16.0));
        assert!(!throttle.try_fire(20.0));
    }

    #[test]
    fn test_throttle_suppressed_calls_do_not_extend_window() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.try_fire(0.0));
        for t in [10.0, 50.0, 90.0] {
            assert!(!throttle.try_fire(t));
        }
        assert!(throttle.try_fire(100.0));
    }

    #[test]
    fn test_throttle_reset() {
        let mut throttle = Throttle::new(100.0);
        throttle.try_fire(0.0);
        throttle.reset();
        assert!(throttle.try_fire(1.0));
    }

    #[test]
    fn test_debounce_fires_after_quiet_period() {
        let mut debounce = Debounce::new(300.0);
        assert!(!debounce.poll(0.0));

        debounce.touch(0.0);
        debounce.touch(200.0);
        assert!(!debounce.poll(400.0));
        assert!(debounce.poll(500.0));
        assert!(!debounce.poll(600.0));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_debounce_cancel() {
        let mut debounce = Debounce::default();
        debounce.touch(0.0);
        assert!(debounce.is_pending());
        debounce.cancel();
        assert!(!debounce.poll(10_000.0));
    }

    #[test]
    fn test_frame_gate() {
        let mut gate = FrameGate::new();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(gate.is_ticking());
        gate.complete();
        assert!(gate.request());
    }
}
