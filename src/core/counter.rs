//! Count-up animation for statistic numbers

/// Default animation length (2 seconds)
pub const DEFAULT_COUNT_DURATION_MS: u32 = 2000;

/// Default frame interval (~60fps)
pub const DEFAULT_FRAME_MS: u32 = 16;

/// Counts from zero to `target` in fixed increments per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    target: u64,
    duration_ms: u32,
    frame_ms: u32,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            duration_ms: DEFAULT_COUNT_DURATION_MS,
            frame_ms: DEFAULT_FRAME_MS,
        }
    }

    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn frame_ms(mut self, frame_ms: u32) -> Self {
        self.frame_ms = frame_ms.max(1);
        self
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn frame_interval_ms(&self) -> u32 {
        self.frame_ms
    }

    /// Number of ticks until the target is displayed
    pub fn frame_count(&self) -> u32 {
        self.duration_ms.div_ceil(self.frame_ms).max(1)
    }

    fn increment(&self) -> f64 {
        self.target as f64 / (f64::from(self.duration_ms) / f64::from(self.frame_ms))
    }

    /// Displayed value after `frame` ticks (frame 0 shows zero)
    pub fn value_at_frame(&self, frame: u32) -> u64 {
        if frame >= self.frame_count() {
            return self.target;
        }
        let current = (self.increment() * f64::from(frame)).floor() as u64;
        current.min(self.target)
    }

    /// Displayed values for ticks 1..=frame_count; the last one is the target
    pub fn frames(&self) -> impl Iterator<Item = u64> + '_ {
        (1..=self.frame_count()).map(move |frame| self.value_at_frame(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let counter = CountUp::new(500);
        assert_eq!(counter.frame_interval_ms(), DEFAULT_FRAME_MS);
        assert_eq!(counter.frame_count(), 125);
    }

    #[test]
    fn test_values_are_monotonic_and_end_at_target() {
        let counter = CountUp::new(1234);
        let values: Vec<u64> = counter.frames().collect();

        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values.last().copied(), Some(1234));
        assert!(values.iter().all(|v| *v <= 1234));
    }

    #[test]
    fn test_value_is_floored() {
        let counter = CountUp::new(10).duration_ms(160).frame_ms(16);
        assert_eq!(counter.value_at_frame(0), 0);
        assert_eq!(counter.value_at_frame(1), 1);
        assert_eq!(counter.value_at_frame(10), 10);
        assert_eq!(counter.value_at_frame(50), 10);

        let uneven = CountUp::new(5).duration_ms(160).frame_ms(16);
        assert_eq!(uneven.value_at_frame(1), 0);
        assert_eq!(uneven.value_at_frame(3), 1);
    }

    #[test]
    fn test_zero_target() {
        let counter = CountUp::new(0);
        assert!(counter.frames().all(|v| v == 0));
        assert_eq!(counter.frames().count(), 125);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let counter = CountUp::new(42).duration_ms(0);
        assert_eq!(counter.value_at_frame(1), 42);
        assert_eq!(counter.frame_count(), 1);
    }
}
