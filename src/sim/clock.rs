//! Discrete step timing
//!
//! Converts the host's monotonically increasing time marks into discrete
//! simulation steps at a fixed interval, and derives a per-frame
//! interpolation fraction for rendering between steps.

/// Step timing state.
///
/// Time marks must be non-decreasing. A mark earlier than a previous one
/// desynchronizes interpolation; that is a precondition violation, not
/// something the hot path checks for.
#[derive(Debug, Clone)]
pub struct StepClock {
    /// Host-time milliseconds per discrete step.
    step_interval: f64,
    /// Absolute time at which the next step fires.
    next_boundary: f64,
    /// Absolute time the current step began; -1 until the first frame.
    last_step_start: f64,
}

impl StepClock {
    pub fn new(step_interval: f64) -> Self {
        Self {
            step_interval,
            next_boundary: 0.0,
            last_step_start: -1.0,
        }
    }

    /// Returns true when `mark` crosses the step boundary, re-arming the
    /// boundary at `mark + interval`.
    ///
    /// Fires at most once per call: a host stall spanning several intervals
    /// still yields a single step, slowing simulated time rather than
    /// bursting to catch up. Kept from the source sketch.
    pub fn crossed(&mut self, mark: f64) -> bool {
        if mark > self.next_boundary {
            self.next_boundary = mark + self.step_interval;
            self.last_step_start = mark;
            true
        } else {
            false
        }
    }

    /// Fractional progress of `mark` through the current step.
    ///
    /// Unclamped: a frame delayed past the next boundary yields a value
    /// above 1 and the render extrapolates. On the very first frame the mark
    /// is adopted as the step start, so this returns 0.
    pub fn fraction(&mut self, mark: f64) -> f32 {
        if self.last_step_start < 0.0 {
            self.last_step_start = mark;
        }
        ((mark - self.last_step_start) / self.step_interval) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_when_boundary_crossed() {
        let mut clock = StepClock::new(100.0);

        // Boundary starts at 0, so the first positive mark fires
        assert!(clock.crossed(16.7));
        // Re-armed at mark + interval
        assert!(!clock.crossed(50.0));
        assert!(!clock.crossed(116.7));
        assert!(clock.crossed(116.8));
    }

    #[test]
    fn fires_once_per_call_even_across_many_boundaries() {
        let mut clock = StepClock::new(100.0);
        assert!(clock.crossed(10.0));

        // Host stalled for ten intervals: still exactly one step, and the
        // next boundary re-anchors to the late mark
        assert!(clock.crossed(1200.0));
        assert!(!clock.crossed(1250.0));
        assert!(clock.crossed(1300.1));
    }

    #[test]
    fn fraction_is_zero_on_first_frame() {
        let mut clock = StepClock::new(100.0);
        assert_eq!(clock.fraction(42.0), 0.0);
        // The mark was adopted as the step start
        assert!((clock.fraction(92.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn fraction_tracks_step_progress() {
        let mut clock = StepClock::new(100.0);
        assert!(clock.crossed(10.0));
        assert_eq!(clock.fraction(10.0), 0.0);
        assert!((clock.fraction(60.0) - 0.5).abs() < 1e-6);
        assert!((clock.fraction(110.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn fraction_unclamped_when_frame_stalls() {
        let mut clock = StepClock::new(100.0);
        assert!(clock.crossed(10.0));

        // No frame arrived in time to fire the next step; the fraction runs
        // past 1 and the render extrapolates
        let f = clock.fraction(310.0);
        assert!((f - 3.0).abs() < 1e-6);
    }
}
