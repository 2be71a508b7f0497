//! Wall-clock frame timing.

use std::time::Instant;

/// Measures the wall-clock delta between frames.
///
/// Re-armed whenever the loop (re)starts so the first frame after a pause
/// measures zero instead of the time spent paused.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call, or 0 on the first call after a re-arm.
    pub fn delta(&mut self, now: Instant) -> f64 {
        let dt = match self.last {
            Some(prev) => now.saturating_duration_since(prev).as_secs_f64(),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }

    /// Forget the previous frame.
    pub fn rearm(&mut self) {
        self.last = None;
    }

    pub fn is_armed(&self) -> bool {
        self.last.is_some()
    }
}
