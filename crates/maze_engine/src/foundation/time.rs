//! Frame clock feeding `Scene::delta_time`

use std::time::{Duration, Instant};

/// Longest step a single frame may report, in seconds
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Per-frame clock.
///
/// The first tick reports a zero delta. Steps longer than
/// [`MAX_FRAME_DELTA`] (a debugger pause, a blocked window) are clamped.
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    last_tick: Option<Instant>,
    delta_time: f32,
    elapsed: Duration,
    frame_count: u64,
}

impl FrameTimer {
    /// Timer that has not ticked yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the wall clock and start a new frame
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let step = self
            .last_tick
            .map_or(0.0, |last| now.duration_since(last).as_secs_f32());
        self.last_tick = Some(now);
        self.advance(step)
    }

    /// Start a new frame of a given length without reading the clock
    pub fn advance(&mut self, step: f32) -> f32 {
        self.delta_time = step.clamp(0.0, MAX_FRAME_DELTA);
        self.elapsed += Duration::from_secs_f32(self.delta_time);
        self.frame_count += 1;
        self.delta_time
    }

    /// Seconds reported for the current frame
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Sum of all reported frame deltas
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Frames started so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_advance_accumulates() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.frame_count(), 0);

        timer.advance(0.125);
        timer.advance(0.125);

        assert_eq!(timer.delta_time(), 0.125);
        assert_abs_diff_eq!(timer.elapsed().as_secs_f32(), 0.25, epsilon = 1e-6);
        assert_eq!(timer.frame_count(), 2);
    }

    #[test]
    fn test_long_and_negative_steps_are_clamped() {
        let mut timer = FrameTimer::new();

        assert_eq!(timer.advance(3.0), MAX_FRAME_DELTA);
        assert_eq!(timer.advance(-1.0), 0.0);
        assert_abs_diff_eq!(timer.elapsed().as_secs_f32(), MAX_FRAME_DELTA, epsilon = 1e-6);
    }

    #[test]
    fn test_first_tick_is_zero() {
        let mut timer = FrameTimer::new();

        assert_eq!(timer.tick(), 0.0);
        assert!(timer.tick() >= 0.0);
        assert_eq!(timer.frame_count(), 2);
    }
}
