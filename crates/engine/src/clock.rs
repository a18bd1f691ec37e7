use std::time::{Duration, Instant};

use crate::types::{DEFAULT_MAX_DT_SECS, FRAME_MS};

/// Measures the time between frames in seconds.
///
/// Each reading is capped at `max_dt`, so a stalled or suspended host cannot
/// hand the simulation one huge step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self::starting_at(Instant::now(), max_dt)
    }

    pub fn starting_at(start: Instant, max_dt: f32) -> Self {
        let max_dt = if max_dt.is_finite() && max_dt > 0.0 {
            max_dt
        } else {
            DEFAULT_MAX_DT_SECS
        };
        Self { last: start, max_dt }
    }

    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }

    /// Seconds since the previous call (or construction), capped.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        dt.min(self.max_dt)
    }

    /// Time left until the next frame is due.
    pub fn until_next_frame(&self) -> Duration {
        Duration::from_millis(FRAME_MS as u64).saturating_sub(self.last.elapsed())
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_elapsed_seconds() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0, 0.25);
        let dt = clock.tick_at(t0 + Duration::from_millis(100));
        assert!((dt - 0.1).abs() < 1e-4);
    }

    #[test]
    fn caps_long_gaps() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0, 0.25);
        assert_eq!(clock.tick_at(t0 + Duration::from_secs(30)), 0.25);
    }

    #[test]
    fn time_going_backwards_is_zero() {
        let t0 = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::starting_at(t0, 0.25);
        assert_eq!(clock.tick_at(t0 - Duration::from_millis(500)), 0.0);
    }

    #[test]
    fn invalid_cap_falls_back_to_default() {
        assert_eq!(FrameClock::new(0.0).max_dt(), DEFAULT_MAX_DT_SECS);
        assert_eq!(FrameClock::new(f32::NAN).max_dt(), DEFAULT_MAX_DT_SECS);
        assert_eq!(FrameClock::new(0.5).max_dt(), 0.5);
    }
}
