//! Smooth scrolling.
//!
//! A [`Glide`] is a one-shot, time-eased transition between two scroll
//! offsets. The event loop samples it every frame; sampling at or past the
//! deadline yields exactly the target offset, so the final-state guarantee
//! holds no matter how frames were scheduled.
//!
//! # Pattern
//!
//! - Navigation and scroll-to-top start a glide
//! - Manual scroll input cancels it (the user wins)
//! - `sample()` never overshoots and never runs backwards past its endpoints

use std::time::{Duration, Instant};

/// Shortest glide, used for tiny distances.
const MIN_DURATION_MS: u64 = 80;

/// Longest glide, used for cross-document jumps.
const MAX_DURATION_MS: u64 = 400;

/// Rows per additional millisecond of duration.
const ROWS_PER_MS: f32 = 0.5;

/// An in-flight smooth scroll.
#[derive(Debug, Clone, Copy)]
pub struct Glide {
    from: u16,
    to: u16,
    started: Instant,
    duration: Duration,
}

impl Glide {
    /// Start a glide between two offsets. Duration scales with distance,
    /// clamped to [80ms, 400ms].
    pub fn new(from: u16, to: u16) -> Self {
        Self::starting_at(from, to, Instant::now())
    }

    /// Start a glide with an explicit start instant (testable clock).
    pub fn starting_at(from: u16, to: u16, started: Instant) -> Self {
        let distance = from.abs_diff(to) as f32;
        let ms = (distance / ROWS_PER_MS) as u64;
        Self {
            from,
            to,
            started,
            duration: Duration::from_millis(ms.clamp(MIN_DURATION_MS, MAX_DURATION_MS)),
        }
    }

    /// Target offset.
    #[inline]
    pub fn target(&self) -> u16 {
        self.to
    }

    /// Offset at the given instant, cubic ease-in-out between the
    /// endpoints. Before the start it is `from`; at or after the deadline
    /// it is exactly `to`.
    pub fn sample(&self, now: Instant) -> u16 {
        if now <= self.started {
            return self.from;
        }
        let elapsed = now - self.started;
        if elapsed >= self.duration {
            return self.to;
        }

        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = ease_in_out_cubic(t);
        let from = self.from as f32;
        let to = self.to as f32;
        (from + (to - from) * eased).round() as u16
    }

    /// Whether the glide has reached its deadline.
    #[inline]
    pub fn is_done(&self, now: Instant) -> bool {
        now >= self.started + self.duration
    }
}

/// Cubic ease-in-out on [0, 1].
fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settles_exactly_on_target() {
        let start = Instant::now();
        let glide = Glide::starting_at(0, 120, start);

        assert_eq!(glide.sample(start + Duration::from_secs(10)), 120);
        assert!(glide.is_done(start + Duration::from_secs(10)));
    }

    #[test]
    fn test_starts_at_origin() {
        let start = Instant::now();
        let glide = Glide::starting_at(40, 0, start);
        assert_eq!(glide.sample(start), 40);
        assert!(!glide.is_done(start));
    }

    #[test]
    fn test_stays_within_endpoints() {
        let start = Instant::now();
        let glide = Glide::starting_at(10, 90, start);

        for ms in (0..=500).step_by(7) {
            let offset = glide.sample(start + Duration::from_millis(ms));
            assert!((10..=90).contains(&offset), "offset {offset} at {ms}ms");
        }
    }

    #[test]
    fn test_monotonic_toward_target() {
        let start = Instant::now();
        let glide = Glide::starting_at(0, 200, start);

        let mut last = 0;
        for ms in (0..=450).step_by(10) {
            let offset = glide.sample(start + Duration::from_millis(ms));
            assert!(offset >= last, "went backwards at {ms}ms");
            last = offset;
        }
        assert_eq!(last, 200);
    }

    #[test]
    fn test_downward_glide() {
        let start = Instant::now();
        let glide = Glide::starting_at(150, 0, start);
        assert_eq!(glide.target(), 0);
        assert_eq!(glide.sample(start + Duration::from_secs(1)), 0);
    }

    #[test]
    fn test_duration_scales_with_distance() {
        let start = Instant::now();
        let short = Glide::starting_at(0, 2, start);
        let long = Glide::starting_at(0, 500, start);

        // A tiny glide finishes quickly, a long jump takes the cap
        assert!(short.is_done(start + Duration::from_millis(MIN_DURATION_MS)));
        assert!(!long.is_done(start + Duration::from_millis(MAX_DURATION_MS - 1)));
        assert!(long.is_done(start + Duration::from_millis(MAX_DURATION_MS)));
    }

    #[test]
    fn test_zero_distance_glide() {
        let start = Instant::now();
        let glide = Glide::starting_at(30, 30, start);
        assert_eq!(glide.sample(start + Duration::from_millis(1)), 30);
    }

    #[test]
    fn test_easing_endpoints() {
        assert!(ease_in_out_cubic(0.0).abs() < 1e-6);
        assert!((ease_in_out_cubic(1.0) - 1.0).abs() < 1e-6);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    }
}
