//! Time calculation helpers for animations: progress, completion and
//! interpolation. Pure apart from reading elapsed time.

use std::time::{Duration, Instant};

/// Animation progress in [0.0, 1.0] for an animation started at `start`.
#[inline]
pub fn progress(start: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = start.elapsed();
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Whether an animation started at `start` has run its full duration.
#[inline]
pub fn is_complete(start: Instant, duration: Duration) -> bool {
    start.elapsed() >= duration
}

/// Linear interpolation between two values, t in [0.0, 1.0].
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Interpolated counter value climbing from zero to `target`.
#[inline]
pub fn lerp_counter(target: u32, t: f64) -> u32 {
    lerp(0.0, target as f64, t).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn counter_reaches_target() {
        assert_eq!(lerp_counter(200, 0.0), 0);
        assert_eq!(lerp_counter(200, 0.5), 100);
        assert_eq!(lerp_counter(200, 1.0), 200);
    }

    #[test]
    fn progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn zero_duration_is_complete() {
        let start = Instant::now();
        assert!(is_complete(start, Duration::ZERO));
    }
}
