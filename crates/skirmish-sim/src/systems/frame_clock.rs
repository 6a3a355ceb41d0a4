//! Frame time normalization.
//!
//! Every per-frame elapsed time passes through here before it reaches the
//! spawn scheduler or the action runner, so a stalled frame (pause,
//! breakpoint, scene start) counts as one nominal frame.

use skirmish_core::constants::{MAX_FRAME_DELTA_SECS, NOMINAL_FRAME_SECS};

/// Normalize a raw wall-clock delta with the default limits.
pub fn normalize(raw_delta: f64) -> f64 {
    normalize_with(raw_delta, MAX_FRAME_DELTA_SECS, NOMINAL_FRAME_SECS)
}

/// Deltas above `max_delta` become `nominal`; negative and NaN deltas
/// become zero.
pub fn normalize_with(raw_delta: f64, max_delta: f64, nominal: f64) -> f64 {
    if raw_delta > max_delta {
        nominal
    } else if raw_delta.is_nan() || raw_delta < 0.0 {
        0.0
    } else {
        raw_delta
    }
}

/// Turns absolute host timestamps into normalized frame deltas.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time: Option<f64>,
    max_delta: f64,
    nominal: f64,
}

impl FrameClock {
    pub fn new(max_delta: f64, nominal: f64) -> Self {
        Self {
            last_time: None,
            max_delta,
            nominal,
        }
    }

    /// Record `current_time` and return the normalized delta since the
    /// previous call. The first call measures from time zero. A NaN
    /// timestamp is not recorded and counts as no time.
    pub fn delta(&mut self, current_time: f64) -> f64 {
        if current_time.is_nan() {
            return 0.0;
        }
        let previous = self.last_time.unwrap_or(0.0);
        self.last_time = Some(current_time);
        normalize_with(current_time - previous, self.max_delta, self.nominal)
    }

    pub fn last_time(&self) -> Option<f64> {
        self.last_time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DELTA_SECS, NOMINAL_FRAME_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_small_deltas_through() {
        for e in [0.0, 0.001, 1.0 / 60.0, 0.5, 1.0] {
            assert_eq!(normalize(e), e);
        }
    }

    #[test]
    fn clamps_stalls_to_nominal_frame() {
        for e in [1.000_001, 2.0, 30.0, f64::MAX] {
            assert_eq!(normalize(e), 1.0 / 60.0);
        }
    }

    #[test]
    fn negative_delta_is_zero() {
        assert_eq!(normalize(-0.25), 0.0);
    }

    #[test]
    fn nan_delta_is_zero() {
        assert_eq!(normalize(f64::NAN), 0.0);
        assert_eq!(normalize(f64::INFINITY), 1.0 / 60.0);
        assert_eq!(normalize(f64::NEG_INFINITY), 0.0);

        let mut clock = FrameClock::default();
        clock.delta(0.5);
        assert_eq!(clock.delta(f64::NAN), 0.0);
        assert_eq!(clock.last_time(), Some(0.5));
        assert!((clock.delta(0.6) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn clock_measures_between_calls() {
        let mut clock = FrameClock::default();
        // First call from a large host timestamp is a stall.
        assert_eq!(clock.delta(1000.0), 1.0 / 60.0);
        assert!((clock.delta(1000.1) - 0.1).abs() < 1e-9);
        assert_eq!(clock.last_time(), Some(1000.1));
        // Resuming after a long pause.
        assert_eq!(clock.delta(1010.0), 1.0 / 60.0);
    }

    #[test]
    fn clock_first_small_timestamp_passes_through() {
        let mut clock = FrameClock::default();
        assert!((clock.delta(0.5) - 0.5).abs() < 1e-12);
    }
}
