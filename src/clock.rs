//! Frame timing
//!
//! Timestamps are injected by the host animation loop (milliseconds, same
//! scale as `performance.now()`); nothing in the core reads a wall clock.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Converts a stream of frame timestamps into per-frame deltas.
///
/// The first timestamp after construction or [`FrameClock::reset`] produces
/// no delta, so stopping and resuming a loop can never feed the simulation a
/// stale multi-second dt.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    prev_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next timestamp; returns the elapsed time in seconds since
    /// the previous one, or `None` on the first tick after a reset.
    pub fn tick(&mut self, now_ms: f64) -> Option<f32> {
        let dt = self.prev_ms.map(|prev| ((now_ms - prev) / 1000.0) as f32);
        self.prev_ms = Some(now_ms);
        // Timestamps should be nondecreasing; clamp defends against a
        // host that restarts its time origin without telling us.
        dt.map(|d| d.max(0.0))
    }

    /// Forget the previous timestamp. The next `tick` yields no delta.
    pub fn reset(&mut self) {
        self.prev_ms = None;
    }
}

/// Fixed-timestep accumulator.
///
/// Wall-clock deltas are banked and paid out as whole `SIM_DT` steps, capped
/// at `MAX_SUBSTEPS` per frame so a background tab doesn't trigger a
/// catch-up spiral on refocus.
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    accumulator: f32,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bank `dt` seconds and return how many fixed steps to run now.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.min(0.1);
        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            // Drop the remainder instead of carrying a growing debt.
            self.accumulator = 0.0;
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_has_no_delta() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(1000.0), None);
        let dt = clock.tick(1016.0).unwrap();
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_reset_discards_stale_reference() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        clock.tick(16.0);
        clock.reset();
        // A long pause between reset and resume must not surface as dt.
        assert_eq!(clock.tick(60_000.0), None);
        let dt = clock.tick(60_016.0).unwrap();
        assert!(dt < 0.02);
    }

    #[test]
    fn test_backwards_timestamp_clamps_to_zero() {
        let mut clock = FrameClock::new();
        clock.tick(100.0);
        assert_eq!(clock.tick(50.0), Some(0.0));
    }

    #[test]
    fn test_ticker_pays_out_whole_steps() {
        let mut ticker = Ticker::new();
        assert_eq!(ticker.advance(SIM_DT * 2.5), 2);
        // The half step carries over.
        assert_eq!(ticker.advance(SIM_DT * 0.5), 1);
    }

    #[test]
    fn test_ticker_clamps_long_stalls() {
        let mut ticker = Ticker::new();
        // A 10 second stall banks at most 100 ms of catch-up (6 steps at
        // 60 Hz), well under the substep cap.
        let steps = ticker.advance(10.0);
        assert!(steps <= MAX_SUBSTEPS);
        assert_eq!(steps, 6);
        assert_eq!(ticker.advance(0.0), 0);
    }
}
