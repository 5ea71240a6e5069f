//! Click-rate (CPS) game
//!
//! Counts clicks over a fixed window after a 3-2-1 countdown. The countdown
//! and the window both advance off the injected frame clock; a coarse tick
//! steps through every integer countdown value rather than skipping.

use serde::{Deserialize, Serialize};

use crate::games::WindowTimer;

/// Selectable window lengths, seconds.
pub const TIME_MODES: [u32; 3] = [1, 5, 10];
/// Countdown starts here and decrements once per second.
pub const COUNTDOWN_START: u8 = 3;
const COUNTDOWN_STEP_MS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickPhase {
    Idle,
    /// 3-2-1 pre-roll; clicks render feedback but don't score.
    Countdown,
    Running,
    Finished,
}

/// What a press did, so the presentation can react without re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Started the countdown.
    Started,
    /// Counted toward the score.
    Counted,
    /// Feedback only (countdown or finished).
    Feedback,
}

/// One click-rate session.
#[derive(Debug, Clone)]
pub struct ClickRateSession {
    phase: ClickPhase,
    timer: WindowTimer,
    countdown: u8,
    next_countdown_at: Option<f64>,
    clicks: u32,
}

impl ClickRateSession {
    pub fn new(limit_s: u32) -> Self {
        Self {
            phase: ClickPhase::Idle,
            timer: WindowTimer::new(limit_s),
            countdown: COUNTDOWN_START,
            next_countdown_at: None,
            clicks: 0,
        }
    }

    pub fn phase(&self) -> ClickPhase {
        self.phase
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn countdown(&self) -> u8 {
        self.countdown
    }

    pub fn limit_s(&self) -> u32 {
        self.timer.limit_s()
    }

    pub fn remaining_s(&self) -> f32 {
        self.timer.remaining_s()
    }

    /// Handle a press.
    pub fn press(&mut self, now_ms: f64) -> PressOutcome {
        match self.phase {
            ClickPhase::Idle => {
                self.countdown = COUNTDOWN_START;
                self.next_countdown_at = Some(now_ms + COUNTDOWN_STEP_MS);
                self.phase = ClickPhase::Countdown;
                log::debug!("cps countdown started ({}s window)", self.limit_s());
                PressOutcome::Started
            }
            ClickPhase::Running => {
                self.clicks += 1;
                PressOutcome::Counted
            }
            ClickPhase::Countdown | ClickPhase::Finished => PressOutcome::Feedback,
        }
    }

    /// Per-frame clock tick.
    pub fn tick(&mut self, now_ms: f64) {
        match self.phase {
            ClickPhase::Countdown => {
                // Step through every boundary the frame may have crossed.
                while let Some(at) = self.next_countdown_at {
                    if now_ms < at {
                        break;
                    }
                    self.countdown -= 1;
                    if self.countdown == 0 {
                        self.next_countdown_at = None;
                        self.phase = ClickPhase::Running;
                        // The window opens at the scheduled GO boundary, not
                        // whenever the next frame happened to land.
                        self.timer.start(at);
                    } else {
                        self.next_countdown_at = Some(at + COUNTDOWN_STEP_MS);
                    }
                }
            }
            ClickPhase::Running => {
                if self.timer.tick(now_ms) {
                    self.phase = ClickPhase::Finished;
                    log::info!(
                        "cps run finished: {} clicks in {}s",
                        self.clicks,
                        self.limit_s()
                    );
                }
            }
            ClickPhase::Idle | ClickPhase::Finished => {}
        }
    }

    /// Switch the window length. Ignored while a run is in progress;
    /// otherwise resets to `Idle` under the new limit.
    pub fn set_mode(&mut self, limit_s: u32) {
        if self.phase == ClickPhase::Running {
            return;
        }
        self.timer = WindowTimer::new(limit_s);
        self.reset();
    }

    /// Back to `Idle`, counters zeroed. Idempotent.
    pub fn reset(&mut self) {
        self.phase = ClickPhase::Idle;
        self.timer = WindowTimer::new(self.timer.limit_s());
        self.countdown = COUNTDOWN_START;
        self.next_countdown_at = None;
        self.clicks = 0;
    }

    /// Live rate over the elapsed portion of the window; 0 until any time
    /// has elapsed.
    pub fn current_cps(&self) -> f64 {
        let elapsed = self.timer.elapsed_s() as f64;
        if self.clicks > 0 && elapsed > 0.0 {
            self.clicks as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Rate over the whole window; meaningful once `Finished`.
    pub fn final_cps(&self) -> f64 {
        self.clicks as f64 / self.timer.limit_s() as f64
    }

    /// Live rate formatted with one decimal, as the HUD shows it.
    pub fn current_cps_display(&self) -> String {
        format!("{:.1}", self.current_cps())
    }

    /// Final rate formatted with two decimals.
    pub fn final_cps_display(&self) -> String {
        format!("{:.2}", self.final_cps())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive the countdown to completion; returns the GO timestamp.
    fn run_countdown(session: &mut ClickRateSession, start_ms: f64) -> f64 {
        assert_eq!(session.press(start_ms), PressOutcome::Started);
        let mut now = start_ms;
        while session.phase() == ClickPhase::Countdown {
            now += 16.0;
            session.tick(now);
        }
        assert_eq!(session.phase(), ClickPhase::Running);
        start_ms + 3.0 * 1000.0
    }

    #[test]
    fn test_countdown_steps_through_integers() {
        let mut session = ClickRateSession::new(5);
        session.press(0.0);
        assert_eq!(session.countdown(), 3);
        session.tick(1001.0);
        assert_eq!(session.countdown(), 2);
        session.tick(2001.0);
        assert_eq!(session.countdown(), 1);
        session.tick(3001.0);
        assert_eq!(session.phase(), ClickPhase::Running);
    }

    #[test]
    fn test_coarse_tick_does_not_skip_go() {
        let mut session = ClickRateSession::new(5);
        session.press(0.0);
        // One giant frame crosses all three boundaries.
        session.tick(3500.0);
        assert_eq!(session.phase(), ClickPhase::Running);
        assert_eq!(session.countdown(), 0);
    }

    #[test]
    fn test_clicks_during_countdown_are_feedback_only() {
        let mut session = ClickRateSession::new(5);
        session.press(0.0);
        assert_eq!(session.press(500.0), PressOutcome::Feedback);
        assert_eq!(session.clicks(), 0);
    }

    #[test]
    fn test_even_clicks_over_five_seconds_is_two_cps() {
        let mut session = ClickRateSession::new(5);
        let go = run_countdown(&mut session, 0.0);
        // 10 clicks evenly spaced across the 5 second window.
        for i in 0..10 {
            let at = go + i as f64 * 500.0;
            session.tick(at);
            assert_eq!(session.press(at), PressOutcome::Counted);
        }
        session.tick(go + 5000.0);
        assert_eq!(session.phase(), ClickPhase::Finished);
        assert_eq!(session.final_cps_display(), "2.00");
    }

    #[test]
    fn test_counter_freezes_after_finish() {
        let mut session = ClickRateSession::new(1);
        let go = run_countdown(&mut session, 0.0);
        session.press(go + 100.0);
        session.tick(go + 1000.0);
        assert_eq!(session.phase(), ClickPhase::Finished);
        assert_eq!(session.press(go + 1100.0), PressOutcome::Feedback);
        assert_eq!(session.clicks(), 1);
    }

    #[test]
    fn test_current_cps_guards_zero_elapsed() {
        let mut session = ClickRateSession::new(5);
        assert_eq!(session.current_cps(), 0.0);
        let go = run_countdown(&mut session, 0.0);
        session.press(go);
        // No time elapsed inside the window yet.
        session.tick(go);
        assert_eq!(session.current_cps(), 0.0);
        session.tick(go + 2000.0);
        assert!((session.current_cps() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_mode_change_resets_unless_running() {
        let mut session = ClickRateSession::new(5);
        session.set_mode(10);
        assert_eq!(session.limit_s(), 10);
        assert_eq!(session.phase(), ClickPhase::Idle);

        let go = run_countdown(&mut session, 0.0);
        session.press(go + 100.0);
        session.set_mode(1);
        // Ignored mid-run.
        assert_eq!(session.limit_s(), 10);
        assert_eq!(session.clicks(), 1);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut session = ClickRateSession::new(5);
        let go = run_countdown(&mut session, 0.0);
        session.press(go + 10.0);
        session.reset();
        session.reset();
        assert_eq!(session.phase(), ClickPhase::Idle);
        assert_eq!(session.clicks(), 0);
        assert_eq!(session.countdown(), COUNTDOWN_START);
        // A stale countdown boundary must not fire after reset.
        session.tick(100_000.0);
        assert_eq!(session.phase(), ClickPhase::Idle);
    }
}
