//! Reaction-time game
//!
//! Measures the latency between a randomly delayed stimulus and the next
//! press. Pressing before the stimulus cancels the round. The stimulus is
//! not a scheduled callback: the session stores a deadline and the tick that
//! first crosses it fires the stimulus, so a reset can never be raced.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::games::GameKey;
use crate::scores::BestScoreStore;

/// Stimulus delay range, uniform in [min, max).
pub const STIMULUS_DELAY_MIN_MS: f64 = 2000.0;
pub const STIMULUS_DELAY_MAX_MS: f64 = 5000.0;

/// Current phase of a reaction round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReactionPhase {
    /// Waiting for the first press to start a round.
    Idle,
    /// Stimulus pending; pressing now is an early click.
    Waiting,
    /// Stimulus fired; the clock is running.
    Ready,
    /// Round finished, time recorded.
    Result,
    /// Pressed before the stimulus; time not recorded.
    EarlyClick,
}

/// One reaction-test session.
#[derive(Debug, Clone)]
pub struct ReactionSession {
    phase: ReactionPhase,
    rng: Pcg32,
    /// Timestamp at which the pending stimulus fires.
    stimulus_deadline: Option<f64>,
    /// Timestamp at which the stimulus actually fired.
    stimulus_at: Option<f64>,
    reaction_ms: Option<u32>,
    best_ms: Option<u32>,
}

impl ReactionSession {
    /// `best_ms` is the persisted personal best, if any.
    pub fn new(seed: u64, best_ms: Option<u32>) -> Self {
        Self {
            phase: ReactionPhase::Idle,
            rng: Pcg32::seed_from_u64(seed),
            stimulus_deadline: None,
            stimulus_at: None,
            reaction_ms: None,
            best_ms,
        }
    }

    pub fn phase(&self) -> ReactionPhase {
        self.phase
    }

    /// Last completed round's time.
    pub fn reaction_ms(&self) -> Option<u32> {
        self.reaction_ms
    }

    pub fn best_ms(&self) -> Option<u32> {
        self.best_ms
    }

    /// Handle a press. Exactly one transition is taken per call.
    pub fn press(&mut self, now_ms: f64, store: &mut dyn BestScoreStore) {
        match self.phase {
            ReactionPhase::Idle | ReactionPhase::Result | ReactionPhase::EarlyClick => {
                let delay = self
                    .rng
                    .random_range(STIMULUS_DELAY_MIN_MS..STIMULUS_DELAY_MAX_MS);
                self.stimulus_deadline = Some(now_ms + delay);
                self.stimulus_at = None;
                self.phase = ReactionPhase::Waiting;
                log::debug!("reaction round armed, stimulus in {delay:.0}ms");
            }
            ReactionPhase::Waiting => {
                // Too early; cancel the pending stimulus.
                self.stimulus_deadline = None;
                self.phase = ReactionPhase::EarlyClick;
            }
            ReactionPhase::Ready => {
                let stimulus = self.stimulus_at.unwrap_or(now_ms);
                let time = (now_ms - stimulus).round().max(0.0) as u32;
                self.reaction_ms = Some(time);
                self.phase = ReactionPhase::Result;
                if self.best_ms.is_none_or(|best| time <= best) {
                    self.best_ms = Some(time);
                    store.set(GameKey::Reaction, time);
                    log::info!("new best reaction time: {time}ms");
                }
            }
        }
    }

    /// Per-frame clock tick; fires the stimulus once its deadline passes.
    /// No timeout on `Ready`: the session waits indefinitely for a press.
    pub fn tick(&mut self, now_ms: f64) {
        if self.phase == ReactionPhase::Waiting
            && self.stimulus_deadline.is_some_and(|deadline| now_ms >= deadline)
        {
            self.stimulus_deadline = None;
            self.stimulus_at = Some(now_ms);
            self.phase = ReactionPhase::Ready;
        }
    }

    /// Back to `Idle` with no pending stimulus. Safe to call from any phase,
    /// any number of times.
    pub fn reset(&mut self) {
        self.phase = ReactionPhase::Idle;
        self.stimulus_deadline = None;
        self.stimulus_at = None;
        self.reaction_ms = None;
    }
}
