//! Game state machines
//!
//! One session type per game page. Sessions are driven by discrete input
//! events (presses, typed characters) plus per-frame `tick(now_ms)` calls for
//! time-based transitions; they never schedule callbacks themselves, so
//! leaving a phase can't be raced by a stale timer. All handlers are
//! idempotent against being invoked after the relevant phase has changed.

pub mod aim;
pub mod click_rate;
pub mod reaction;
pub mod typing;

use serde::{Deserialize, Serialize};

/// Identifies one of the four games, e.g. as a best-score storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKey {
    Reaction,
    ClickRate,
    Aim,
    Typing,
}

impl GameKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKey::Reaction => "reaction",
            GameKey::ClickRate => "cps",
            GameKey::Aim => "aim",
            GameKey::Typing => "typing",
        }
    }

    /// LocalStorage key for the persisted best score.
    pub fn storage_key(&self) -> &'static str {
        match self {
            GameKey::Reaction => "reflex_best_reaction",
            GameKey::ClickRate => "reflex_best_cps",
            GameKey::Aim => "reflex_best_aim",
            GameKey::Typing => "reflex_best_typing",
        }
    }
}

/// Countdown window shared by the click-rate and aim games.
///
/// Tracks `remaining = max(0, limit - elapsed)` from a start timestamp; the
/// tick that first observes zero reports expiry exactly once.
#[derive(Debug, Clone, Default)]
pub struct WindowTimer {
    limit_s: u32,
    started_at: Option<f64>,
    remaining_s: f32,
}

impl WindowTimer {
    pub fn new(limit_s: u32) -> Self {
        Self {
            limit_s,
            started_at: None,
            remaining_s: limit_s as f32,
        }
    }

    pub fn limit_s(&self) -> u32 {
        self.limit_s
    }

    pub fn start(&mut self, now_ms: f64) {
        self.started_at = Some(now_ms);
        self.remaining_s = self.limit_s as f32;
    }

    /// Recompute remaining time; returns true on the tick that first hits 0.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let Some(start) = self.started_at else {
            return false;
        };
        if self.remaining_s <= 0.0 {
            return false;
        }
        let elapsed = ((now_ms - start) / 1000.0) as f32;
        self.remaining_s = (self.limit_s as f32 - elapsed).max(0.0);
        self.remaining_s <= 0.0
    }

    pub fn remaining_s(&self) -> f32 {
        self.remaining_s
    }

    /// Seconds consumed so far (limit - remaining); 0 before start.
    pub fn elapsed_s(&self) -> f32 {
        self.limit_s as f32 - self.remaining_s
    }
}
