//! Aim-training game
//!
//! A fixed pool of three circular targets over a countdown window. Placement
//! is rejection-sampled in percent coordinates; hit testing is exact circular
//! containment against the target's live on-screen bounds, so a press in the
//! corner of a target's box falls through to the background as a miss.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::games::WindowTimer;

/// Selectable window lengths, seconds.
pub const TIME_MODES: [u32; 3] = [15, 30, 60];
/// Active targets while running.
pub const POOL_SIZE: usize = 3;
/// Spawn region inset: candidates land in [8%, 92%] of each axis.
pub const SPAWN_INSET_PCT: f32 = 8.0;
const SPAWN_SPAN_PCT: f32 = 84.0;
/// Minimum center distance between targets, percentage points.
pub const MIN_SEPARATION_PCT: f32 = 15.0;
/// Placement retries before accepting a crowded candidate.
pub const MAX_SPAWN_ATTEMPTS: u32 = 20;
/// On-screen target diameter, px.
pub const TARGET_SIZE_PX: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AimPhase {
    Idle,
    Running,
    Finished,
}

/// An active target. `pos` is in percent coordinates of the play area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub id: u32,
    pub pos: Vec2,
    pub size_px: f32,
}

/// A target's live on-screen geometry, measured by the presentation layer
/// from its rendered bounds at press time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetBounds {
    pub center: Vec2,
    pub radius: f32,
}

/// Result of a press localized to a target element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    Hit,
    /// Outside the circle (or stale); route to the background miss handler.
    PassThrough,
}

/// One aim-training session.
#[derive(Debug, Clone)]
pub struct AimSession {
    phase: AimPhase,
    timer: WindowTimer,
    rng: Pcg32,
    targets: Vec<Target>,
    score: u32,
    clicks: u32,
    misses: u32,
    next_id: u32,
}

impl AimSession {
    pub fn new(limit_s: u32, seed: u64) -> Self {
        Self {
            phase: AimPhase::Idle,
            timer: WindowTimer::new(limit_s),
            rng: Pcg32::seed_from_u64(seed),
            targets: Vec::with_capacity(POOL_SIZE),
            score: 0,
            clicks: 0,
            misses: 0,
            next_id: 0,
        }
    }

    pub fn phase(&self) -> AimPhase {
        self.phase
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn limit_s(&self) -> u32 {
        self.timer.limit_s()
    }

    pub fn remaining_s(&self) -> f32 {
        self.timer.remaining_s()
    }

    /// Hit percentage, 100 before the first click.
    pub fn accuracy(&self) -> u32 {
        if self.clicks == 0 {
            return 100;
        }
        let ratio = (self.clicks - self.misses) as f32 / self.clicks as f32;
        (ratio * 100.0).round() as u32
    }

    /// Start (or restart) a run: counters zeroed, pool filled, window open.
    pub fn start(&mut self, now_ms: f64) {
        self.phase = AimPhase::Running;
        self.score = 0;
        self.clicks = 0;
        self.misses = 0;
        self.targets.clear();
        self.fill_pool();
        self.timer.start(now_ms);
        log::debug!("aim run started ({}s window)", self.limit_s());
    }

    /// Per-frame clock tick.
    pub fn tick(&mut self, now_ms: f64) {
        if self.phase == AimPhase::Running && self.timer.tick(now_ms) {
            self.phase = AimPhase::Finished;
            log::info!(
                "aim run finished: {} hits, {}% accuracy",
                self.score,
                self.accuracy()
            );
        }
    }

    /// Switch the window length. Ignored while running.
    pub fn set_mode(&mut self, limit_s: u32) {
        if self.phase == AimPhase::Running {
            return;
        }
        self.timer = WindowTimer::new(limit_s);
        self.reset();
    }

    /// Back to `Idle`, counters zeroed, pool emptied. Idempotent.
    pub fn reset(&mut self) {
        self.phase = AimPhase::Idle;
        self.timer = WindowTimer::new(self.timer.limit_s());
        self.targets.clear();
        self.score = 0;
        self.clicks = 0;
        self.misses = 0;
    }

    /// Press localized to target `id`, with the pointer position and the
    /// target's live bounds in the same pixel space.
    ///
    /// Counts a hit only on exact circular containment. Anything else is
    /// `PassThrough`: the caller must forward it to [`AimSession::press_background`],
    /// which is where the single miss gets counted (no double-counting).
    pub fn press_target(
        &mut self,
        id: u32,
        pointer: Vec2,
        bounds: TargetBounds,
    ) -> HitOutcome {
        if self.phase != AimPhase::Running {
            return HitOutcome::PassThrough;
        }
        if pointer.distance(bounds.center) > bounds.radius {
            return HitOutcome::PassThrough;
        }
        let Some(index) = self.targets.iter().position(|t| t.id == id) else {
            // Stale press on a target that was already consumed.
            return HitOutcome::PassThrough;
        };
        self.targets.swap_remove(index);
        self.score += 1;
        self.clicks += 1;
        self.fill_pool();
        HitOutcome::Hit
    }

    /// Press that reached the play-area background.
    pub fn press_background(&mut self) {
        if self.phase != AimPhase::Running {
            return;
        }
        self.misses += 1;
        self.clicks += 1;
    }

    /// Top the pool back up to `POOL_SIZE`.
    fn fill_pool(&mut self) {
        while self.targets.len() < POOL_SIZE {
            let target = self.spawn_target();
            self.targets.push(target);
        }
    }

    /// Rejection-sample a position inside the inset region, keeping
    /// `MIN_SEPARATION_PCT` from every live target; after
    /// `MAX_SPAWN_ATTEMPTS` the last candidate wins so a crowded area can
    /// never deadlock the spawner.
    fn spawn_target(&mut self) -> Target {
        let mut pos = self.sample_position();
        for _ in 1..MAX_SPAWN_ATTEMPTS {
            let clear = self
                .targets
                .iter()
                .all(|t| t.pos.distance(pos) > MIN_SEPARATION_PCT);
            if clear {
                break;
            }
            pos = self.sample_position();
        }
        let id = self.next_id;
        self.next_id += 1;
        Target { id, pos, size_px: TARGET_SIZE_PX }
    }

    fn sample_position(&mut self) -> Vec2 {
        Vec2::new(
            SPAWN_INSET_PCT + self.rng.random_range(0.0..SPAWN_SPAN_PCT),
            SPAWN_INSET_PCT + self.rng.random_range(0.0..SPAWN_SPAN_PCT),
        )
    }
}
