//! Typing-speed game
//!
//! Compares an append-only input buffer against a generated reference text.
//! WPM and accuracy are recomputed from scratch on every tick so the metrics
//! are always consistent with the current buffer; no incremental state is
//! trusted across frames.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::corpus::{self, Difficulty};

/// Floor on elapsed minutes when computing WPM, to guard the first frames.
const MIN_ELAPSED_MIN: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypingPhase {
    Idle,
    Active,
    Completed,
}

/// One typing session.
#[derive(Debug, Clone)]
pub struct TypingSession {
    phase: TypingPhase,
    difficulty: Difficulty,
    rng: Pcg32,
    reference: String,
    /// Reference as chars, for position-for-position comparison.
    reference_chars: Vec<char>,
    typed: Vec<char>,
    session_start: Option<f64>,
    elapsed_s: f64,
    wpm: u32,
    accuracy: u32,
}

impl TypingSession {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let reference = corpus::generate_text(difficulty, &mut rng);
        let reference_chars = reference.chars().collect();
        Self {
            phase: TypingPhase::Idle,
            difficulty,
            rng,
            reference,
            reference_chars,
            typed: Vec::new(),
            session_start: None,
            elapsed_s: 0.0,
            wpm: 0,
            accuracy: 100,
        }
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn typed_len(&self) -> usize {
        self.typed.len()
    }

    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    pub fn accuracy(&self) -> u32 {
        self.accuracy
    }

    /// Append typed characters. The first character starts the session;
    /// reaching the reference length completes it on the spot, freezing the
    /// timer and the metrics. Input past the reference length is dropped.
    pub fn push_str(&mut self, now_ms: f64, input: &str) {
        if self.phase == TypingPhase::Completed {
            return;
        }
        let room = self.reference_chars.len().saturating_sub(self.typed.len());
        if room == 0 || input.is_empty() {
            return;
        }
        if self.phase == TypingPhase::Idle {
            self.phase = TypingPhase::Active;
            self.session_start = Some(now_ms);
            log::debug!("typing session started ({})", self.difficulty.as_str());
        }
        self.typed.extend(input.chars().take(room));

        if self.typed.len() >= self.reference_chars.len() {
            // Final metrics freeze at the completing keystroke.
            self.recompute(now_ms);
            self.phase = TypingPhase::Completed;
            log::info!(
                "typing session completed: {} wpm, {}% accuracy",
                self.wpm,
                self.accuracy
            );
        }
    }

    /// Per-frame clock tick; refreshes live metrics while active.
    pub fn tick(&mut self, now_ms: f64) {
        if self.phase == TypingPhase::Active {
            self.recompute(now_ms);
        }
    }

    /// Regenerate the reference under a new difficulty and reset.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.reset();
    }

    /// Fresh reference text, empty buffer, zeroed metrics. Idempotent in the
    /// sense that the session always lands in `Idle` with clean state; the
    /// reference text itself is re-rolled on every call.
    pub fn reset(&mut self) {
        self.reference = corpus::generate_text(self.difficulty, &mut self.rng);
        self.reference_chars = self.reference.chars().collect();
        self.typed.clear();
        self.session_start = None;
        self.elapsed_s = 0.0;
        self.wpm = 0;
        self.accuracy = 100;
        self.phase = TypingPhase::Idle;
    }

    /// Recompute every metric from the buffer and the clock. Pure function
    /// of (reference, typed, elapsed).
    fn recompute(&mut self, now_ms: f64) {
        let Some(start) = self.session_start else {
            return;
        };
        self.elapsed_s = ((now_ms - start) / 1000.0).max(0.0);

        let typed_len = self.typed.len();
        let minutes = (self.elapsed_s / 60.0).max(MIN_ELAPSED_MIN);
        self.wpm = ((typed_len as f64 / 5.0) / minutes).round() as u32;

        self.accuracy = if typed_len == 0 {
            100
        } else {
            let mismatches = self
                .typed
                .iter()
                .zip(&self.reference_chars)
                .filter(|(t, r)| t != r)
                .count();
            let ratio = 1.0 - mismatches as f64 / typed_len as f64;
            (ratio * 100.0).round().max(0.0) as u32
        };
    }
}
