//! Reflex Lab - simulation core for four reflex mini-games
//!
//! Core modules:
//! - `clock`: frame timing (timestamp -> dt, fixed-step accumulator)
//! - `field`: decorative particle field (ambient background physics)
//! - `games`: the four game state machines (reaction, click rate, aim, typing)
//! - `corpus`: static text tables for the typing game
//! - `scores`: per-game best-score persistence
//! - `device`: viewport/user-agent lockout gate
//!
//! Everything here is deterministic: timestamps come in from the host loop,
//! randomness comes from a seeded PCG, and rendering is a pure snapshot of
//! transforms. No module touches the document except the wasm storage backend.

pub mod clock;
pub mod corpus;
pub mod device;
pub mod field;
pub mod games;
pub mod pointer;
pub mod scores;

pub use clock::{FrameClock, Ticker};
pub use field::{BoundaryMode, FieldConfig, ParticleField, ParticleTransform};
pub use games::GameKey;
pub use games::aim::AimSession;
pub use games::click_rate::ClickRateSession;
pub use games::reaction::ReactionSession;
pub use games::typing::TypingSession;
pub use pointer::PointerState;
pub use scores::{BestScoreStore, MemoryScores};

/// Shared timing constants
pub mod consts {
    /// Fixed simulation timestep for the particle field (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// Set up logging and panic reporting in the browser.
/// Call once from the page's wasm entry point.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init_wasm() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("reflex-lab core initialized");
}
