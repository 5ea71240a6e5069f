//! Decorative particle field
//!
//! Ambient background physics shared by every game page. This module is pure
//! and deterministic:
//! - Fixed timestep only (one `step` per 60 Hz tick)
//! - Seeded RNG only
//! - No rendering or platform dependencies; output is a transform snapshot

pub mod state;
pub mod tick;

pub use state::{
    BoundaryMode, FieldConfig, Particle, ParticleField, ParticleTransform, Repulsion,
};
