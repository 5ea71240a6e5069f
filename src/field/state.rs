//! Particle field state and configuration
//!
//! Population and force constants are fixed at construction; the field never
//! allocates after `new`. Velocities are split into a constant `drift`
//! component and a damped `impulse` component so wrap-mode particles keep
//! cruising while pointer kicks always decay (the system is asymptotically
//! stable absent external forces).

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// What happens when a particle leaves the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryMode {
    /// Teleport to the opposite edge once past `margin` px outside the view.
    Wrap { margin: f32 },
    /// Weak restoring force toward the spawn position.
    SpringToOrigin { k: f32 },
}

/// Pointer repulsion constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repulsion {
    /// Interaction radius in px; force falls off linearly to zero here.
    pub radius: f32,
    /// Force scale at distance zero.
    pub strength: f32,
}

/// Field construction parameters. Fixed for the lifetime of the field.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    pub count: usize,
    pub view: Vec2,
    pub boundary: BoundaryMode,
    pub repulsion: Option<Repulsion>,
    /// Per-tick velocity damping on the impulse component, in (0, 1).
    pub friction: f32,
    /// Max |component| of the constant drift velocity, px per tick.
    pub drift_max: f32,
    /// Extra downward drift bias, px per tick (typing's glyph rain).
    pub drift_down_bias: f32,
    /// Max |initial impulse component|, px per tick.
    pub impulse_max: f32,
    /// Max |angular speed|, degrees per tick.
    pub rot_speed_max: f32,
    pub size_min: f32,
    pub size_max: f32,
    /// Glyphs assigned round-robin-free (random) per particle; empty = none.
    pub glyphs: &'static [char],
}

impl FieldConfig {
    /// Reaction page: spring-anchored icons that scatter from the pointer.
    pub fn reaction(view: Vec2) -> Self {
        Self {
            count: 60,
            view,
            boundary: BoundaryMode::SpringToOrigin { k: 0.008 },
            repulsion: Some(Repulsion { radius: 250.0, strength: 1.5 }),
            friction: 0.90,
            drift_max: 0.0,
            drift_down_bias: 0.0,
            impulse_max: 0.25,
            rot_speed_max: 0.5,
            size_min: 10.0,
            size_max: 30.0,
            glyphs: &[],
        }
    }

    /// Click-rate page: free-drifting icons that wrap around the view.
    pub fn click_rate(view: Vec2) -> Self {
        Self {
            count: 60,
            view,
            boundary: BoundaryMode::Wrap { margin: 50.0 },
            repulsion: None,
            friction: 0.92,
            drift_max: 0.25,
            drift_down_bias: 0.0,
            impulse_max: 0.0,
            rot_speed_max: 1.0,
            size_min: 10.0,
            size_max: 30.0,
            glyphs: &[],
        }
    }

    /// Aim page: wider interaction radius, gentler push.
    pub fn aim(view: Vec2) -> Self {
        Self {
            count: 60,
            view,
            boundary: BoundaryMode::SpringToOrigin { k: 0.005 },
            repulsion: Some(Repulsion { radius: 300.0, strength: 1.0 }),
            friction: 0.92,
            drift_max: 0.0,
            drift_down_bias: 0.0,
            impulse_max: 0.25,
            rot_speed_max: 0.5,
            size_min: 15.0,
            size_max: 35.0,
            glyphs: &[],
        }
    }

    /// Typing page: falling matrix glyphs, wrapping, no pointer coupling.
    pub fn typing(view: Vec2) -> Self {
        Self {
            count: 80,
            view,
            boundary: BoundaryMode::Wrap { margin: 20.0 },
            repulsion: None,
            friction: 0.92,
            drift_max: 0.1,
            drift_down_bias: 0.45,
            impulse_max: 0.0,
            rot_speed_max: 0.0,
            size_min: 10.0,
            size_max: 24.0,
            glyphs: &crate::corpus::MATRIX_GLYPHS,
        }
    }
}

/// One background particle. Never individually destroyed; recycled via
/// wraparound or spring return.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub origin: Vec2,
    /// Constant cruise velocity, px per tick.
    pub drift: Vec2,
    /// Damped velocity component, px per tick.
    pub impulse: Vec2,
    /// Degrees.
    pub rotation: f32,
    /// Degrees per tick.
    pub rot_speed: f32,
    pub size: f32,
    pub glyph: Option<char>,
}

/// Render output for one particle; the presentation layer applies these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleTransform {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub size: f32,
    pub glyph: Option<char>,
}

/// The particle population plus its fixed force constants.
#[derive(Debug, Clone)]
pub struct ParticleField {
    pub(super) config: FieldConfig,
    pub(super) particles: Vec<Particle>,
    ticker: crate::clock::Ticker,
}

impl ParticleField {
    /// Spawn `config.count` particles uniformly over the view.
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let particles = (0..config.count)
            .map(|_| Self::spawn(&config, &mut rng))
            .collect();
        Self {
            config,
            particles,
            ticker: crate::clock::Ticker::new(),
        }
    }

    fn spawn(config: &FieldConfig, rng: &mut Pcg32) -> Particle {
        let pos = Vec2::new(
            rng.random_range(0.0..config.view.x.max(1.0)),
            rng.random_range(0.0..config.view.y.max(1.0)),
        );
        let symmetric = |rng: &mut Pcg32, max: f32| {
            if max > 0.0 { rng.random_range(-max..max) } else { 0.0 }
        };
        let drift = Vec2::new(
            symmetric(rng, config.drift_max),
            symmetric(rng, config.drift_max) + config.drift_down_bias,
        );
        let impulse = Vec2::new(
            symmetric(rng, config.impulse_max),
            symmetric(rng, config.impulse_max),
        );
        let glyph = if config.glyphs.is_empty() {
            None
        } else {
            Some(config.glyphs[rng.random_range(0..config.glyphs.len())])
        };
        Particle {
            pos,
            origin: pos,
            drift,
            impulse,
            rotation: rng.random_range(0.0..360.0),
            rot_speed: symmetric(rng, config.rot_speed_max),
            size: rng.random_range(config.size_min..config.size_max),
            glyph,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Bank `dt` seconds of wall time and run whole fixed ticks.
    pub fn advance(&mut self, dt: f32, pointer: Option<Vec2>) {
        let mut ticker = std::mem::take(&mut self.ticker);
        for _ in 0..ticker.advance(dt) {
            self.step(pointer);
        }
        self.ticker = ticker;
    }

    /// Snapshot of the current transforms, in stable particle order.
    pub fn transforms(&self) -> Vec<ParticleTransform> {
        self.particles
            .iter()
            .map(|p| ParticleTransform {
                x: p.pos.x,
                y: p.pos.y,
                rotation: p.rotation,
                size: p.size,
                glyph: p.glyph,
            })
            .collect()
    }
}
