//! Scene: body ownership and per-frame advancement
//!
//! The scene owns the body set and the step clock. Bodies are created once
//! at construction and never added or destroyed; their order matters only
//! for render order.

use glam::Vec3;

use super::{Body, StepClock, forces};
use crate::consts::{GRID_UNIT, STEP_INTERVAL_MS};

/// Body styles for the standard scene, linear RGBA.
pub mod styles {
    pub const MOON_YELLOW: [f32; 4] = [1.0, 0.9, 0.2, 1.0];
    pub const MOON_BLUE: [f32; 4] = [0.3, 0.5, 1.0, 1.0];
    pub const MOON_GREEN: [f32; 4] = [0.3, 0.9, 0.4, 1.0];
    pub const MOON_GRAY: [f32; 4] = [0.6, 0.6, 0.65, 1.0];
    pub const ORIGIN_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// Tuning injected at scene construction; nothing here is ambient.
#[derive(Debug, Clone, Copy)]
pub struct SceneConfig {
    /// Per-tick, per-axis impulse magnitude.
    pub impulse: f32,
    /// Host-time milliseconds per discrete step.
    pub step_interval: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            impulse: GRID_UNIT,
            step_interval: STEP_INTERVAL_MS,
        }
    }
}

/// The simulated scene: bodies, a static origin marker, and the clock.
#[derive(Debug, Clone)]
pub struct Scene {
    bodies: Vec<Body>,
    /// Drawn with the bodies but never simulated.
    marker: Body,
    clock: StepClock,
    config: SceneConfig,
}

impl Scene {
    /// Create a scene over a fixed body set.
    pub fn new(config: SceneConfig, bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            marker: Body::new(Vec3::ZERO, GRID_UNIT, styles::ORIGIN_WHITE),
            clock: StepClock::new(config.step_interval),
            config,
        }
    }

    /// The source sketch's scene: four moons on integer grid coordinates,
    /// scaled into world units.
    pub fn standard() -> Self {
        let grid = |x: f32, y: f32, z: f32| Vec3::new(x, y, z) * GRID_UNIT;
        let bodies = vec![
            Body::new(grid(-4.0, 3.0, 15.0), GRID_UNIT, styles::MOON_YELLOW),
            Body::new(grid(-11.0, -10.0, 13.0), GRID_UNIT, styles::MOON_BLUE),
            Body::new(grid(2.0, 2.0, 18.0), GRID_UNIT, styles::MOON_GREEN),
            Body::new(grid(7.0, -1.0, 0.0), GRID_UNIT, styles::MOON_GRAY),
        ];
        Self::new(SceneConfig::default(), bodies)
    }

    /// Advance to `mark`: commit at most one discrete step if the clock
    /// signals a boundary, then return the frame's interpolation fraction.
    ///
    /// Step order is fixed: begin-all, force-all, integrate-all. Interleaving
    /// would let later pairs see already-integrated positions and break the
    /// equal-and-opposite impulse symmetry.
    pub fn advance(&mut self, mark: f64) -> f32 {
        if self.clock.crossed(mark) {
            for body in &mut self.bodies {
                body.begin_step();
            }
            forces::pairwise_step(&mut self.bodies, self.config.impulse);
            for body in &mut self.bodies {
                body.integrate();
            }
        }
        self.clock.fraction(mark)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// The static origin marker.
    pub fn marker(&self) -> &Body {
        &self.marker
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}
