//! Moonfield - an interactive 3D N-body drift sketch
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, pairwise impulses, step clock)
//! - `view`: Free camera with an orthonormal basis and perspective projection
//! - `input`: Key-to-camera-command bindings
//! - `renderer`: WebGPU rendering pipeline

pub mod input;
pub mod renderer;
pub mod sim;
pub mod view;

pub use sim::{Body, Scene, SceneConfig, StepClock};
pub use view::Viewport;

/// Sketch configuration defaults. Everything tunable is injected at
/// construction; nothing reads these ambiently.
pub mod consts {
    /// World units per grid cell. Initial body positions are integer grid
    /// coordinates scaled by this; it doubles as the default body radius and
    /// the default per-tick impulse magnitude.
    pub const GRID_UNIT: f32 = 100.0;
    /// Host-time milliseconds per discrete simulation step.
    pub const STEP_INTERVAL_MS: f64 = 100.0;

    /// Camera translation per key event (one tenth of a grid cell).
    pub const CAMERA_MOVE_STEP: f32 = GRID_UNIT / 10.0;
    /// Camera rotation per key event (0.5% of a full turn).
    pub const CAMERA_ROTATE_STEP: f32 = 0.005 * std::f32::consts::TAU;
    /// Camera start position: pulled back along -Z, looking at the origin.
    pub const CAMERA_START: [f32; 3] = [0.0, 0.0, -2000.0];

    /// Perspective focal length (cot of half a ~60 degree vertical FOV).
    pub const FOCAL_LENGTH: f32 = 1.732;
    /// Camera-space depth at or below which points are culled.
    pub const NEAR_PLANE: f32 = 1.0;

    /// Half-length of each world-axis guide line, in world units.
    pub const GUIDE_HALF_LEN: f32 = 10.0 * GRID_UNIT;
    /// Guide line width in NDC.
    pub const GUIDE_WIDTH: f32 = 0.002;
}
