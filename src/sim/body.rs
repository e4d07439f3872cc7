//! A simulated point mass with interpolation endpoints
//!
//! Physics advances in coarse discrete steps, so each body tracks the
//! segment between its position at the last committed step (`step_start`)
//! and its provisional position at the next one (`step_end`). Rendering
//! lerps along that segment, which keeps motion smooth between steps.

use glam::Vec3;

/// A simulated point mass.
#[derive(Debug, Clone)]
pub struct Body {
    /// Velocity accumulator for the in-progress step; zeroed by
    /// [`begin_step`](Self::begin_step).
    pub velocity: Vec3,
    /// Position at the start of the most recently committed step.
    pub step_start: Vec3,
    /// Provisional position at the end of that step.
    pub step_end: Vec3,
    /// Render radius (world units).
    pub radius: f32,
    /// Render color, linear RGBA. Opaque to the simulation.
    pub style: [f32; 4],
}

impl Body {
    /// Create a body at rest at `pos`.
    pub fn new(pos: Vec3, radius: f32, style: [f32; 4]) -> Self {
        Self {
            velocity: Vec3::ZERO,
            step_start: pos,
            step_end: pos,
            radius,
            style,
        }
    }

    /// Roll the previous step's end over to this step's start and clear the
    /// velocity accumulator.
    ///
    /// Must run for every body before any impulses are applied and before
    /// any body integrates, each tick. Leaves `step_end` untouched.
    pub fn begin_step(&mut self) {
        self.step_start = self.step_end;
        self.velocity = Vec3::ZERO;
    }

    /// One Euler step at unit time: fold the accumulated velocity into the
    /// provisional end position.
    pub fn integrate(&mut self) {
        self.step_end += self.velocity;
    }

    /// Position at fraction `f` along the current step segment.
    ///
    /// `f` is not clamped: values past 1 extrapolate beyond the committed
    /// segment, which is exactly what a stalled frame is supposed to show.
    pub fn interpolated(&self, f: f32) -> Vec3 {
        self.step_start.lerp(self.step_end, f)
    }
}
