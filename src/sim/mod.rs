//! Deterministic simulation module
//!
//! All motion logic lives here. This module must be pure and deterministic:
//! - Discrete fixed-interval steps only
//! - Fixed initial conditions, no RNG
//! - Stable iteration order (bodies in creation order)
//! - No rendering or platform dependencies

pub mod body;
pub mod clock;
pub mod forces;
pub mod scene;

pub use body::Body;
pub use clock::StepClock;
pub use forces::{pair_impulse, pairwise_step};
pub use scene::{Scene, SceneConfig};
