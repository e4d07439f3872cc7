//! WebGPU rendering module
//!
//! A single triangle-list pipeline fed with pre-projected NDC vertices; the
//! viewport owns projection, the renderer only rasterizes.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::{Vertex, colors};
