//! Scan conversion and the rendering pipeline.
//!
//! - [`framebuffer`]: the owning color buffer
//! - [`edgefunction`]: point-in-triangle tests and triangle filling
//! - [`rasterizer`]: [`Rasterizer`], which turns a [`Scene`] into a [`FrameBuffer`]

pub mod edgefunction;
pub mod framebuffer;
pub mod rasterizer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{Rasterizer, RenderStats, Scene, Uniforms};
