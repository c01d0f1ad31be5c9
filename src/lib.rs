//! A CPU triangle rasterizer.
//!
//! A [`Mesh`] is pushed through model, view, projection and viewport
//! transforms, culled, and filled with a flat color into a [`FrameBuffer`].
//! Everything runs on the CPU in `f64`, so output is reproducible.
//!
//! # Quick Start
//!
//! ```
//! use rastrum::prelude::*;
//!
//! let camera = Camera::new(
//!     Vec4::point(0.0, 0.0, 5.0),
//!     Vec4::point(0.0, 0.0, 0.0),
//!     Vec4::direction(0.0, 1.0, 0.0),
//! )
//! .with_projection(Projection::default_perspective());
//!
//! let mut scene = Scene::new(Mesh::cube(), camera);
//! scene.mesh.rotate(Vec4::direction(0.0, 1.0, 0.0), 0.5)?;
//!
//! let frame = Rasterizer::new(320.0, 240.0)?.render(&scene)?;
//! assert_eq!(frame.get_pixel(160, 120), Some(Color::FILL));
//! # Ok::<(), rastrum::Error>(())
//! ```

pub mod aabb;
pub mod camera;
pub mod colors;
pub mod config;
pub mod error;
pub mod math;
pub mod mesh;
pub mod obj;
pub mod projection;
pub mod render;
pub mod transform;

pub use aabb::Aabb;
pub use camera::Camera;
pub use colors::Color;
pub use config::RasterConfig;
pub use error::{ConfigError, Error, LoadError, Result};
pub use mesh::{Mesh, Triangle, Vertex};
pub use projection::Projection;
pub use render::{FrameBuffer, Rasterizer, RenderStats, Scene};
pub use transform::TransformContext;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use rastrum::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use crate::aabb::Aabb;
    pub use crate::mesh::{Mesh, Triangle, Vertex};
    pub use crate::transform::TransformContext;

    // Camera
    pub use crate::camera::Camera;
    pub use crate::projection::Projection;

    // Math
    pub use crate::math::{Mat4, Quat, Vec4};

    // Rendering
    pub use crate::colors::Color;
    pub use crate::config::RasterConfig;
    pub use crate::render::{FrameBuffer, Rasterizer, Scene};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::edgefunction::{edge_function, fill_triangle, is_inside_triangle};
}
