//! Look-at camera.
//!
//! # Coordinate System
//!
//! Camera space is **right-handed**:
//! - X: positive right
//! - Y: positive up
//! - Z: positive toward the viewer, so the camera looks down −z
//!
//! The `up` hint only has to be non-parallel to the viewing direction; the
//! true up vector is rebuilt orthogonal to it.

use crate::error::{Error, Result};
use crate::math::{Mat4, Vec4};
use crate::projection::Projection;

/// A camera placed at `position`, looking at `look_at`.
///
/// A camera without a [`Projection`] still has a view matrix, but asking it
/// for a projection matrix fails with [`Error::MissingProjection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec4,
    pub look_at: Vec4,
    pub up: Vec4,
    pub projection: Option<Projection>,
}

impl Camera {
    /// A camera with no projection.
    pub fn new(position: Vec4, look_at: Vec4, up: Vec4) -> Self {
        Self {
            position,
            look_at,
            up,
            projection: None,
        }
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = Some(projection);
        self
    }

    /// Perspective camera; `fov` is the vertical field of view in degrees.
    pub fn perspective(
        position: Vec4,
        look_at: Vec4,
        up: Vec4,
        fov: f64,
        aspect: f64,
        near: f64,
        far: f64,
    ) -> Self {
        Self::new(position, look_at, up)
            .with_projection(Projection::perspective(fov, aspect, near, far))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn orthographic(
        position: Vec4,
        look_at: Vec4,
        up: Vec4,
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) -> Self {
        Self::new(position, look_at, up).with_projection(Projection::orthographic(
            left, right, bottom, top, near, far,
        ))
    }

    /// The camera's unit basis `(right, up, forward)`.
    ///
    /// Fails if `position` or `look_at` is not a point, `up` is not a
    /// direction, or the basis is degenerate (`look_at == position`, or `up`
    /// parallel to the viewing direction).
    pub fn basis(&self) -> Result<(Vec4, Vec4, Vec4)> {
        let forward = self.position.displacement(self.look_at)?.unit()?;
        let right = forward.cross(self.up)?.unit()?;
        let up = right.cross(forward)?.unit()?;
        Ok((right, up, forward))
    }

    /// World to camera space: rotation rows `(right, up, -forward)` applied
    /// after translating the eye to the origin.
    pub fn view_matrix(&self) -> Result<Mat4> {
        let (right, up, forward) = self.basis()?;
        let rotation = Mat4::from_basis_rows(right, up, -forward);
        let p = self.position;
        Ok(rotation * Mat4::translation(-p.x, -p.y, -p.z))
    }

    pub fn proj_matrix(&self) -> Result<Mat4> {
        self.projection
            .map(|projection| projection.matrix())
            .ok_or(Error::MissingProjection)
    }
}
