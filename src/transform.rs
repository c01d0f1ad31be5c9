//! Accumulated model transform of a mesh.
//!
//! A [`TransformContext`] holds a single matrix that persists across frames.
//! Every transform call builds a new matrix and multiplies it onto the
//! **left** of the current context, so calls apply in the order they are made:
//!
//! ```
//! use rastrum::math::Vec4;
//! use rastrum::TransformContext;
//!
//! let mut context = TransformContext::new();
//! context.scale(2.0, 2.0, 2.0).translate(1.0, 0.0, 0.0);
//!
//! // Scaled first, then translated.
//! let p = context.matrix() * Vec4::point(1.0, 1.0, 1.0);
//! assert_eq!(p, Vec4::point(3.0, 2.0, 2.0));
//! ```

use crate::error::Result;
use crate::math::{Mat4, Quat, Vec4};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformContext {
    matrix: Mat4,
}

impl TransformContext {
    /// Create a context holding the identity matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated model matrix.
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Drop everything accumulated so far.
    pub fn reset(&mut self) -> &mut Self {
        self.matrix = Mat4::identity();
        self
    }

    /// `context := transform * context`.
    pub fn compose(&mut self, transform: Mat4) -> &mut Self {
        self.matrix = transform * self.matrix;
        self
    }

    pub fn scale(&mut self, sx: f64, sy: f64, sz: f64) -> &mut Self {
        self.compose(Mat4::scaling(sx, sy, sz))
    }

    pub fn translate(&mut self, tx: f64, ty: f64, tz: f64) -> &mut Self {
        self.compose(Mat4::translation(tx, ty, tz))
    }

    /// Rotate `angle` radians counter-clockwise around the direction `axis`.
    pub fn rotate(&mut self, axis: Vec4, angle: f64) -> Result<&mut Self> {
        let rotation = Quat::from_axis_angle(axis, angle)?.to_rotation_matrix();
        Ok(self.compose(rotation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_default() {
        assert_eq!(TransformContext::default().matrix(), Mat4::identity());
    }

    #[test]
    fn test_compose_multiplies_on_the_left() {
        let a = Mat4::translation(1.0, 2.0, 3.0);
        let b = Mat4::scaling(2.0, 2.0, 2.0);
        let mut context = TransformContext::new();
        context.compose(a).compose(b);
        assert_eq!(context.matrix(), b * a);
    }

    #[test]
    fn test_fluent_api() {
        let mut context = TransformContext::new();
        context
            .translate(1.0, 0.0, 0.0)
            .rotate(Vec4::direction(0.0, 0.0, 1.0), FRAC_PI_2)
            .unwrap()
            .scale(2.0, 2.0, 2.0);

        // translate -> (1, 0, 0), rotate -> (0, 1, 0), scale -> (0, 2, 0)
        let p = context.matrix() * Vec4::point(0.0, 0.0, 0.0);
        assert_abs_diff_eq!(p, Vec4::point(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_reset() {
        let mut context = TransformContext::new();
        context.scale(3.0, 3.0, 3.0).reset();
        assert_eq!(context.matrix(), Mat4::identity());
    }

    #[test]
    fn test_rotate_rejects_point_axis() {
        let mut context = TransformContext::new();
        assert!(context.rotate(Vec4::point(0.0, 1.0, 0.0), 1.0).is_err());
        assert_eq!(context.matrix(), Mat4::identity());
    }
}
