//! Unit quaternions for axis/angle rotation.

use super::mat4::Mat4;
use super::vec4::Vec4;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quat {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quat {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Rotation of `angle` radians, counter-clockwise around `axis`.
    ///
    /// `axis` must be a non-zero direction (w = 0); it is normalized here.
    pub fn from_axis_angle(axis: Vec4, angle: f64) -> Result<Self> {
        let u = axis.unit()?;
        let (sin, cos) = (angle / 2.0).sin_cos();
        Ok(Self::new(cos, sin * u.x, sin * u.y, sin * u.z))
    }

    /// Converts the quaternion to a rotation matrix for column vectors.
    pub fn to_rotation_matrix(&self) -> Mat4 {
        let Self { w, x, y, z } = *self;
        Mat4::new([
            [
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y - w * z),
                2.0 * (x * z + w * y),
                0.0,
            ],
            [
                2.0 * (x * y + w * z),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z - w * x),
                0.0,
            ],
            [
                2.0 * (x * z - w * y),
                2.0 * (y * z + w * x),
                1.0 - 2.0 * (x * x + y * y),
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn quarter_turn_around_z() {
        let q = Quat::from_axis_angle(Vec4::direction(0.0, 0.0, 1.0), FRAC_PI_2).unwrap();
        let rotated = q.to_rotation_matrix() * Vec4::point(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(rotated, Vec4::point(0.0, 1.0, 0.0));
    }

    #[test]
    fn axis_is_normalized() {
        let q = Quat::from_axis_angle(Vec4::direction(0.0, 5.0, 0.0), PI).unwrap();
        let rotated = q.to_rotation_matrix() * Vec4::direction(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(rotated, Vec4::direction(-1.0, 0.0, 0.0));
    }

    #[test]
    fn rotation_matrix_is_orthonormal() {
        let q = Quat::from_axis_angle(Vec4::direction(1.0, 2.0, 3.0), 0.7).unwrap();
        let r = q.to_rotation_matrix();
        assert_abs_diff_eq!(r * r.transpose(), Mat4::identity());
        assert_abs_diff_eq!(r.determinant(), 1.0);
    }

    #[test]
    fn rejects_point_and_zero_axis() {
        assert!(Quat::from_axis_angle(Vec4::point(0.0, 1.0, 0.0), 1.0).is_err());
        assert!(Quat::from_axis_angle(Vec4::ZERO, 1.0).is_err());
    }

    #[test]
    fn short_axis_is_normalized() {
        let short = Quat::from_axis_angle(Vec4::direction(0.0, 0.0, 1e-8), 1.0).unwrap();
        let long = Quat::from_axis_angle(Vec4::direction(0.0, 0.0, 3.0), 1.0).unwrap();
        assert_abs_diff_eq!(short.to_rotation_matrix(), long.to_rotation_matrix());
    }

    #[test]
    fn zero_angle_is_identity() {
        let q = Quat::from_axis_angle(Vec4::direction(0.0, 1.0, 0.0), 0.0).unwrap();
        assert_eq!(q, Quat::IDENTITY);
        assert_abs_diff_eq!(q.to_rotation_matrix(), Mat4::identity());
    }
}
