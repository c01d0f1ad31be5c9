//! Projection parameters.
//!
//! The camera looks down its own −z axis, so `near` and `far` are the
//! camera-space z coordinates of the clipping planes and are negative for
//! anything in front of the camera. The defaults are the exception: near 0.1
//! and far 1000 for perspective, near 1 and far −1 for orthographic. Only x
//! and y of a projected vertex reach the screen, so the depth those planes
//! produce is never read.

use crate::math::Mat4;

/// The two supported projection kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Perspective {
        /// Vertical field of view in degrees.
        fov: f64,
        /// Width divided by height.
        aspect: f64,
        near: f64,
        far: f64,
    },
    Orthographic {
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    },
}

impl Projection {
    pub fn perspective(fov: f64, aspect: f64, near: f64, far: f64) -> Self {
        Self::Perspective {
            fov,
            aspect,
            near,
            far,
        }
    }

    pub fn orthographic(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Self {
        Self::Orthographic {
            left,
            right,
            bottom,
            top,
            near,
            far,
        }
    }

    /// 45° vertical fov, square aspect, near 0.1, far 1000.
    pub fn default_perspective() -> Self {
        Self::perspective(45.0, 1.0, 0.1, 1000.0)
    }

    /// The unit cube: x and y in [−1, 1], near 1, far −1.
    pub fn default_orthographic() -> Self {
        Self::orthographic(-1.0, 1.0, -1.0, 1.0, 1.0, -1.0)
    }

    /// The projection matrix for column vectors.
    ///
    /// The perspective matrix puts camera-space z into w. Because z is negative
    /// in front of the camera, x and y are scaled by negative factors so the
    /// divide by w keeps x right and y up.
    pub fn matrix(&self) -> Mat4 {
        match *self {
            Self::Perspective {
                fov,
                aspect,
                near,
                far,
            } => {
                let t = (fov * std::f64::consts::PI / 360.0).tan();
                Mat4::new([
                    [-1.0 / (aspect * t), 0.0, 0.0, 0.0],
                    [0.0, -1.0 / t, 0.0, 0.0],
                    [
                        0.0,
                        0.0,
                        (near + far) / (near - far),
                        2.0 * near * far / (far - near),
                    ],
                    [0.0, 0.0, 1.0, 0.0],
                ])
            }
            Self::Orthographic {
                left,
                right,
                bottom,
                top,
                near,
                far,
            } => Mat4::new([
                [2.0 / (right - left), 0.0, 0.0, (left + right) / (left - right)],
                [0.0, 2.0 / (top - bottom), 0.0, (bottom + top) / (bottom - top)],
                [0.0, 0.0, 2.0 / (near - far), (far + near) / (far - near)],
                [0.0, 0.0, 0.0, 1.0],
            ]),
        }
    }
}
