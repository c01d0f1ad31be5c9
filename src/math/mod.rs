//! Linear algebra kernel: homogeneous vectors, 4x4 matrices and quaternions.

pub mod mat4;
pub mod quat;
pub mod vec4;

pub use mat4::Mat4;
pub use quat::Quat;
pub use vec4::Vec4;

/// Absolute tolerance for approximate comparisons across the kernel.
pub const EPSILON: f64 = 1e-7;

/// `|a - b| <= EPSILON`.
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

#[inline]
pub(crate) fn approx_zero(value: f64) -> bool {
    approx_equal(value, 0.0)
}
