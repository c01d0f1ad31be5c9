//! 4D vector for homogeneous coordinates.
//!
//! `w = 1` marks a point, `w = 0` marks a direction. Operations that only make
//! sense for directions (dot, cross, length, normalization) refuse points
//! instead of quietly producing wrong geometry.

use std::ops::{Mul, Neg};

use approx::AbsDiffEq;

use super::{approx_zero, EPSILON};
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Create a point (w=1) from x, y, z coordinates.
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Create a direction vector (w=0) from x, y, z coordinates.
    pub const fn direction(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    pub fn is_direction(&self) -> bool {
        approx_zero(self.w)
    }

    pub fn is_point(&self) -> bool {
        approx_zero(self.w - 1.0)
    }

    /// Returns the components as `[x, y, z, w]`.
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }

    fn expect_direction(&self) -> Result<()> {
        if self.is_direction() {
            Ok(())
        } else {
            Err(Error::ExpectedDirection { w: self.w })
        }
    }

    fn expect_point(&self) -> Result<()> {
        if self.is_point() {
            Ok(())
        } else {
            Err(Error::ExpectedPoint { w: self.w })
        }
    }

    /// Component-wise addition. The right operand must be a direction, so a
    /// point stays a point and a direction stays a direction.
    pub fn add(&self, rhs: Self) -> Result<Self> {
        if !rhs.is_direction() {
            return Err(Error::UnsupportedOperation("add expects a direction operand"));
        }
        Ok(Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        ))
    }

    /// Component-wise subtraction, with the same operand rule as [`Vec4::add`].
    pub fn sub(&self, rhs: Self) -> Result<Self> {
        if !rhs.is_direction() {
            return Err(Error::UnsupportedOperation("sub expects a direction operand"));
        }
        Ok(Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        ))
    }

    /// The direction pointing from this point to `to`. Both must be points.
    pub fn displacement(&self, to: Self) -> Result<Self> {
        self.expect_point()?;
        to.expect_point()?;
        Ok(Self::direction(to.x - self.x, to.y - self.y, to.z - self.z))
    }

    /// Dot product over all four components. Both operands must be directions.
    pub fn dot(&self, other: Self) -> Result<f64> {
        self.expect_direction()?;
        other.expect_direction()?;
        Ok(self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w)
    }

    /// Returns the cross product of two directions.
    /// The resulting vector is perpendicular to both inputs; its w is the left
    /// operand's w.
    pub fn cross(&self, other: Self) -> Result<Self> {
        self.expect_direction()?;
        other.expect_direction()?;
        Ok(Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
            self.w,
        ))
    }

    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }

    pub fn len(&self) -> Result<f64> {
        Ok(self.dot(*self)?.sqrt())
    }

    /// Unit direction along `self`. The result keeps `w = 0`.
    pub fn unit(&self) -> Result<Self> {
        let len = self.len()?;
        let inv = 1.0 / len;
        if len == 0.0 || !inv.is_finite() {
            return Err(Error::ZeroLength);
        }
        Ok(Self::direction(self.x * inv, self.y * inv, self.z * inv))
    }

    /// Transform by a matrix using the column-vector convention: `m * self`.
    pub fn apply(&self, m: &super::mat4::Mat4) -> Self {
        *m * *self
    }

    /// Approximate equality with the kernel's default tolerance.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, EPSILON)
    }
}

impl Mul<f64> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for Vec4 {
    type Output = Vec4;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl AbsDiffEq for Vec4 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}
