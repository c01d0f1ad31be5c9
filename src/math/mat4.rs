//! 4x4 transformation matrix.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec4`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//!
//! # Example
//! ```
//! use rastrum::math::{Mat4, Vec4};
//!
//! let transform = Mat4::translation(1.0, 0.0, 0.0) * Mat4::scaling(2.0, 2.0, 2.0);
//! let moved = transform * Vec4::point(1.0, 1.0, 1.0);
//! assert_eq!(moved, Vec4::point(3.0, 2.0, 2.0));
//! ```

use std::ops::{Add, Mul, Sub};

use approx::AbsDiffEq;

use super::vec4::Vec4;
use super::EPSILON;
use crate::error::{Error, Result};

/// 4x4 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f64; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub const fn new(data: [[f64; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub const fn zero() -> Self {
        Mat4::new([[0.0; 4]; 4])
    }

    pub const fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    pub const fn translation(x: f64, y: f64, z: f64) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a scale matrix.
    pub const fn scaling(x: f64, y: f64, z: f64) -> Self {
        Mat4::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Builds a matrix whose rows are the xyz parts of `r0`, `r1`, `r2`,
    /// completed with a `(0, 0, 0, 1)` bottom row.
    pub fn from_basis_rows(r0: Vec4, r1: Vec4, r2: Vec4) -> Self {
        Mat4::new([
            [r0.x, r0.y, r0.z, 0.0],
            [r1.x, r1.y, r1.z, 0.0],
            [r2.x, r2.y, r2.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Access element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.data
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(Error::IndexOutOfRange { row, col })
    }

    /// Set element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let slot = self
            .data
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(Error::IndexOutOfRange { row, col })?;
        *slot = value;
        Ok(())
    }

    pub fn rows(&self) -> [[f64; 4]; 4] {
        self.data
    }

    /// Multiplies every entry by `s`.
    pub fn scale(&self, s: f64) -> Self {
        let mut result = self.data;
        for value in result.iter_mut().flatten() {
            *value *= s;
        }
        Mat4::new(result)
    }

    pub fn transpose(&self) -> Self {
        let mut result = [[0.0; 4]; 4];
        for (row, values) in self.data.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                result[col][row] = *value;
            }
        }
        Mat4::new(result)
    }

    /// Determinant of the 3x3 matrix left after removing `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> f64 {
        let mut m = [[0.0; 3]; 3];
        for (r, i) in (0..4).filter(|&i| i != row).enumerate() {
            for (c, j) in (0..4).filter(|&j| j != col).enumerate() {
                m[r][c] = self.data[i][j];
            }
        }

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    fn cofactor(&self, row: usize, col: usize) -> f64 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor(row, col)
    }

    /// Full cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        (0..4)
            .map(|col| self.data[0][col] * self.cofactor(0, col))
            .sum()
    }

    /// Computes the inverse as `adjugate / determinant`.
    ///
    /// Fails with [`Error::SingularMatrix`] when `|det| <= EPSILON`.
    pub fn inverse(&self) -> Result<Mat4> {
        let determinant = self.determinant();
        if determinant.abs() <= EPSILON {
            return Err(Error::SingularMatrix { determinant });
        }

        let inv_det = 1.0 / determinant;
        let mut result = [[0.0; 4]; 4];
        for (row, values) in result.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                // The adjugate is the transpose of the cofactor matrix.
                *value = self.cofactor(col, row) * inv_det;
            }
        }
        Ok(Mat4::new(result))
    }

    /// Approximate equality with the kernel's default tolerance.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, EPSILON)
    }
}

impl Add<Mat4> for Mat4 {
    type Output = Mat4;

    fn add(self, rhs: Mat4) -> Self::Output {
        let mut result = self.data;
        for (row, values) in result.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value += rhs.data[row][col];
            }
        }
        Mat4::new(result)
    }
}

impl Sub<Mat4> for Mat4 {
    type Output = Mat4;

    fn sub(self, rhs: Mat4) -> Self::Output {
        let mut result = self.data;
        for (row, values) in result.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value -= rhs.data[row][col];
            }
        }
        Mat4::new(result)
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f64; 4]; 4];

        for (row, values) in result.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a Vec4 by a matrix: Mat4 * Vec4 (column vector).
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        let row = |r: usize| {
            let m = self.data[r];
            m[0] * v.x + m[1] * v.y + m[2] * v.z + m[3] * v.w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn sequential() -> Mat4 {
        Mat4::new([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ])
    }

    fn invertible() -> Mat4 {
        Mat4::new([
            [1.0, 9.0, 3.0, 2.0],
            [8.0, 3.0, 2.0, 2.0],
            [4.0, 8.0, 2.0, 9.0],
            [7.0, 9.0, 7.0, 5.0],
        ])
    }

    #[test]
    fn get_and_set_check_bounds() {
        let mut m = sequential();
        assert_eq!(m.get(1, 2), Ok(7.0));
        assert_eq!(m.get(4, 0), Err(Error::IndexOutOfRange { row: 4, col: 0 }));
        m.set(3, 3, -1.0).unwrap();
        assert_eq!(m.get(3, 3), Ok(-1.0));
        assert!(m.set(0, 4, 1.0).is_err());
    }

    #[test]
    fn add_and_sub_are_elementwise() {
        let m = sequential();
        assert_eq!(m + m, m.scale(2.0));
        assert_eq!(m - m, Mat4::zero());

        let asymmetric = Mat4::translation(1.0, 2.0, 3.0);
        let diff = asymmetric - Mat4::identity();
        assert_eq!(diff.get(0, 3), Ok(1.0));
        assert_eq!(diff.get(3, 0), Ok(0.0));

        let i = Mat4::identity();
        assert_eq!(i - i.scale(2.0), i.scale(-1.0));
    }

    #[test]
    fn mul_is_a_true_matrix_product() {
        let m = sequential();
        let want = Mat4::new([
            [90.0, 100.0, 110.0, 120.0],
            [202.0, 228.0, 254.0, 280.0],
            [314.0, 356.0, 398.0, 440.0],
            [426.0, 484.0, 542.0, 600.0],
        ]);
        assert_eq!(m * m, want);
    }

    #[test]
    fn mul_by_identity() {
        let m = invertible();
        assert_eq!(m * Mat4::identity(), m);
        assert_eq!(Mat4::identity() * m, m);
    }

    #[test]
    fn mul_is_associative_not_commutative() {
        let a = sequential();
        let b = invertible();
        let c = Mat4::translation(1.0, -2.0, 0.5) * Mat4::scaling(2.0, 3.0, 4.0);
        assert_abs_diff_eq!((a * b) * c, a * (b * c));
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn mul_vector() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(sequential() * v, Vec4::new(30.0, 70.0, 110.0, 150.0));

        let rows = Mat4::new([[1.0, 2.0, 3.0, 4.0]; 4]);
        assert_eq!(v.apply(&rows), Vec4::new(30.0, 30.0, 30.0, 30.0));
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let want = Mat4::new([
            [1.0, 5.0, 9.0, 13.0],
            [2.0, 6.0, 10.0, 14.0],
            [3.0, 7.0, 11.0, 15.0],
            [4.0, 8.0, 12.0, 16.0],
        ]);
        assert_eq!(sequential().transpose(), want);
    }

    #[test]
    fn determinant() {
        assert_relative_eq!(sequential().determinant(), 0.0);
        assert_relative_eq!(invertible().determinant(), 1628.0);
        assert_relative_eq!(Mat4::scaling(2.0, 3.0, 4.0).determinant(), 24.0);
    }

    #[test]
    fn inverse_matches_known_result() {
        let got = invertible().inverse().unwrap();
        let want = Mat4::new([
            [-1.0 / 1628.0, 139.0 / 814.0, -21.0 / 1628.0, -73.0 / 1628.0],
            [155.0 / 814.0, 26.0 / 407.0, -1.0 / 814.0, -81.0 / 814.0],
            [-239.0 / 1628.0, -153.0 / 814.0, -135.0 / 1628.0, 461.0 / 1628.0],
            [-3.0 / 22.0, -1.0 / 11.0, 3.0 / 22.0, 1.0 / 22.0],
        ]);
        assert_abs_diff_eq!(got, want);
        assert_abs_diff_eq!(invertible() * got, Mat4::identity());
    }

    #[test]
    fn inverse_of_singular_matrix_fails() {
        assert!(matches!(
            sequential().inverse(),
            Err(Error::SingularMatrix { .. })
        ));
    }

    #[test]
    fn approx_eq_detects_difference() {
        let m = invertible();
        let mut nudged = m;
        nudged.set(2, 1, 8.0 + 1e-9).unwrap();
        assert!(m.approx_eq(&nudged));
        assert!(!m.approx_eq(&sequential()));
    }
}
