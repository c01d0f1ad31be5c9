//! Axis-aligned bounding boxes.

use crate::math::Vec4;

/// Axis-aligned bounding box with `min[i] <= max[i]` on every axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec4,
    pub max: Vec4,
}

impl Aabb {
    /// The minimum box enclosing three points.
    pub fn new(v1: Vec4, v2: Vec4, v3: Vec4) -> Self {
        Self {
            min: Vec4::point(
                v1.x.min(v2.x).min(v3.x),
                v1.y.min(v2.y).min(v3.y),
                v1.z.min(v2.z).min(v3.z),
            ),
            max: Vec4::point(
                v1.x.max(v2.x).max(v3.x),
                v1.y.max(v2.y).max(v3.y),
                v1.z.max(v2.z).max(v3.z),
            ),
        }
    }

    /// A box from two opposite corners, in any order.
    pub fn from_corners(a: Vec4, b: Vec4) -> Self {
        Self::new(a, b, a)
    }

    /// True if the boxes overlap on all three axes. Touching faces, edges or
    /// corners count as overlap.
    pub fn intersect(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
            && self.min.z <= other.max.z
            && other.min.z <= self.max.z
    }
}
