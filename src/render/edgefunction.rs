//! Edge function scan conversion.
//!
//! For an edge from point A to point B, the edge function at point P is:
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! i.e. the 2D cross product of (P - A) and (B - A). Its sign says which side
//! of the edge P is on, and it is zero on the (infinite) line through A and B.
//! A point is inside a triangle when all three edge functions share the sign
//! of the triangle's own signed area, so both windings are handled. Points on
//! an edge count as inside.
//!
//! Only x and y are used; z and w of the inputs are ignored.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)

use crate::colors::Color;
use crate::math::{Vec4, EPSILON};
use crate::render::framebuffer::FrameBuffer;

/// Signed doubled area of the triangle (a, b, p).
#[inline]
pub fn edge_function(a: Vec4, b: Vec4, p: Vec4) -> f64 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}

/// Whether `p` lies inside or on the boundary of triangle (a, b, c).
///
/// A triangle with (near) zero area covers nothing.
pub fn is_inside_triangle(a: Vec4, b: Vec4, c: Vec4, p: Vec4) -> bool {
    let area = edge_function(a, b, c);
    if area.abs() <= EPSILON {
        return false;
    }

    let w0 = edge_function(b, c, p);
    let w1 = edge_function(c, a, p);
    let w2 = edge_function(a, b, p);

    if area > 0.0 {
        w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
    } else {
        w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
    }
}

/// Fill every pixel whose integer coordinate lies inside (a, b, c).
///
/// The candidate box is the triangle's rounded bounding box grown by one
/// pixel on each side, clamped to the buffer. Returns the number of pixels
/// written.
pub fn fill_triangle(a: Vec4, b: Vec4, c: Vec4, buffer: &mut FrameBuffer, color: Color) -> usize {
    if buffer.width() == 0 || buffer.height() == 0 {
        return 0;
    }

    // Float to int casts saturate, so huge coordinates are safe to clamp.
    let min_x = (a.x.min(b.x).min(c.x).round() as i32).saturating_sub(1).max(0);
    let max_x = (a.x.max(b.x).max(c.x).round() as i32)
        .saturating_add(1)
        .min(buffer.width() as i32 - 1);
    let min_y = (a.y.min(b.y).min(c.y).round() as i32).saturating_sub(1).max(0);
    let max_y = (a.y.max(b.y).max(c.y).round() as i32)
        .saturating_add(1)
        .min(buffer.height() as i32 - 1);

    let mut written = 0;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Vec4::point(x as f64, y as f64, 0.0);
            if is_inside_triangle(a, b, c, p) {
                buffer.set_pixel(x, y, color);
                written += 1;
            }
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Vec4 {
        Vec4::point(x, y, 0.0)
    }

    #[test]
    fn edge_function_sign() {
        let a = p(0.0, 0.0);
        let b = p(10.0, 0.0);
        assert!(edge_function(a, b, p(5.0, -1.0)) > 0.0);
        assert!(edge_function(a, b, p(5.0, 1.0)) < 0.0);
        assert_eq!(edge_function(a, b, p(3.0, 0.0)), 0.0);
    }

    #[test]
    fn point_on_edge_is_inside() {
        let (a, b, c) = (p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0));
        assert!(is_inside_triangle(a, b, c, p(5.0, 0.0)));
        assert!(is_inside_triangle(a, b, c, p(5.0, 5.0)));
        assert!(is_inside_triangle(a, b, c, p(0.0, 0.0)));
    }

    #[test]
    fn either_winding_is_accepted() {
        let (a, b, c) = (p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0));
        assert!(is_inside_triangle(a, b, c, p(2.0, 3.0)));
        assert!(is_inside_triangle(a, c, b, p(2.0, 3.0)));
    }

    #[test]
    fn point_outside_is_outside() {
        let (a, b, c) = (p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0));
        assert!(!is_inside_triangle(a, b, c, p(6.0, 6.0)));
        assert!(!is_inside_triangle(a, b, c, p(20.0, 20.0)));
        assert!(!is_inside_triangle(a, b, c, p(-1.0, 2.0)));
    }

    #[test]
    fn zero_area_covers_nothing() {
        let (a, b, c) = (p(0.0, 0.0), p(5.0, 5.0), p(10.0, 10.0));
        assert!(!is_inside_triangle(a, b, c, p(5.0, 5.0)));

        let mut fb = FrameBuffer::new(16, 16);
        assert_eq!(fill_triangle(a, b, c, &mut fb, Color::WHITE), 0);
        assert_eq!(fb, FrameBuffer::new(16, 16));
    }

    #[test]
    fn fill_covers_interior_only() {
        let mut fb = FrameBuffer::new(20, 20);
        let written = fill_triangle(p(2.0, 2.0), p(12.0, 2.0), p(2.0, 12.0), &mut fb, Color::WHITE);

        // Integer points with x, y >= 2 and x + y <= 14.
        assert_eq!(written, 66);
        assert_eq!(fb.get_pixel(2, 2), Some(Color::WHITE));
        assert_eq!(fb.get_pixel(7, 7), Some(Color::WHITE));
        assert_eq!(fb.get_pixel(8, 7), Some(Color::BLACK));
        assert_eq!(fb.get_pixel(1, 5), Some(Color::BLACK));
    }

    #[test]
    fn fill_is_clamped_to_buffer() {
        let mut fb = FrameBuffer::new(8, 8);
        let written = fill_triangle(
            p(-100.0, -100.0),
            p(100.0, -100.0),
            p(0.0, 100.0),
            &mut fb,
            Color::WHITE,
        );
        assert_eq!(written, 64);
        assert!(fb.pixels().iter().all(|&c| c == Color::WHITE));
    }
}
