use std::f32::consts::SQRT_2;

use crate::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f32 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as f32
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> f32 {
    (a.x - b.x).abs().max((a.y - b.y).abs()) as f32
}

/// Octile distance: the exact cost on an open 8-connected grid where a
/// diagonal step costs `sqrt(2)`.
#[inline]
pub fn octile(a: Point, b: Point) -> f32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    (hi - lo) as f32 + lo as f32 * SQRT_2
}
