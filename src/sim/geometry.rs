//! Point/vector helpers and the hexagonal cell footprint
//!
//! Screen space: x grows right, y grows down. Footprint vertices are wound
//! clockwise on screen, so a point is inside when every edge cross product
//! is non-positive.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{CELL_HEIGHT, HEX_HIP, HEX_SHOULDER};

/// A position in render space
pub type Point = Vec2;

/// Vector from `from` to `to`
#[inline]
pub fn vector(from: Point, to: Point) -> Vec2 {
    to - from
}

/// 2D cross product (z component of the 3D cross product)
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.perp_dot(b)
}

/// Elongated hexagon covering a cell sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// left-top, top, right-top, right-bottom, bottom, left-bottom
    pub vertices: [Point; 6],
}

impl Footprint {
    /// Footprint for a cell anchored at `anchor` (sprite top-left) with the given size.
    ///
    /// Shoulder/hip offsets are the 18/55 px of the 74 px sprite, scaled to `size.y`.
    pub fn new(anchor: Point, size: Vec2) -> Self {
        let scale = size.y / CELL_HEIGHT;
        let shoulder = HEX_SHOULDER * scale;
        let hip = HEX_HIP * scale;
        let half_w = size.x / 2.0;

        Self {
            vertices: [
                anchor + Vec2::new(0.0, shoulder),
                anchor + Vec2::new(half_w, 0.0),
                anchor + Vec2::new(size.x, shoulder),
                anchor + Vec2::new(size.x, hip),
                anchor + Vec2::new(half_w, size.y),
                anchor + Vec2::new(0.0, hip),
            ],
        }
    }

    /// Edge-side test against all six edges (boundary counts as inside)
    pub fn contains(&self, point: Point) -> bool {
        (0..6).all(|i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % 6];
            cross(vector(a, b), vector(point, b)) <= 0.0
        })
    }

    /// Point where the three visible cube faces meet
    pub fn center(&self) -> Point {
        let [left_top, top, ..] = self.vertices;
        Vec2::new(top.x, top.y + 2.0 * (left_top.y - top.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CELL_WIDTH;

    fn unit() -> Footprint {
        Footprint::new(Vec2::ZERO, Vec2::new(CELL_WIDTH, CELL_HEIGHT))
    }

    #[test]
    fn test_cross_sign() {
        assert_eq!(cross(Vec2::X, Vec2::Y), 1.0);
        assert_eq!(cross(Vec2::Y, Vec2::X), -1.0);
        assert_eq!(cross(Vec2::new(2.0, 2.0), Vec2::new(1.0, 1.0)), 0.0);
    }

    #[test]
    fn test_vector_points_from_first_to_second() {
        let v = vector(Vec2::new(1.0, 2.0), Vec2::new(4.0, 0.0));
        assert_eq!(v, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn test_footprint_vertices() {
        let f = Footprint::new(Vec2::new(10.0, 20.0), Vec2::new(CELL_WIDTH, CELL_HEIGHT));
        assert_eq!(f.vertices[0], Vec2::new(10.0, 38.0));
        assert_eq!(f.vertices[1], Vec2::new(42.0, 20.0));
        assert_eq!(f.vertices[2], Vec2::new(74.0, 38.0));
        assert_eq!(f.vertices[3], Vec2::new(74.0, 75.0));
        assert_eq!(f.vertices[4], Vec2::new(42.0, 94.0));
        assert_eq!(f.vertices[5], Vec2::new(10.0, 75.0));
    }

    #[test]
    fn test_footprint_contains_center() {
        assert!(unit().contains(Vec2::new(32.0, 37.0)));
    }

    #[test]
    fn test_footprint_excludes_cut_corners() {
        let f = unit();
        // Bounding-box corners are outside the hexagon
        assert!(!f.contains(Vec2::new(1.0, 1.0)));
        assert!(!f.contains(Vec2::new(63.0, 1.0)));
        assert!(!f.contains(Vec2::new(1.0, 73.0)));
        assert!(!f.contains(Vec2::new(63.0, 73.0)));
    }

    #[test]
    fn test_footprint_boundary_is_inside() {
        let f = unit();
        assert!(f.contains(Vec2::new(0.0, 30.0)));
        assert!(f.contains(Vec2::new(32.0, 0.0)));
    }

    #[test]
    fn test_footprint_excludes_far_points() {
        let f = unit();
        assert!(!f.contains(Vec2::new(-5.0, 37.0)));
        assert!(!f.contains(Vec2::new(70.0, 37.0)));
        assert!(!f.contains(Vec2::new(32.0, 80.0)));
    }

    #[test]
    fn test_footprint_scales_with_size() {
        let f = Footprint::new(Vec2::ZERO, Vec2::new(CELL_WIDTH * 2.0, CELL_HEIGHT * 2.0));
        assert_eq!(f.vertices[0], Vec2::new(0.0, 36.0));
        assert_eq!(f.vertices[3], Vec2::new(128.0, 110.0));
    }

    #[test]
    fn test_footprint_center() {
        let f = unit();
        assert_eq!(f.center(), Vec2::new(32.0, 36.0));
    }
}
