//! Axis-aligned bounding boxes
//!
//! The only geometry primitive the simulation needs. Boxes are immutable
//! values: moving the paddle replaces its box wholesale, so the `min <= max`
//! invariant holds by construction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box defined by its minimum (top-left) and maximum
/// (bottom-right) corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build from corners. `min` must not exceed `max` on either axis.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y);
        Self { min, max }
    }

    /// Build from the top-left corner and a non-negative size.
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self::new(min, min + size)
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Half the size on each axis.
    pub fn half_extents(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Closed-interval containment: boundary points count as inside.
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_min_size() {
        let b = Aabb::from_min_size(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        assert_eq!(b.min, Vec2::new(10.0, 20.0));
        assert_eq!(b.max, Vec2::new(40.0, 60.0));
        assert_eq!(b.size(), Vec2::new(30.0, 40.0));
        assert_eq!(b.center(), Vec2::new(25.0, 40.0));
        assert_eq!(b.half_extents(), Vec2::new(15.0, 20.0));
    }

    #[test]
    fn test_contains_point_boundary() {
        let b = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(b.contains_point(Vec2::new(5.0, 5.0)));
        assert!(b.contains_point(Vec2::new(10.0, 10.0)));
        assert!(b.contains_point(Vec2::ZERO));
        assert!(!b.contains_point(Vec2::new(10.1, 5.0)));
        assert!(!b.contains_point(Vec2::new(5.0, -0.1)));
    }
}
