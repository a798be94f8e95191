//! Collision detection and response
//!
//! The one nontrivial piece of Brick Pong: detecting overlap between the
//! circular ball and axis-aligned boxes, then computing the penetration
//! correction and which velocity axis to reflect.

use glam::Vec2;

use super::aabb::Aabb;

/// Closed-interval overlap test between two boxes. Touching edges collide.
#[inline]
pub fn aabb_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.max.x >= b.min.x && b.max.x >= a.min.x && a.max.y >= b.min.y && b.max.y >= a.min.y
}

/// Result of a circle-vs-box check
#[derive(Debug, Clone, Copy)]
pub struct CircleHit {
    /// Whether the circle overlaps the box
    pub hit: bool,
    /// Closest point on the box to the circle center. Equals the center
    /// itself when the center lies inside the box.
    pub closest: Vec2,
}

/// Check a circle against a box by clamping the center onto the box.
///
/// The closest point is returned alongside the boolean because the resolver
/// needs it. The degenerate center-inside case clamps to the center itself
/// and is handled by [`resolve_circle_aabb`], not here.
pub fn circle_aabb_overlap(center: Vec2, radius: f32, rect: &Aabb) -> CircleHit {
    let closest = center.clamp(rect.min, rect.max);
    CircleHit {
        hit: center.distance_squared(closest) <= radius * radius,
        closest,
    }
}

/// Axis whose velocity component a resolution reflects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Positional correction plus the velocity axis to reflect
#[derive(Debug, Clone, Copy)]
pub struct Resolution {
    /// Translation that pushes the circle out along the shortest exit vector
    pub offset: Vec2,
    /// Which velocity component to negate
    pub flip: Axis,
}

/// Compute the response for an overlapping circle, given the closest point
/// from [`circle_aabb_overlap`].
///
/// A zero-length difference (dead-center hit, center inside the box) cannot
/// be normalized; the fallback leaves the position alone and reflects Y.
/// Otherwise the offset is exact for shallow penetration: side hits reflect
/// X, top/bottom hits reflect Y, ties favor Y.
pub fn resolve_circle_aabb(center: Vec2, radius: f32, closest: Vec2) -> Resolution {
    let difference = center - closest;
    if difference.length_squared() == 0.0 {
        return Resolution {
            offset: Vec2::ZERO,
            flip: Axis::Y,
        };
    }

    let offset = difference.normalize() * (radius - difference.length());
    let flip = if offset.x.abs() > offset.y.abs() {
        Axis::X
    } else {
        Axis::Y
    };
    Resolution { offset, flip }
}
