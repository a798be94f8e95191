//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - No rendering or platform dependencies
//! - Single logical thread: the update phase mutates the world, the render
//!   phase only reads it, never overlapping

pub mod aabb;
pub mod collision;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use collision::{
    Axis, CircleHit, Resolution, aabb_overlap, circle_aabb_overlap, resolve_circle_aabb,
};
pub use state::{Ball, Brick, Paddle, World};
pub use tick::{TickInput, tick};
