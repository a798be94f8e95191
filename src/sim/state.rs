//! Game state and entity types
//!
//! The `World` owns every entity. The update phase takes it by exclusive
//! reference, the render phase only reads it; nothing else holds references.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;

/// The ball. Never destroyed; a bottom-edge exit puts it back at the serve
/// position instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: [f32; 4],
}

impl Ball {
    pub fn new(start_vel: Vec2) -> Self {
        Self {
            pos: BALL_START_POS,
            vel: start_vel,
            radius: BALL_RADIUS,
            color: BALL_COLOR,
        }
    }

    /// Put the ball back at the serve position with the serve velocity.
    pub fn reset(&mut self, start_vel: Vec2) {
        self.pos = BALL_START_POS;
        self.vel = start_vel;
    }
}

/// A destructible brick. Destroyed bricks stay in the container for the rest
/// of the run but are skipped for collision and drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub bounds: Aabb,
    pub color: [f32; 4],
    pub destroyed: bool,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub bounds: Aabb,
    pub color: [f32; 4],
}

impl Default for Paddle {
    fn default() -> Self {
        let min = Vec2::new((SCREEN_WIDTH - PADDLE_WIDTH) / 2.0, PADDLE_Y);
        Self {
            bounds: Aabb::from_min_size(min, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT)),
            color: PADDLE_COLOR,
        }
    }
}

impl Paddle {
    /// Rebuild the box at a new min-x; y and size never change.
    pub fn moved_to(&self, min_x: f32) -> Aabb {
        Aabb::from_min_size(Vec2::new(min_x, self.bounds.min.y), self.bounds.size())
    }

    pub fn width(&self) -> f32 {
        self.bounds.size().x
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Gameplay balance parameters
    pub tuning: Tuning,
    /// Frame counter
    pub time_ticks: u64,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Row-major grid; insertion order is draw order
    pub bricks: Vec<Brick>,
}

impl World {
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    pub fn with_tuning(tuning: Tuning) -> Self {
        let ball = Ball::new(tuning.ball_start_vel);
        Self {
            tuning,
            time_ticks: 0,
            ball,
            paddle: Paddle::default(),
            bricks: build_grid(),
        }
    }

    /// True once every brick has been destroyed
    pub fn cleared(&self) -> bool {
        self.bricks.iter().all(|b| b.destroyed)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Lay out the brick grid from the `consts` parameters
pub fn build_grid() -> Vec<Brick> {
    let size = Vec2::new(BRICK_WIDTH, BRICK_HEIGHT);
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
    for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            let min = Vec2::new(
                BRICK_PADDING / 2.0 + col as f32 * (BRICK_WIDTH + BRICK_PADDING),
                BRICK_TOP_OFFSET + row as f32 * (BRICK_HEIGHT + BRICK_PADDING),
            );
            bricks.push(Brick {
                bounds: Aabb::from_min_size(min, size),
                color: BRICK_ROW_COLORS[row % BRICK_ROW_COLORS.len()],
                destroyed: false,
            });
        }
    }
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_layout() {
        let bricks = build_grid();
        assert_eq!(bricks.len(), BRICK_ROWS * BRICK_COLS);

        // First brick sits half a padding in from the left edge
        assert_eq!(
            bricks[0].bounds.min,
            Vec2::new(BRICK_PADDING / 2.0, BRICK_TOP_OFFSET)
        );

        // Whole grid stays on screen and above the paddle
        for brick in &bricks {
            assert!(brick.bounds.min.x >= 0.0 && brick.bounds.max.x <= SCREEN_WIDTH);
            assert!(brick.bounds.max.y < PADDLE_Y);
            assert!(!brick.destroyed);
        }

        // Rows get distinct colors
        assert_ne!(bricks[0].color, bricks[BRICK_COLS].color);
    }

    #[test]
    fn test_world_setup_and_cleared() {
        let mut world = World::new();
        assert_eq!(world.ball.pos, BALL_START_POS);
        assert_eq!(world.ball.vel, BALL_START_VEL);
        assert_eq!(world.paddle.bounds.min, Vec2::new(320.0, 560.0));
        assert!(!world.cleared());

        for brick in &mut world.bricks {
            brick.destroyed = true;
        }
        assert!(world.cleared());
    }

    #[test]
    fn test_paddle_moved_to_keeps_size() {
        let paddle = Paddle::default();
        let moved = paddle.moved_to(0.0);
        assert_eq!(moved.min, Vec2::new(0.0, PADDLE_Y));
        assert_eq!(moved.size(), paddle.bounds.size());
    }
}
