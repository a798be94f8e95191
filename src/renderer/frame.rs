//! Per-frame rectangle instances for the render backend

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::sim::World;

/// One rectangle draw request: top-left position, size and color.
/// `repr(C)` and plain arrays keep the layout GPU-buffer ready.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    pub pos: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
}

impl RectInstance {
    pub fn new(pos: Vec2, size: Vec2, color: [f32; 4]) -> Self {
        Self {
            pos: pos.to_array(),
            size: size.to_array(),
            color,
        }
    }
}

/// Build the frame's draw list: live bricks in container order, then the
/// paddle, then the ball as its bounding quad. Borrows the world read-only.
pub fn build_frame(world: &World) -> Vec<RectInstance> {
    let mut instances = Vec::with_capacity(world.bricks.len() + 2);

    for brick in world.bricks.iter().filter(|b| !b.destroyed) {
        instances.push(RectInstance::new(
            brick.bounds.min,
            brick.bounds.size(),
            brick.color,
        ));
    }

    let paddle = &world.paddle;
    instances.push(RectInstance::new(
        paddle.bounds.min,
        paddle.bounds.size(),
        paddle.color,
    ));

    let ball = &world.ball;
    instances.push(RectInstance::new(
        ball.pos - Vec2::splat(ball.radius),
        Vec2::splat(ball.radius * 2.0),
        ball.color,
    ));

    instances
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_frame_order_and_contents() {
        let world = World::new();
        let frame = build_frame(&world);
        assert_eq!(frame.len(), BRICK_ROWS * BRICK_COLS + 2);

        // Bricks first, in container order
        assert_eq!(frame[0].pos, [BRICK_PADDING / 2.0, BRICK_TOP_OFFSET]);
        assert_eq!(frame[0].size, [BRICK_WIDTH, BRICK_HEIGHT]);

        // Then the paddle, then the ball's bounding quad
        let paddle = &frame[frame.len() - 2];
        assert_eq!(paddle.size, [PADDLE_WIDTH, PADDLE_HEIGHT]);

        let ball = &frame[frame.len() - 1];
        assert_eq!(ball.pos, [400.0 - BALL_RADIUS, 300.0 - BALL_RADIUS]);
        assert_eq!(ball.size, [BALL_RADIUS * 2.0, BALL_RADIUS * 2.0]);
    }

    #[test]
    fn test_destroyed_bricks_are_not_drawn() {
        let mut world = World::new();
        world.bricks[0].destroyed = true;
        world.bricks[7].destroyed = true;

        let frame = build_frame(&world);
        assert_eq!(frame.len(), BRICK_ROWS * BRICK_COLS);
        // Brick 1 is now the first instance
        assert_eq!(
            frame[0].pos,
            [BRICK_PADDING / 2.0 + BRICK_WIDTH + BRICK_PADDING, BRICK_TOP_OFFSET]
        );
    }
}
