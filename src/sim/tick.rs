//! Per-frame world update
//!
//! One update runs in fixed order: input moves the paddle, the ball
//! integrates, then walls, paddle and bricks resolve in that order. The
//! external frame-pump supplies the elapsed dt and calls this once per frame;
//! dt is real elapsed time, not a fixed step, so fast balls at low frame
//! rates can tunnel. That is the accepted behavior.

use glam::Vec2;

use super::collision::{Axis, circle_aabb_overlap, resolve_circle_aabb};
use super::state::{Ball, World};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Input intents for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Demo mode: steer the paddle toward the ball automatically
    pub idle_mode: bool,
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &TickInput, dt: f32) {
    world.time_ticks += 1;

    let mut input = *input;
    if input.idle_mode {
        // Chase the ball's x with a small dead zone to avoid jitter
        let paddle_center = world.paddle.bounds.center().x;
        input.move_left = world.ball.pos.x < paddle_center - 2.0;
        input.move_right = world.ball.pos.x > paddle_center + 2.0;
    }

    move_paddle(world, &input, dt);

    // Explicit Euler
    world.ball.pos += world.ball.vel * dt;

    if bounce_walls(world) {
        // Ball left through the bottom edge; nothing else to resolve
        return;
    }
    bounce_paddle(world);
    bounce_bricks(world);
}

fn move_paddle(world: &mut World, input: &TickInput, dt: f32) {
    let dir = (input.move_right as i32 - input.move_left as i32) as f32;
    if dir == 0.0 {
        return;
    }
    let max_x = SCREEN_WIDTH - world.paddle.width();
    let min_x =
        (world.paddle.bounds.min.x + dir * world.tuning.paddle_speed * dt).clamp(0.0, max_x);
    world.paddle.bounds = world.paddle.moved_to(min_x);
}

/// Wall checks in fixed order: top, left, right, then the bottom "out of
/// bounds" reset. The reflected component is driven to the inbound sign
/// rather than blindly negated, so a re-check against a wall the ball is
/// already clamped to is a no-op. Returns true when the ball was reset.
fn bounce_walls(world: &mut World) -> bool {
    let ball = &mut world.ball;

    if ball.pos.y - ball.radius <= 0.0 {
        ball.vel.y = ball.vel.y.abs();
        ball.pos.y = ball.radius;
    }
    if ball.pos.x - ball.radius <= 0.0 {
        ball.vel.x = ball.vel.x.abs();
        ball.pos.x = ball.radius;
    }
    if ball.pos.x + ball.radius >= SCREEN_WIDTH {
        ball.vel.x = -ball.vel.x.abs();
        ball.pos.x = SCREEN_WIDTH - ball.radius;
    }
    if ball.pos.y + ball.radius >= SCREEN_HEIGHT {
        log::debug!("ball out at x={:.1}, resetting to serve", ball.pos.x);
        ball.reset(world.tuning.ball_start_vel);
        return true;
    }
    false
}

/// Apply a resolution: push the ball out and reflect one velocity axis.
fn apply_resolution(ball: &mut Ball, closest: Vec2) {
    let res = resolve_circle_aabb(ball.pos, ball.radius, closest);
    ball.pos += res.offset;
    match res.flip {
        Axis::X => ball.vel.x = -ball.vel.x,
        Axis::Y => ball.vel.y = -ball.vel.y,
    }
}

fn bounce_paddle(world: &mut World) {
    let ball = &mut world.ball;
    let paddle = &world.paddle;

    let check = circle_aabb_overlap(ball.pos, ball.radius, &paddle.bounds);
    if !check.hit {
        return;
    }
    apply_resolution(ball, check.closest);

    // Steer: hits away from the paddle center push the ball sideways; the
    // speed is then restored so only the direction changes.
    let speed = ball.vel.length();
    let offset = ball.pos.x - paddle.bounds.min.x - paddle.width() / 2.0;
    ball.vel.x += offset * world.tuning.bounce_steer;
    ball.vel = ball.vel.normalize_or_zero() * speed;

    log::trace!("paddle hit, offset {offset:.1} from center");
}

/// Brick pass: container order, no early exit. The ball can resolve against
/// several bricks in one frame; each resolution feeds the next check, which
/// makes the cascade order-dependent. Accepted as a minor inaccuracy.
fn bounce_bricks(world: &mut World) {
    let ball = &mut world.ball;
    let mut destroyed_any = false;

    for (i, brick) in world.bricks.iter_mut().enumerate() {
        if brick.destroyed {
            continue;
        }
        let check = circle_aabb_overlap(ball.pos, ball.radius, &brick.bounds);
        if !check.hit {
            continue;
        }
        brick.destroyed = true;
        destroyed_any = true;
        apply_resolution(ball, check.closest);
        log::debug!("brick {i} destroyed");
    }

    if destroyed_any && world.cleared() {
        log::info!("all bricks cleared after {} ticks", world.time_ticks);
    }
}
