//! Brick Pong - a classic paddle-and-bricks arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, game state)
//! - `renderer`: Per-frame rectangle draw requests for the render backend
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed timestep used by the headless demo loop (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Screen dimensions. Origin is the top-left corner, y grows downward.
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_START_POS: Vec2 = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
    pub const BALL_START_VEL: Vec2 = Vec2::new(150.0, -250.0);
    pub const BALL_COLOR: [f32; 4] = [0.92, 0.92, 0.95, 1.0];

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 160.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_Y: f32 = 560.0;
    pub const PADDLE_SPEED: f32 = 500.0;
    pub const PADDLE_COLOR: [f32; 4] = [0.78, 0.80, 0.85, 1.0];
    /// Horizontal velocity added per pixel of offset between the impact
    /// point and the paddle center
    pub const BOUNCE_STEER: f32 = 1.5;

    /// Brick grid. `BRICK_COLS * (BRICK_WIDTH + BRICK_PADDING)` spans the
    /// screen exactly, with half a padding of margin on each side.
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_WIDTH: f32 = 76.0;
    pub const BRICK_HEIGHT: f32 = 24.0;
    pub const BRICK_PADDING: f32 = 4.0;
    pub const BRICK_TOP_OFFSET: f32 = 40.0;

    /// Row colors, top to bottom
    pub const BRICK_ROW_COLORS: [[f32; 4]; BRICK_ROWS] = [
        [0.90, 0.22, 0.21, 1.0], // red
        [0.93, 0.55, 0.14, 1.0], // orange
        [0.95, 0.85, 0.20, 1.0], // yellow
        [0.28, 0.78, 0.31, 1.0], // green
        [0.20, 0.45, 0.90, 1.0], // blue
    ];
}
