//! Data-driven game balance
//!
//! Defaults come from `consts`; a JSON file can override individual values
//! at startup without recompiling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BALL_START_VEL, BOUNCE_STEER, PADDLE_SPEED};

/// Tunable gameplay parameters, carried by the `World`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Paddle speed in pixels per second
    pub paddle_speed: f32,
    /// Ball velocity at serve and after a bottom-edge reset
    pub ball_start_vel: Vec2,
    /// Horizontal velocity added per pixel of offset from the paddle center
    pub bounce_steer: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_speed: PADDLE_SPEED,
            ball_start_vel: BALL_START_VEL,
            bounce_steer: BOUNCE_STEER,
        }
    }
}

impl Tuning {
    /// Parse a tuning override from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
