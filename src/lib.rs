//! Skyledge - a side-scrolling platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (AABB collision, physics, game state)
//! - `level`: Level data records, validation, and the built-in campaign
//!
//! Rendering, sprite loading, and UI wiring live outside this crate; the
//! sim only exposes bounds and discrete animation fields for a renderer
//! to consume.

pub mod level;
pub mod sim;

pub use level::{LevelData, LevelError};
pub use sim::{GamePhase, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// World dimensions in pixels
    pub const WORLD_WIDTH: f32 = 1200.0;
    pub const WORLD_HEIGHT: f32 = 700.0;

    /// Reference simulation rate; velocities are tuned in px per 60 Hz frame
    pub const REFERENCE_FPS: f32 = 60.0;
    /// Frame delta clamp (prevents huge steps after tab backgrounding)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Entity sizes
    pub const TILE_SIZE: f32 = 64.0;
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    pub const ENEMY_SIZE: f32 = 48.0;
    pub const COIN_SIZE: f32 = 32.0;
    pub const GOAL_SIZE: f32 = 50.0;

    /// Player physics
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_MAX_SPEED: f32 = 5.0;
    pub const PLAYER_JUMP_POWER: f32 = -15.0;
    pub const PLAYER_GRAVITY: f32 = 0.8;
    pub const PLAYER_FRICTION: f32 = 0.85;
    pub const PLAYER_MAX_FALL_SPEED: f32 = 20.0;
    /// Below this horizontal speed the player counts as standing still
    pub const VELOCITY_EPSILON: f32 = 0.1;

    /// Enemy physics
    pub const ENEMY_SPEED: f32 = 1.5;
    pub const ENEMY_GRAVITY: f32 = 0.8;
    pub const ENEMY_PATROL_DISTANCE: f32 = 120.0;
    pub const ENEMY_MAX_FALL_SPEED: f32 = 15.0;

    /// Animation timers (accumulated per normalized frame)
    pub const ANIMATION_SPEED_PLAYER: f32 = 0.075;
    pub const ANIMATION_SPEED_ENEMY: f32 = 0.05;
    pub const ANIMATION_THRESHOLD_PLAYER: f32 = 0.5;
    pub const ANIMATION_THRESHOLD_ENEMY: f32 = 0.6;

    /// Scoring and lives
    pub const INITIAL_LIVES: u32 = 3;
    pub const COIN_SCORE: u64 = 10;
    pub const ENEMY_SCORE: u64 = 20;
    pub const LEVEL_BONUS_MULTIPLIER: u64 = 100;
    /// Upward impulse applied to the player after stomping an enemy
    pub const STOMP_BOUNCE: f32 = -10.0;
}

/// Scale a wall-clock frame delta so 1.0 equals one frame at the 60 Hz
/// reference rate. All velocities and accelerations are tuned in these
/// units, which keeps behavior consistent across refresh rates.
#[inline]
pub fn normalized_delta(dt: f32) -> f32 {
    dt * consts::REFERENCE_FPS
}
