//! The player character
//!
//! Horizontal control with friction, a grounded jump impulse, gravity with
//! a fall-speed cap, and four-side collision resolution against platforms.
//! The update order is fixed and load-bearing: gravity, control, jump,
//! integrate, resolve, world clamp, animation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{self, Bounded, Rect, Side};
use super::platform::Platform;
use super::tick::TickInput;
use crate::consts::*;
use crate::normalized_delta;

/// Animation state, derived from physical state every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Animation {
    #[default]
    Idle,
    Walk,
    Jump,
    /// Death pose, shown on the game-over screen
    Hit,
}

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub on_ground: bool,
    pub facing_right: bool,
    pub animation: Animation,
    pub animation_frame: u32,
    animation_timer: f32,

    // Movement tunables; survive level loads and respawns
    pub speed: f32,
    pub max_speed: f32,
    pub jump_power: f32,
    pub gravity: f32,
    pub friction: f32,
    pub max_fall_speed: f32,
    pub animation_speed: f32,
}

impl Player {
    /// Create a player at the given spawn point with default tuning
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            on_ground: false,
            facing_right: true,
            animation: Animation::Idle,
            animation_frame: 0,
            animation_timer: 0.0,
            speed: PLAYER_SPEED,
            max_speed: PLAYER_MAX_SPEED,
            jump_power: PLAYER_JUMP_POWER,
            gravity: PLAYER_GRAVITY,
            friction: PLAYER_FRICTION,
            max_fall_speed: PLAYER_MAX_FALL_SPEED,
            animation_speed: ANIMATION_SPEED_PLAYER,
        }
    }

    /// Move the player back to a spawn point.
    ///
    /// Clears kinematic state only; the movement tunables are session
    /// constants and deliberately survive level loads.
    pub fn reset(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
        self.vel = Vec2::ZERO;
        self.on_ground = false;
    }

    /// Advance the player by one frame
    pub fn update(&mut self, input: &TickInput, platforms: &[Platform], dt: f32) {
        let nd = normalized_delta(dt);

        // 1. Gravity while airborne, capped at terminal fall speed
        if !self.on_ground {
            self.vel.y += self.gravity * nd;
            if self.vel.y > self.max_fall_speed {
                self.vel.y = self.max_fall_speed;
            }
        }

        // 2. Horizontal control, or friction when no input is held.
        //    Friction decays exponentially in normalized frames so the
        //    feel is identical at 30, 60, and 144 Hz.
        if input.left {
            self.vel.x = -self.speed;
            self.facing_right = false;
        } else if input.right {
            self.vel.x = self.speed;
            self.facing_right = true;
        } else {
            self.vel.x *= self.friction.powf(nd);
            if self.vel.x.abs() < VELOCITY_EPSILON {
                self.vel.x = 0.0;
            }
        }
        self.vel.x = self.vel.x.clamp(-self.max_speed, self.max_speed);

        // 3. Jump is level-triggered: held jump only fires while grounded
        if input.jump && self.on_ground {
            self.vel.y = self.jump_power;
            self.on_ground = false;
        }

        // 4. Integrate
        self.pos += self.vel * nd;

        // 5. Resolve against platforms
        self.on_ground = false;
        self.resolve_platform_collisions(platforms);

        // 6. Left world boundary
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = 0.0;
        }

        // 7. Animation follows physical state
        self.update_animation(dt);
    }

    /// Resolve collisions sequentially in platform order; later platforms
    /// may override earlier corrections. Changing this to a simultaneous
    /// resolver would alter behavior at platform seams.
    fn resolve_platform_collisions(&mut self, platforms: &[Platform]) {
        for platform in platforms {
            let Some(contact) = collision::check(self, platform) else {
                continue;
            };
            match contact.side {
                Side::Top if self.vel.y > 0.0 => {
                    // Landed
                    self.pos.y = platform.pos.y - self.size.y;
                    self.vel.y = 0.0;
                    self.on_ground = true;
                }
                Side::Bottom if self.vel.y < 0.0 => {
                    // Head bump
                    self.pos.y = platform.pos.y + platform.size.y;
                    self.vel.y = 0.0;
                }
                Side::Left => {
                    self.pos.x = platform.pos.x - self.size.x;
                    self.vel.x = 0.0;
                }
                Side::Right => {
                    self.pos.x = platform.pos.x + platform.size.x;
                    self.vel.x = 0.0;
                }
                _ => {}
            }
        }
    }

    fn update_animation(&mut self, dt: f32) {
        self.animation = if !self.on_ground {
            Animation::Jump
        } else if self.vel.x.abs() > VELOCITY_EPSILON {
            Animation::Walk
        } else {
            Animation::Idle
        };

        if self.animation == Animation::Walk {
            self.animation_timer += self.animation_speed * normalized_delta(dt);
            if self.animation_timer >= ANIMATION_THRESHOLD_PLAYER {
                self.animation_timer = 0.0;
                self.animation_frame = (self.animation_frame + 1) % 2;
            }
        }
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}
