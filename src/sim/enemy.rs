//! Patrolling enemies
//!
//! Enemies walk back and forth within a fixed range of their spawn point,
//! fall under gravity until they land on a platform, and turn around when
//! they run into a wall. They never jump, so head-bump (bottom) collisions
//! are deliberately not resolved - only the player handles those.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{self, Bounded, Rect, Side};
use super::platform::Platform;
use crate::consts::*;
use crate::normalized_delta;

/// An enemy entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub on_ground: bool,
    pub facing_right: bool,
    /// Patrol anchor (spawn position)
    pub patrol_origin: f32,
    pub patrol_distance: f32,
    /// -1.0 walking left, +1.0 walking right
    pub direction: f32,
    pub animation_frame: u32,
    animation_timer: f32,
}

impl Enemy {
    /// Spawn an enemy at the given position, walking left
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::splat(ENEMY_SIZE),
            vel: Vec2::new(-ENEMY_SPEED, 0.0),
            on_ground: false,
            facing_right: false,
            patrol_origin: x,
            patrol_distance: ENEMY_PATROL_DISTANCE,
            direction: -1.0,
            animation_frame: 0,
            animation_timer: 0.0,
        }
    }

    /// Advance the enemy by one frame against the given platforms
    pub fn update(&mut self, platforms: &[Platform], dt: f32) {
        let nd = normalized_delta(dt);

        // Gravity with terminal velocity
        if !self.on_ground {
            self.vel.y += ENEMY_GRAVITY * nd;
            if self.vel.y > ENEMY_MAX_FALL_SPEED {
                self.vel.y = ENEMY_MAX_FALL_SPEED;
            }
        }

        // Turn around at the patrol boundaries
        if self.pos.x <= self.patrol_origin - self.patrol_distance {
            self.direction = 1.0;
            self.vel.x = ENEMY_SPEED;
            self.facing_right = true;
        } else if self.pos.x >= self.patrol_origin + self.patrol_distance {
            self.direction = -1.0;
            self.vel.x = -ENEMY_SPEED;
            self.facing_right = false;
        }

        self.pos += self.vel * nd;

        self.on_ground = false;
        self.resolve_platform_collisions(platforms);

        self.update_animation(dt);
    }

    fn resolve_platform_collisions(&mut self, platforms: &[Platform]) {
        for platform in platforms {
            let Some(contact) = collision::check(self, platform) else {
                continue;
            };
            match contact.side {
                Side::Top if self.vel.y > 0.0 => {
                    self.pos.y = platform.pos.y - self.size.y;
                    self.vel.y = 0.0;
                    self.on_ground = true;
                }
                Side::Left | Side::Right => {
                    // Bounce off the wall
                    self.vel.x = -self.vel.x;
                    self.direction = -self.direction;
                    self.facing_right = !self.facing_right;
                }
                _ => {}
            }
        }
    }

    /// Two-frame walk cycle, advancing only while actually moving
    fn update_animation(&mut self, dt: f32) {
        if self.vel.x.abs() <= VELOCITY_EPSILON {
            return;
        }
        self.animation_timer += ANIMATION_SPEED_ENEMY * normalized_delta(dt);
        if self.animation_timer >= ANIMATION_THRESHOLD_ENEMY {
            self.animation_timer = 0.0;
            self.animation_frame = (self.animation_frame + 1) % 2;
        }
    }
}

impl Bounded for Enemy {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}
