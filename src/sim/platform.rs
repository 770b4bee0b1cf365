//! Platforms - static ground pieces and patrolling carriers

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Bounded, Rect};
use crate::normalized_delta;

/// Platform variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    #[default]
    Static,
    Moving,
    /// Declared in level data but currently inert (no breaking behavior)
    Breakable,
}

/// Axis a moving platform patrols along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatrolAxis {
    #[default]
    Horizontal,
    Vertical,
}

/// A platform entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub kind: PlatformKind,
    /// Patrol anchor (initial position)
    pub origin: Vec2,
    pub patrol_distance: f32,
    pub patrol_speed: f32,
    pub axis: PatrolAxis,
}

impl Platform {
    /// Create a static platform
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            vel: Vec2::ZERO,
            kind: PlatformKind::Static,
            origin: Vec2::new(x, y),
            patrol_distance: 0.0,
            patrol_speed: 0.0,
            axis: PatrolAxis::Horizontal,
        }
    }

    /// Turn this platform into a patrolling one, starting toward the far end
    pub fn with_patrol(mut self, distance: f32, speed: f32, axis: PatrolAxis) -> Self {
        self.kind = PlatformKind::Moving;
        self.patrol_distance = distance;
        self.patrol_speed = speed;
        self.axis = axis;
        match axis {
            PatrolAxis::Horizontal => self.vel.x = speed,
            PatrolAxis::Vertical => self.vel.y = speed,
        }
        self
    }

    /// Advance the patrol by one frame.
    ///
    /// Position is clamped to `[origin, origin + patrol_distance]` on the
    /// patrol axis, and velocity flips sign exactly at the clamp boundary
    /// (ping-pong motion). Static and breakable platforms do not move.
    pub fn update(&mut self, dt: f32) {
        if self.kind != PlatformKind::Moving {
            return;
        }
        let nd = normalized_delta(dt);

        match self.axis {
            PatrolAxis::Horizontal => {
                self.pos.x += self.vel.x * nd;
                let far = self.origin.x + self.patrol_distance;
                if self.pos.x >= far {
                    self.pos.x = far;
                    self.vel.x = -self.patrol_speed;
                } else if self.pos.x <= self.origin.x {
                    self.pos.x = self.origin.x;
                    self.vel.x = self.patrol_speed;
                }
            }
            PatrolAxis::Vertical => {
                self.pos.y += self.vel.y * nd;
                let far = self.origin.y + self.patrol_distance;
                if self.pos.y >= far {
                    self.pos.y = far;
                    self.vel.y = -self.patrol_speed;
                } else if self.pos.y <= self.origin.y {
                    self.pos.y = self.origin.y;
                    self.vel.y = self.patrol_speed;
                }
            }
        }
    }
}

impl Bounded for Platform {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_static_platform_never_moves() {
        let mut platform = Platform::new(100.0, 200.0, 192.0, 64.0);
        for _ in 0..100 {
            platform.update(1.0 / 60.0);
        }
        assert_eq!(platform.pos, Vec2::new(100.0, 200.0));
        assert_eq!(platform.vel, Vec2::ZERO);
    }

    #[test]
    fn test_breakable_platform_is_inert() {
        let mut platform = Platform::new(0.0, 0.0, 64.0, 64.0);
        platform.kind = PlatformKind::Breakable;
        platform.update(1.0 / 60.0);
        assert_eq!(platform.pos, Vec2::ZERO);
    }

    #[test]
    fn test_horizontal_patrol_ping_pongs() {
        let mut platform = Platform::new(100.0, 300.0, 128.0, 64.0).with_patrol(
            50.0,
            1.2,
            PatrolAxis::Horizontal,
        );

        // Ride it to the far end; velocity must flip there
        while platform.vel.x > 0.0 {
            platform.update(1.0 / 60.0);
            assert!(platform.pos.x <= 150.0);
        }
        assert_eq!(platform.pos.x, 150.0);
        assert_eq!(platform.vel.x, -1.2);

        // And back to the origin
        while platform.vel.x < 0.0 {
            platform.update(1.0 / 60.0);
            assert!(platform.pos.x >= 100.0);
        }
        assert_eq!(platform.pos.x, 100.0);
        assert_eq!(platform.vel.x, 1.2);
        // Y untouched by a horizontal patrol
        assert_eq!(platform.pos.y, 300.0);
    }

    #[test]
    fn test_vertical_patrol_stays_in_band() {
        let mut platform =
            Platform::new(0.0, 400.0, 128.0, 64.0).with_patrol(80.0, 2.0, PatrolAxis::Vertical);
        for _ in 0..2000 {
            platform.update(1.0 / 60.0);
            assert!(platform.pos.y >= 400.0 && platform.pos.y <= 480.0);
        }
    }

    proptest! {
        /// Patrol confinement holds for any frame rate
        #[test]
        fn prop_patrol_confined_for_any_dt(
            dt in 1.0f32 / 144.0..1.0 / 30.0,
            speed in 0.1f32..8.0,
            distance in 1.0f32..300.0,
        ) {
            let mut platform = Platform::new(100.0, 0.0, 64.0, 64.0)
                .with_patrol(distance, speed, PatrolAxis::Horizontal);
            for _ in 0..500 {
                platform.update(dt);
                prop_assert!(platform.pos.x >= 100.0);
                prop_assert!(platform.pos.x <= 100.0 + distance);
            }
        }
    }
}
