//! Level data
//!
//! Levels are plain records: platform rectangles (optionally patrolling),
//! coin and enemy spawn points, a player start, and a goal. They are
//! authored by hand here or externally as JSON (the level editor exports
//! this shape); the sim consumes them verbatim at load time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{PatrolAxis, Platform, PlatformKind};

/// Fatal level-configuration errors.
///
/// The physics core itself has no recoverable-error paths; bad level data
/// is rejected up front when a game is constructed, not retried.
#[derive(Debug, Error, PartialEq)]
pub enum LevelError {
    #[error("no levels defined")]
    NoLevels,
    #[error("level {0} has no platforms")]
    NoPlatforms(usize),
    #[error("level {0} has a platform with negative or non-finite size")]
    BadPlatformSize(usize),
    #[error("invalid level JSON: {0}")]
    Json(String),
}

/// A spawn point for a coin or an enemy
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
}

/// Patrol parameters for a moving platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PatrolSpec {
    pub distance: f32,
    pub speed: f32,
    #[serde(default)]
    pub axis: PatrolAxis,
}

/// A platform as authored in level data
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub kind: PlatformKind,
    #[serde(default)]
    pub patrol: Option<PatrolSpec>,
}

impl PlatformSpec {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            kind: PlatformKind::Static,
            patrol: None,
        }
    }

    pub fn moving(x: f32, y: f32, width: f32, height: f32, distance: f32, speed: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            kind: PlatformKind::Moving,
            patrol: Some(PatrolSpec {
                distance,
                speed,
                axis: PatrolAxis::Horizontal,
            }),
        }
    }

    /// Instantiate the sim entity for this spec
    pub fn build(&self) -> Platform {
        let platform = Platform::new(self.x, self.y, self.width, self.height);
        match self.patrol {
            Some(patrol) if self.kind == PlatformKind::Moving => {
                platform.with_patrol(patrol.distance, patrol.speed, patrol.axis)
            }
            _ => {
                let mut platform = platform;
                platform.kind = self.kind;
                platform
            }
        }
    }
}

/// One authored level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    pub platforms: Vec<PlatformSpec>,
    #[serde(default)]
    pub coins: Vec<SpawnPoint>,
    #[serde(default)]
    pub enemies: Vec<SpawnPoint>,
    pub start_x: f32,
    pub start_y: f32,
    pub goal_x: f32,
    pub goal_y: f32,
}

impl LevelData {
    /// Parse an externally-authored level (level-editor export)
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: LevelData =
            serde_json::from_str(json).map_err(|e| LevelError::Json(e.to_string()))?;
        level.validate(0)?;
        Ok(level)
    }

    /// Reject malformed level data. `index` is reported 1-based where it
    /// names a campaign level.
    pub fn validate(&self, index: usize) -> Result<(), LevelError> {
        if self.platforms.is_empty() {
            return Err(LevelError::NoPlatforms(index));
        }
        for p in &self.platforms {
            let finite =
                p.x.is_finite() && p.y.is_finite() && p.width.is_finite() && p.height.is_finite();
            if !finite || p.width < 0.0 || p.height < 0.0 {
                return Err(LevelError::BadPlatformSize(index));
            }
        }
        Ok(())
    }
}

/// The built-in three-level campaign.
///
/// Coordinates assume the 1200x700 world; a full-width floor platform is
/// appended by the loader, not listed here.
pub fn built_in_levels() -> Vec<LevelData> {
    const H: f32 = WORLD_HEIGHT;

    vec![
        // Level 1 - gentle introduction
        LevelData {
            platforms: vec![
                PlatformSpec::new(0.0, H - 64.0, 256.0, 64.0),
                PlatformSpec::new(320.0, H - 64.0, 192.0, 64.0),
                PlatformSpec::new(576.0, H - 128.0, 192.0, 64.0),
                PlatformSpec::new(832.0, H - 64.0, 192.0, 64.0),
                PlatformSpec::new(1088.0, H - 64.0, 128.0, 64.0),
            ],
            coins: vec![
                SpawnPoint { x: 400.0, y: H - 128.0 },
                SpawnPoint { x: 640.0, y: H - 192.0 },
                SpawnPoint { x: 896.0, y: H - 128.0 },
            ],
            enemies: vec![
                SpawnPoint { x: 360.0, y: H - 128.0 },
                SpawnPoint { x: 616.0, y: H - 192.0 },
                SpawnPoint { x: 872.0, y: H - 128.0 },
            ],
            start_x: 50.0,
            start_y: H - 128.0,
            goal_x: 1100.0,
            goal_y: H - 128.0,
        },
        // Level 2 - taller staircase
        LevelData {
            platforms: vec![
                PlatformSpec::new(0.0, H - 64.0, 192.0, 64.0),
                PlatformSpec::new(256.0, H - 128.0, 192.0, 64.0),
                PlatformSpec::new(512.0, H - 192.0, 192.0, 64.0),
                PlatformSpec::new(768.0, H - 128.0, 192.0, 64.0),
                PlatformSpec::new(1024.0, H - 64.0, 192.0, 64.0),
            ],
            coins: vec![
                SpawnPoint { x: 320.0, y: H - 192.0 },
                SpawnPoint { x: 576.0, y: H - 256.0 },
                SpawnPoint { x: 832.0, y: H - 192.0 },
                SpawnPoint { x: 1088.0, y: H - 128.0 },
            ],
            enemies: vec![
                SpawnPoint { x: 296.0, y: H - 192.0 },
                SpawnPoint { x: 552.0, y: H - 256.0 },
                SpawnPoint { x: 808.0, y: H - 192.0 },
            ],
            start_x: 50.0,
            start_y: H - 128.0,
            goal_x: 1100.0,
            goal_y: H - 128.0,
        },
        // Level 3 - staircase plus patrolling carriers
        LevelData {
            platforms: vec![
                PlatformSpec::new(0.0, H - 64.0, 192.0, 64.0),
                PlatformSpec::new(256.0, H - 128.0, 192.0, 64.0),
                PlatformSpec::new(512.0, H - 192.0, 192.0, 64.0),
                PlatformSpec::new(768.0, H - 128.0, 192.0, 64.0),
                PlatformSpec::new(1024.0, H - 64.0, 192.0, 64.0),
                PlatformSpec::moving(400.0, H - 256.0, 128.0, 64.0, 150.0, 1.2),
                PlatformSpec::moving(640.0, H - 320.0, 128.0, 64.0, 120.0, 1.2),
                PlatformSpec::moving(880.0, H - 256.0, 128.0, 64.0, 140.0, 1.2),
            ],
            coins: vec![
                SpawnPoint { x: 320.0, y: H - 192.0 },
                SpawnPoint { x: 576.0, y: H - 256.0 },
                SpawnPoint { x: 832.0, y: H - 192.0 },
            ],
            enemies: vec![
                SpawnPoint { x: 296.0, y: H - 192.0 },
                SpawnPoint { x: 552.0, y: H - 256.0 },
                SpawnPoint { x: 808.0, y: H - 192.0 },
            ],
            start_x: 50.0,
            start_y: H - 128.0,
            goal_x: 1100.0,
            goal_y: H - 128.0,
        },
    ]
}
