//! Game state and top-level progression
//!
//! `GameState` owns the current level's entities plus score, lives, and the
//! menu/playing/paused/level-complete/game-over machine. Phase transitions
//! happen only through the explicit lifecycle operations here and the
//! per-tick rules in [`super::tick`]; there are no implicit timers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Bounded, Rect};
use super::enemy::Enemy;
use super::platform::Platform;
use super::player::Player;
use crate::consts::*;
use crate::level::{LevelData, LevelError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the start screen
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused; nothing simulates
    Paused,
    /// Level cleared, waiting for the next-level command
    LevelComplete,
    /// Run ended; `GameState::victory` tells the two endings apart
    GameOver,
}

/// Things that happened during a tick, for the UI/audio layer to consume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CoinCollected,
    EnemyStomped,
    PlayerDied,
    LevelComplete,
    Victory,
    GameOver,
}

/// A collectible coin. Collected coins are flagged rather than removed so
/// iteration order stays stable within a level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub size: Vec2,
    pub collected: bool,
}

impl Bounded for Coin {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// The level exit
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Goal {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Bounded for Goal {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    /// Current level number, 1-based
    pub level_number: usize,
    /// True on `GamePhase::GameOver` when every level was cleared
    pub victory: bool,

    pub player: Player,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub goal: Goal,

    /// Events from the most recent tick
    pub events: Vec<GameEvent>,

    levels: Vec<LevelData>,
    /// Set after start/resume/level loads; the next tick skips physics so a
    /// stale frame-time baseline can't produce a huge step
    pub(super) skip_frame: bool,
}

impl GameState {
    /// Create a game over the given campaign. Starts on the menu with
    /// level 1 loaded. Malformed level data is a fatal error here; the
    /// simulation itself never fails.
    pub fn new(levels: Vec<LevelData>) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::NoLevels);
        }
        for (i, level) in levels.iter().enumerate() {
            level.validate(i + 1)?;
        }

        let first = &levels[0];
        let mut state = Self {
            phase: GamePhase::Menu,
            score: 0,
            lives: INITIAL_LIVES,
            level_number: 1,
            victory: false,
            player: Player::new(first.start_x, first.start_y),
            platforms: Vec::new(),
            enemies: Vec::new(),
            coins: Vec::new(),
            goal: Goal {
                pos: Vec2::new(first.goal_x, first.goal_y),
                size: Vec2::splat(GOAL_SIZE),
            },
            events: Vec::new(),
            levels,
            skip_frame: true,
        };
        state.load_level(1);
        Ok(state)
    }

    /// Number of levels in the campaign
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Begin playing from the menu, or resume from pause
    pub fn start(&mut self) {
        if self.phase == GamePhase::Menu || self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
            self.skip_frame = true;
        }
    }

    /// Toggle pause. Pausing freezes the simulation entirely; resuming
    /// skips one frame so the first delta after the gap is not applied.
    pub fn pause(&mut self) {
        match self.phase {
            GamePhase::Playing => self.phase = GamePhase::Paused,
            GamePhase::Paused => {
                self.phase = GamePhase::Playing;
                self.skip_frame = true;
            }
            _ => {}
        }
    }

    /// Restart the run from level 1 with fresh score and lives
    pub fn restart(&mut self) {
        self.score = 0;
        self.lives = INITIAL_LIVES;
        self.level_number = 1;
        self.victory = false;
        self.load_level(1);
        self.phase = GamePhase::Playing;
        self.skip_frame = true;
        log::info!("Run restarted");
    }

    /// Advance from the level-complete screen. Past the last level this
    /// ends the run as a victory.
    pub fn next_level(&mut self) {
        if self.level_number < self.levels.len() {
            self.level_number += 1;
            self.load_level(self.level_number);
            self.phase = GamePhase::Playing;
            self.skip_frame = true;
        } else {
            self.victory = true;
            self.phase = GamePhase::GameOver;
            log::info!("All levels cleared");
        }
    }

    /// Rebuild the entity sets from level data.
    ///
    /// Platforms, enemies, and coins are recreated; the player is
    /// repositioned but never reconstructed, so its movement tunables
    /// persist across levels. A full-width floor platform is appended
    /// below the authored geometry.
    pub(super) fn load_level(&mut self, level_number: usize) {
        let level = &self.levels[level_number - 1];

        self.platforms = level.platforms.iter().map(|spec| spec.build()).collect();
        self.platforms.push(Platform::new(
            0.0,
            WORLD_HEIGHT - TILE_SIZE,
            WORLD_WIDTH,
            TILE_SIZE,
        ));

        // Enemy anchors name the platform top they stand on
        self.enemies = level
            .enemies
            .iter()
            .map(|spawn| Enemy::new(spawn.x, spawn.y - ENEMY_SIZE))
            .collect();

        self.coins = level
            .coins
            .iter()
            .map(|spawn| Coin {
                pos: Vec2::new(spawn.x, spawn.y),
                size: Vec2::splat(COIN_SIZE),
                collected: false,
            })
            .collect();

        self.goal = Goal {
            pos: Vec2::new(level.goal_x, level.goal_y),
            size: Vec2::splat(GOAL_SIZE),
        };

        self.player.reset(level.start_x, level.start_y);
        self.skip_frame = true;

        log::info!(
            "Level {} loaded: {} platforms, {} enemies, {} coins",
            level_number,
            self.platforms.len(),
            self.enemies.len(),
            self.coins.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::built_in_levels;

    #[test]
    fn test_new_game_starts_on_menu_with_level_one() {
        let state = GameState::new(built_in_levels()).unwrap();
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.level_number, 1);
        assert_eq!(state.lives, INITIAL_LIVES);
        assert_eq!(state.score, 0);
        // Authored platforms plus the appended floor
        assert_eq!(state.platforms.len(), 6);
        assert_eq!(state.enemies.len(), 3);
        assert!(state.coins.iter().all(|c| !c.collected));
    }

    #[test]
    fn test_empty_campaign_is_fatal() {
        assert_eq!(GameState::new(Vec::new()).unwrap_err(), LevelError::NoLevels);
    }

    #[test]
    fn test_invalid_level_is_fatal_at_construction() {
        let mut levels = built_in_levels();
        levels[1].platforms.clear();
        assert_eq!(
            GameState::new(levels).unwrap_err(),
            LevelError::NoPlatforms(2)
        );
    }

    #[test]
    fn test_start_and_pause_transitions() {
        let mut state = GameState::new(built_in_levels()).unwrap();
        state.start();
        assert_eq!(state.phase, GamePhase::Playing);

        state.pause();
        assert_eq!(state.phase, GamePhase::Paused);
        state.pause();
        assert_eq!(state.phase, GamePhase::Playing);

        // Pause is a no-op outside Playing/Paused
        state.phase = GamePhase::GameOver;
        state.pause();
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut state = GameState::new(built_in_levels()).unwrap();
        state.start();
        state.score = 500;
        state.lives = 1;
        state.level_number = 2;
        state.load_level(2);

        state.restart();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, INITIAL_LIVES);
        assert_eq!(state.level_number, 1);
    }

    #[test]
    fn test_next_level_past_last_is_victory() {
        let mut state = GameState::new(built_in_levels()).unwrap();
        state.level_number = state.level_count();
        state.phase = GamePhase::LevelComplete;

        state.next_level();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.victory);
    }

    #[test]
    fn test_player_tunables_survive_level_loads() {
        let mut state = GameState::new(built_in_levels()).unwrap();
        state.player.speed = 8.0;
        state.player.animation_speed = 0.2;

        state.level_number = 2;
        state.load_level(2);
        assert_eq!(state.player.speed, 8.0);
        assert_eq!(state.player.animation_speed, 0.2);
        // Kinematic state was reset
        assert_eq!(state.player.vel, glam::Vec2::ZERO);
        assert!(!state.player.on_ground);
    }
}
