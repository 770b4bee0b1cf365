//! Per-frame orchestration
//!
//! One `tick` advances everything while the game is playing: platforms,
//! then enemies, then the player, then the cross-entity checks (stomps,
//! coins, goal, falling off the world). The host calls this exactly once
//! per animation frame with the wall-clock delta; pausing simply stops
//! the calls, there is no background simulation.

use super::collision::{self, Side};
use super::player::Animation;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input snapshot for a single tick.
///
/// Sampled once per frame from whatever input source the host wires up;
/// the sim treats it as a pure value. Jump is level-triggered: holding it
/// only fires while grounded, so it cannot repeat mid-air.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Advance the game by one frame.
///
/// `dt` is wall-clock seconds since the previous frame, clamped to
/// [`MAX_FRAME_DT`]. The first frame after start/resume or a level load is
/// skipped entirely so a stale baseline can't produce a giant step.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if state.phase != GamePhase::Playing {
        return;
    }
    if state.skip_frame {
        state.skip_frame = false;
        return;
    }
    let dt = dt.min(MAX_FRAME_DT);

    for platform in &mut state.platforms {
        platform.update(dt);
    }
    for enemy in state.enemies.iter_mut() {
        enemy.update(&state.platforms, dt);
    }
    state.player.update(input, &state.platforms, dt);

    if check_enemy_contacts(state) {
        player_died(state);
        return;
    }

    collect_coins(state);

    if collision::check(&state.player, &state.goal).is_some() {
        complete_level(state);
        return;
    }

    // Fell off the world
    if state.player.pos.y > WORLD_HEIGHT {
        player_died(state);
    }
}

/// Resolve player-vs-enemy contacts. Stomps (falling onto an enemy's top)
/// remove the enemy and bounce the player; any other contact is lethal.
/// Returns true when the player died.
fn check_enemy_contacts(state: &mut GameState) -> bool {
    let mut i = 0;
    while i < state.enemies.len() {
        match collision::check(&state.player, &state.enemies[i]) {
            Some(contact) if contact.side == Side::Top && state.player.vel.y > 0.0 => {
                state.enemies.remove(i);
                state.score += ENEMY_SCORE;
                state.player.vel.y = STOMP_BOUNCE;
                state.events.push(GameEvent::EnemyStomped);
            }
            Some(_) => return true,
            None => i += 1,
        }
    }
    false
}

fn collect_coins(state: &mut GameState) {
    for coin in &mut state.coins {
        if !coin.collected && collision::check(&state.player, coin).is_some() {
            coin.collected = true;
            state.score += COIN_SCORE;
            state.events.push(GameEvent::CoinCollected);
        }
    }
}

fn player_died(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.player.animation = Animation::Hit;
    state.events.push(GameEvent::PlayerDied);

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.victory = false;
        state.events.push(GameEvent::GameOver);
        log::info!("Game over at level {} with score {}", state.level_number, state.score);
    } else {
        // Reload the current level; score and player tuning persist
        let level = state.level_number;
        state.load_level(level);
        log::info!("Player died, {} lives left", state.lives);
    }
}

fn complete_level(state: &mut GameState) {
    state.score += LEVEL_BONUS_MULTIPLIER * state.level_number as u64;

    if state.level_number >= state.level_count() {
        state.victory = true;
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::Victory);
        log::info!("Campaign cleared with score {}", state.score);
    } else {
        state.phase = GamePhase::LevelComplete;
        state.events.push(GameEvent::LevelComplete);
        log::info!("Level {} complete, score {}", state.level_number, state.score);
    }
}
