//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Single update pass per frame, frame deltas normalized to a 60 Hz reference
//! - Stable iteration order (level-data order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemy;
pub mod platform;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{Bounded, Contact, Rect, Side};
pub use enemy::Enemy;
pub use platform::{PatrolAxis, Platform, PlatformKind};
pub use player::{Animation, Player};
pub use state::{Coin, GameEvent, GamePhase, GameState, Goal};
pub use tick::{TickInput, tick};
