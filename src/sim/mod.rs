//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One state update per tick, no wall-clock time
//! - Fixed level data, no randomness
//! - Stable iteration order (level entity order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod entity;
pub mod error;
pub mod level;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, overlaps, resolve_collisions};
pub use entity::{Body, Coin, Entity, JumpState, Obstacle, Player, SpriteId};
pub use error::SimError;
pub use level::{Level, LevelManager, standard_levels};
pub use physics::PhysicsEngine;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, autopilot, tick};
