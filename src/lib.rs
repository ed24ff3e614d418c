//! Dino Runner - A side-scrolling runner for a TFT panel and one button
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, levels, game state)
//! - `renderer`: Drawing contract and scene painter
//! - `audio`: Buzzer cue contract and tone tables
//! - `platform`: Input sampling and tick pacing
//! - `game`: Session driver wiring the simulation to its collaborators
//! - `settings`: Runtime configuration

pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, SessionOutcome};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical play-field (portrait panel)
    pub const FIELD_WIDTH: i32 = 240;
    pub const FIELD_HEIGHT: i32 = 320;

    /// Floor line per level. The fourth entry is a decorative bottom line.
    pub const FLOOR_LINES: [i32; 4] = [
        FIELD_HEIGHT - 60,
        FIELD_HEIGHT - 160,
        FIELD_HEIGHT - 260,
        FIELD_HEIGHT - 32,
    ];

    /// Default box size shared by player, cactus and coin sprites
    pub const ENTITY_SIZE: i32 = 32;

    /// Upward displacement applied by a jump
    pub const JUMP_HEIGHT: i32 = 58;
    /// Forward boost applied together with the jump
    pub const JUMP_BOOST: i32 = 50;
    /// Fall increment per tick while airborne
    pub const FALL_SPEED: i32 = 13;
    /// Auto-scroll step per tick
    pub const RUN_STEP: i32 = 10;

    pub const START_LIVES: u8 = 3;
    pub const COIN_REWARD: u32 = 10;
    pub const VICTORY_SCORE: u32 = 80;

    /// Tick delay is `BASE_TICK_DELAY_MS - speed * SPEED_DELAY_STEP_MS`
    pub const BASE_TICK_DELAY_MS: u64 = 100;
    pub const SPEED_DELAY_STEP_MS: u64 = 10;

    /// Where collected coins are parked
    pub const OFF_FIELD_X: i32 = -100;
}
