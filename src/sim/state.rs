//! Game state and core simulation types
//!
//! A session owns the player, the level table, lives and score. It starts
//! `Running` and ends in `Victory` or `Defeat`; a finished session is never
//! resumed.

use serde::{Deserialize, Serialize};

use super::entity::{Body, Player};
use super::error::SimError;
use super::level::{Level, LevelManager};
use super::physics::PhysicsEngine;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks are being executed
    Running,
    /// Score threshold reached (terminal)
    Victory,
    /// Out of lives (terminal)
    Defeat,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Running)
    }
}

/// Something that happened during a tick. Drained by the driver for audio
/// and screen updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player ran into a cactus and lost a life
    ObstacleHit { level: usize, obstacle: usize, lives: u8 },
    /// Coin picked up; `footprint` is where it was drawn
    CoinCollected {
        level: usize,
        coin: usize,
        footprint: Body,
        score: u32,
    },
    /// Player moved to the next level; `footprint` is where it last stood
    LevelAdvanced {
        from: usize,
        to: usize,
        footprint: Body,
    },
    Victory,
    Defeat,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Lives left (starts at 3, never increases)
    pub lives: u8,
    /// Score (starts at 0, never decreases)
    pub score: u32,
    pub phase: GamePhase,
    pub player: Player,
    pub levels: LevelManager,
    pub physics: PhysicsEngine,
    /// Number of ticks executed
    pub time_ticks: u64,
    /// Events produced by the last tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh session on the standard levels
    pub fn new() -> Self {
        Self::assemble(LevelManager::default(), FLOOR_LINES[0])
    }

    /// Fresh session on a custom level table
    pub fn with_levels(levels: Vec<Level>) -> Result<Self, SimError> {
        let manager = LevelManager::new(levels);
        let floor = manager.get(0)?.floor;
        Ok(Self::assemble(manager, floor))
    }

    fn assemble(levels: LevelManager, floor: i32) -> Self {
        Self {
            lives: START_LIVES,
            score: 0,
            phase: GamePhase::Running,
            player: Player::new(floor),
            levels,
            physics: PhysicsEngine::default(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn level_index(&self) -> usize {
        self.player.level
    }

    pub fn current_level(&self) -> Result<&Level, SimError> {
        self.levels.get(self.player.level)
    }

    /// Delay to wait after the current tick
    pub fn tick_delay_ms(&self) -> Result<u64, SimError> {
        Ok(self.current_level()?.tick_delay_ms())
    }

    /// Take the events of the last tick
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
