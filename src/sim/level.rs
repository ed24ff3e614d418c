//! Levels and forward progression
//!
//! Each level owns its own cacti and coins on a single floor line. The
//! structure is fixed after construction; only the entities' active and
//! collected flags change.

use serde::{Deserialize, Serialize};

use super::entity::{Body, Coin, Entity, Obstacle, Player};
use super::error::SimError;
use crate::consts::*;

/// A single level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Ordinal (0-based)
    pub index: usize,
    /// Speed factor. Higher is faster.
    pub speed: u32,
    /// Floor line the player runs on
    pub floor: i32,
    pub obstacles: Box<[Obstacle]>,
    pub coins: Box<[Coin]>,
}

impl Level {
    pub fn new(
        index: usize,
        speed: u32,
        floor: i32,
        obstacles: Vec<Obstacle>,
        coins: Vec<Coin>,
    ) -> Self {
        Self {
            index,
            speed,
            floor,
            obstacles: obstacles.into_boxed_slice(),
            coins: coins.into_boxed_slice(),
        }
    }

    /// Level with all entities resting on the floor at the given x positions
    pub fn on_floor(index: usize, speed: u32, floor: i32, cacti: &[i32], coins: &[i32]) -> Self {
        let y = floor - ENTITY_SIZE;
        Self::new(
            index,
            speed,
            floor,
            cacti.iter().map(|&x| Obstacle::new(x, y)).collect(),
            coins.iter().map(|&x| Coin::new(x, y)).collect(),
        )
    }

    /// Delay between ticks while this level is active
    pub fn tick_delay_ms(&self) -> u64 {
        BASE_TICK_DELAY_MS.saturating_sub(u64::from(self.speed) * SPEED_DELAY_STEP_MS)
    }

    /// Obstacles and coins, in declaration order
    pub fn entities(&self) -> impl Iterator<Item = Entity<'_>> {
        self.obstacles
            .iter()
            .map(Entity::Obstacle)
            .chain(self.coins.iter().map(Entity::Coin))
    }
}

/// The three levels of the device build
pub fn standard_levels() -> Vec<Level> {
    vec![
        Level::on_floor(0, 2, FLOOR_LINES[0], &[100, 200], &[80, 180]),
        Level::on_floor(1, 3, FLOOR_LINES[1], &[30, 170, 200], &[60, 140, 210]),
        Level::on_floor(2, 4, FLOOR_LINES[2], &[30, 170, 200, 220], &[70, 130, 190, 220]),
    ]
}

/// A level change produced by [`LevelManager::check_progression`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelAdvance {
    pub from: usize,
    pub to: usize,
    /// Where the player stood before being moved to the new level
    pub footprint: Body,
}

/// Ordered level table plus the progression rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelManager {
    levels: Vec<Level>,
    field_width: i32,
}

impl Default for LevelManager {
    fn default() -> Self {
        Self::new(standard_levels())
    }
}

impl LevelManager {
    pub fn new(levels: Vec<Level>) -> Self {
        Self {
            levels,
            field_width: FIELD_WIDTH,
        }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn get(&self, index: usize) -> Result<&Level, SimError> {
        let count = self.levels.len();
        self.levels
            .get(index)
            .ok_or(SimError::InvalidLevelIndex { index, count })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Level, SimError> {
        let count = self.levels.len();
        self.levels
            .get_mut(index)
            .ok_or(SimError::InvalidLevelIndex { index, count })
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.levels.len()
    }

    /// True once the player's box reaches the right edge of the field
    pub fn at_right_edge(&self, player: &Player) -> bool {
        player.body.pos.x >= self.field_width - player.body.width()
    }

    /// Move the player one level forward if it reached the right edge.
    ///
    /// At the last level this is a no-op: there is no successor.
    pub fn check_progression(&self, player: &mut Player) -> Result<Option<LevelAdvance>, SimError> {
        // Validates the current index even when nothing happens
        self.get(player.level)?;

        if !self.at_right_edge(player) || self.is_last(player.level) {
            return Ok(None);
        }

        let from = player.level;
        let to = from + 1;
        let next = self.get(to)?;
        let footprint = player.body;

        player.level = to;
        player.reset(next.floor);

        Ok(Some(LevelAdvance {
            from,
            to,
            footprint,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::JumpState;

    #[test]
    fn test_standard_layout() {
        let levels = standard_levels();
        assert_eq!(levels.len(), 3);
        assert_eq!(levels[0].obstacles.len(), 2);
        assert_eq!(levels[1].coins.len(), 3);
        assert_eq!(levels[2].obstacles.len(), 4);

        let total_coins: usize = levels.iter().map(|l| l.coins.len()).sum();
        assert!(total_coins as u32 * COIN_REWARD >= VICTORY_SCORE);

        for level in &levels {
            for entity in level.entities() {
                assert_eq!(entity.body().bottom(), level.floor);
            }
        }
    }

    #[test]
    fn test_tick_delay_shrinks_with_speed() {
        let levels = standard_levels();
        assert_eq!(levels[0].tick_delay_ms(), 80);
        assert_eq!(levels[1].tick_delay_ms(), 70);
        assert_eq!(levels[2].tick_delay_ms(), 60);
    }

    #[test]
    fn test_progression_moves_one_level() {
        let manager = LevelManager::default();
        let mut player = Player::new(FLOOR_LINES[0]);
        player.body.pos.x = FIELD_WIDTH - ENTITY_SIZE;
        player.jump = JumpState::Airborne;

        let advance = manager.check_progression(&mut player).unwrap();
        let advance = advance.expect("should advance");
        assert_eq!((advance.from, advance.to), (0, 1));
        assert_eq!(advance.footprint.pos.x, FIELD_WIDTH - ENTITY_SIZE);
        assert_eq!(player.level, 1);
        assert_eq!(player.body.pos.x, 0);
        assert_eq!(player.body.pos.y, FLOOR_LINES[1] - ENTITY_SIZE);
        assert_eq!(player.jump, JumpState::Grounded);
    }

    #[test]
    fn test_no_progression_before_edge() {
        let manager = LevelManager::default();
        let mut player = Player::new(FLOOR_LINES[0]);
        player.body.pos.x = FIELD_WIDTH - ENTITY_SIZE - 1;

        assert_eq!(manager.check_progression(&mut player), Ok(None));
        assert_eq!(player.level, 0);
    }

    #[test]
    fn test_last_level_is_terminal_for_progression() {
        let manager = LevelManager::default();
        let mut player = Player::new(FLOOR_LINES[2]);
        player.level = 2;
        player.body.pos.x = FIELD_WIDTH - ENTITY_SIZE;

        assert_eq!(manager.check_progression(&mut player), Ok(None));
        assert_eq!(player.level, 2);
        assert_eq!(player.body.pos.x, FIELD_WIDTH - ENTITY_SIZE);
    }

    #[test]
    fn test_invalid_level_index() {
        let manager = LevelManager::default();
        let mut player = Player::new(FLOOR_LINES[0]);
        player.level = 7;

        assert_eq!(
            manager.check_progression(&mut player),
            Err(SimError::InvalidLevelIndex { index: 7, count: 3 })
        );
        assert!(manager.get(3).is_err());
    }
}
