//! Collision detection and resolution
//!
//! Overlap is a strict AABB test: boxes that only share an edge do not
//! collide. Resolution runs against the current level only:
//! 1. The first active obstacle hit resets the player. Later obstacles are
//!    not checked this tick since the player has already moved.
//! 2. Every uncollected coin the player overlaps is collected.

use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity, Player};
use super::level::Level;

/// Strict axis-aligned box intersection. Symmetric; empty boxes never overlap.
#[inline]
pub fn overlaps(a: &Body, b: &Body) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.right() > b.left() && a.left() < b.right() && a.bottom() > b.top() && a.top() < b.bottom()
}

/// Collision test between two entities. Entities out of play never collide.
pub fn entities_collide(a: Entity<'_>, b: Entity<'_>) -> bool {
    a.is_collidable() && b.is_collidable() && overlaps(a.body(), b.body())
}

/// What happened during one resolution pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionOutcome {
    /// Obstacle that was hit, if any (at most one per tick)
    pub obstacle_hit: Option<usize>,
    /// Collected coins with the box each occupied before it was parked
    pub coins: Vec<(usize, Body)>,
}

impl CollisionOutcome {
    pub fn is_empty(&self) -> bool {
        self.obstacle_hit.is_none() && self.coins.is_empty()
    }
}

/// Resolve player overlaps against a level's entities.
///
/// Obstacle hits reset the player to the level start before coins are
/// checked, so coins are tested against the reset position.
pub fn resolve_collisions(player: &mut Player, level: &mut Level) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();

    let hit = level
        .obstacles
        .iter()
        .position(|o| entities_collide(Entity::Player(player), Entity::Obstacle(o)));
    if let Some(index) = hit {
        player.reset(level.floor);
        outcome.obstacle_hit = Some(index);
    }

    for (index, coin) in level.coins.iter_mut().enumerate() {
        if !entities_collide(Entity::Player(player), Entity::Coin(coin)) {
            continue;
        }
        if let Some(footprint) = coin.collect() {
            outcome.coins.push((index, footprint));
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Coin, Obstacle};

    const FLOOR: i32 = 260;

    fn level(obstacles: &[i32], coins: &[i32]) -> Level {
        Level::new(
            0,
            2,
            FLOOR,
            obstacles.iter().map(|&x| Obstacle::new(x, FLOOR - 32)).collect(),
            coins.iter().map(|&x| Coin::new(x, FLOOR - 32)).collect(),
        )
    }

    fn player_at(x: i32) -> Player {
        let mut player = Player::new(FLOOR);
        player.body.pos.x = x;
        player
    }

    #[test]
    fn test_overlap_basic() {
        let a = Body::new(0, 0, 32, 32);
        assert!(overlaps(&a, &Body::new(31, 31, 32, 32)));
        assert!(overlaps(&a, &Body::new(-31, 10, 32, 32)));
        assert!(!overlaps(&a, &Body::new(40, 0, 32, 32)));
        assert!(!overlaps(&a, &Body::new(0, 33, 32, 32)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Body::new(0, 0, 32, 32);
        assert!(!overlaps(&a, &Body::new(32, 0, 32, 32)));
        assert!(!overlaps(&a, &Body::new(0, 32, 32, 32)));
        assert!(!overlaps(&a, &Body::new(-32, -32, 32, 32)));
    }

    #[test]
    fn test_zero_area_never_overlaps() {
        let flat = Body::new(10, 10, 0, 32);
        assert!(!overlaps(&flat, &flat));
        assert!(!overlaps(&flat, &Body::new(0, 0, 64, 64)));
        assert!(!overlaps(&Body::new(0, 0, 64, 64), &flat));
    }

    #[test]
    fn test_single_obstacle_hit_per_pass() {
        // Player overlaps both cacti at once
        let mut level = level(&[20, 30], &[]);
        let mut player = player_at(10);

        let outcome = resolve_collisions(&mut player, &mut level);
        assert_eq!(outcome.obstacle_hit, Some(0));
        assert_eq!(player.body.pos.x, 0);
        assert_eq!(player.body.pos.y, FLOOR - 32);
    }

    #[test]
    fn test_inactive_obstacle_ignored() {
        let mut level = level(&[20], &[]);
        level.obstacles[0].deactivate();
        let mut player = player_at(10);

        let outcome = resolve_collisions(&mut player, &mut level);
        assert!(outcome.is_empty());
        assert_eq!(player.body.pos.x, 10);
    }

    #[test]
    fn test_all_overlapping_coins_collected() {
        let mut level = level(&[], &[20, 40, 100]);
        let mut player = player_at(10);

        let outcome = resolve_collisions(&mut player, &mut level);
        let indices: Vec<usize> = outcome.coins.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(outcome.coins[1].1, Body::square(40, FLOOR - 32));
        assert!(level.coins[0].is_collected());
        assert!(level.coins[1].is_collected());
        assert!(!level.coins[2].is_collected());

        // Already collected coins are not counted again
        let outcome = resolve_collisions(&mut player, &mut level);
        assert!(outcome.coins.is_empty());
    }

    #[test]
    fn test_coins_checked_after_reset() {
        // Coin at the level start, cactus ahead of the player
        let mut level = level(&[120], &[10, 100]);
        let mut player = player_at(100);

        let outcome = resolve_collisions(&mut player, &mut level);
        assert_eq!(outcome.obstacle_hit, Some(0));
        // Only the coin near the reset position is picked up
        assert_eq!(outcome.coins.len(), 1);
        assert_eq!(outcome.coins[0].0, 0);
        assert!(!level.coins[1].is_collected());
    }

    #[test]
    fn test_airborne_player_clears_cactus() {
        let mut level = level(&[100], &[]);
        let mut player = player_at(90);
        player.body.pos.y = FLOOR - 32 - 40;

        let outcome = resolve_collisions(&mut player, &mut level);
        assert!(outcome.is_empty());
    }
}
