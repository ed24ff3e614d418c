//! Jump and gravity integration for the player
//!
//! Integer pixel physics, one step per tick. The player is either grounded
//! (resting exactly on the floor) or airborne (falling by a fixed increment
//! until it reaches the floor again).

use serde::{Deserialize, Serialize};

use super::entity::{JumpState, Player};
use crate::consts::*;

/// Fixed movement parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicsEngine {
    /// Upward displacement of a jump
    pub jump_height: i32,
    /// Forward displacement applied together with a jump
    pub jump_boost: i32,
    /// Auto-scroll step per tick
    pub run_step: i32,
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self {
            jump_height: JUMP_HEIGHT,
            jump_boost: JUMP_BOOST,
            run_step: RUN_STEP,
        }
    }
}

impl PhysicsEngine {
    /// Apply gravity for one tick.
    ///
    /// Falling stops exactly at `floor - height`; an increment that would
    /// pass the floor is cut short and the player lands in the same tick.
    pub fn advance(&self, player: &mut Player, floor: i32) {
        let rest = player.rest_y(floor);
        if player.is_airborne() && player.body.pos.y < rest {
            player.body.pos.y = (player.body.pos.y + player.fall_speed).min(rest);
            if player.body.pos.y == rest {
                player.jump = JumpState::Grounded;
            }
        } else {
            player.jump = JumpState::Grounded;
            player.body.pos.y = rest;
        }
    }

    /// Start a jump. No-op while already airborne.
    ///
    /// Returns true if the jump started.
    pub fn jump(&self, player: &mut Player) -> bool {
        if player.is_airborne() {
            return false;
        }
        player.jump = JumpState::Airborne;
        player.body.pos.y -= self.jump_height;
        player.body.pos.x = player.body.pos.x.saturating_add(self.jump_boost);
        true
    }

    /// Constant auto-scroll, applied every tick regardless of jump state
    pub fn advance_forward(&self, player: &mut Player) {
        player.body.pos.x = player.body.pos.x.saturating_add(self.run_step);
    }
}
