//! Fixed-step simulation tick
//!
//! One call advances the session by exactly one step:
//! jump sample -> gravity -> auto-scroll -> collisions -> level progression
//! -> terminal check (victory before defeat).

use super::collision::resolve_collisions;
use super::error::SimError;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input for a single tick, sampled once at the start of the tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump button held down
    pub jump: bool,
}

impl TickInput {
    pub fn jump() -> Self {
        Self { jump: true }
    }
}

/// Gap (px) between player and cactus at which the autopilot jumps.
///
/// A jump clears a 32 px cactus when it starts no more than this far away.
pub const AUTOPILOT_JUMP_WINDOW: i32 = 16;

/// Demo-mode input: jump when the next active cactus is inside the window.
///
/// A cactus the player already stands against (negative gap, e.g. right
/// after a reset) also triggers a jump.
pub fn autopilot(state: &GameState) -> TickInput {
    let Ok(level) = state.current_level() else {
        return TickInput::default();
    };
    let player = &state.player.body;

    let nearest_gap = level
        .obstacles
        .iter()
        .filter(|o| o.is_active() && o.body.right() > player.left())
        .map(|o| o.body.left() - player.right())
        .min();

    TickInput {
        jump: !state.player.is_airborne()
            && nearest_gap.is_some_and(|gap| gap <= AUTOPILOT_JUMP_WINDOW),
    }
}

/// Advance the session by one tick. Does nothing once the session is over.
///
/// Errors only on a broken level table (player on a level that does not exist).
pub fn tick(state: &mut GameState, input: &TickInput) -> Result<(), SimError> {
    if state.phase.is_terminal() {
        return Ok(());
    }

    state.events.clear();
    state.time_ticks += 1;

    let level_index = state.player.level;
    let floor = state.levels.get(level_index)?.floor;

    // Held button cannot queue jumps: jump is a no-op while airborne
    if input.jump && state.physics.jump(&mut state.player) {
        log::debug!(
            "tick {}: jump at x={}",
            state.time_ticks,
            state.player.body.pos.x
        );
    }

    state.physics.advance(&mut state.player, floor);
    state.physics.advance_forward(&mut state.player);
    state.player.toggle_frame();

    // Collisions against the current level only
    let level = state.levels.get_mut(level_index)?;
    let outcome = resolve_collisions(&mut state.player, level);

    if let Some(obstacle) = outcome.obstacle_hit {
        state.lives = state.lives.saturating_sub(1);
        log::debug!(
            "tick {}: hit cactus {} on level {}, lives {}",
            state.time_ticks,
            obstacle,
            level_index,
            state.lives
        );
        state.events.push(GameEvent::ObstacleHit {
            level: level_index,
            obstacle,
            lives: state.lives,
        });
    }

    for (coin, footprint) in outcome.coins {
        state.score = state.score.saturating_add(COIN_REWARD);
        log::debug!(
            "tick {}: coin {} on level {}, score {}",
            state.time_ticks,
            coin,
            level_index,
            state.score
        );
        state.events.push(GameEvent::CoinCollected {
            level: level_index,
            coin,
            footprint,
            score: state.score,
        });
    }

    if let Some(advance) = state.levels.check_progression(&mut state.player)? {
        log::info!("Level {} -> {}", advance.from + 1, advance.to + 1);
        state.events.push(GameEvent::LevelAdvanced {
            from: advance.from,
            to: advance.to,
            footprint: advance.footprint,
        });
    }

    // Victory wins a tie with defeat
    if state.score >= VICTORY_SCORE {
        state.phase = GamePhase::Victory;
        state.events.push(GameEvent::Victory);
        log::info!(
            "Victory after {} ticks (score {}, lives {})",
            state.time_ticks,
            state.score,
            state.lives
        );
    } else if state.lives == 0 {
        state.phase = GamePhase::Defeat;
        state.events.push(GameEvent::Defeat);
        log::info!(
            "Defeat after {} ticks (score {})",
            state.time_ticks,
            state.score
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Level;

    const FLOOR: i32 = 260;

    fn session(cacti: &[i32], coins: &[i32]) -> GameState {
        GameState::with_levels(vec![Level::on_floor(0, 2, FLOOR, cacti, coins)]).unwrap()
    }

    #[test]
    fn test_tick_runs_forward() {
        let mut state = GameState::new();
        tick(&mut state, &TickInput::default()).unwrap();

        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.player.body.pos.x, RUN_STEP);
        assert_eq!(state.player.frame, 1);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_held_jump_does_not_rejump() {
        let mut state = session(&[], &[]);
        tick(&mut state, &TickInput::jump()).unwrap();
        let y_after_first = state.player.body.pos.y;
        assert!(state.player.is_airborne());
        // Jump, one gravity step, one run step
        assert_eq!(y_after_first, FLOOR - ENTITY_SIZE - JUMP_HEIGHT + FALL_SPEED);
        assert_eq!(state.player.body.pos.x, JUMP_BOOST + RUN_STEP);

        // Still held: only gravity applies
        tick(&mut state, &TickInput::jump()).unwrap();
        assert_eq!(state.player.body.pos.y, y_after_first + FALL_SPEED);
        assert_eq!(state.player.body.pos.x, JUMP_BOOST + 2 * RUN_STEP);
    }

    #[test]
    fn test_one_life_per_tick() {
        let mut state = session(&[20, 30], &[]);
        tick(&mut state, &TickInput::default()).unwrap();

        assert_eq!(state.lives, 2);
        assert_eq!(state.player.body.pos.x, 0);
        let hits = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::ObstacleHit { .. }))
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_victory_beats_defeat() {
        // Last life lost and the reset lands on the final coin
        let mut state = session(&[30], &[10]);
        state.lives = 1;
        state.score = VICTORY_SCORE - COIN_REWARD;

        tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(state.lives, 0);
        assert_eq!(state.score, VICTORY_SCORE);
        assert_eq!(state.phase, GamePhase::Victory);
        assert!(state.events.contains(&GameEvent::Victory));
        assert!(!state.events.contains(&GameEvent::Defeat));
    }

    #[test]
    fn test_terminal_state_freezes() {
        let mut state = session(&[20], &[]);
        state.lives = 1;
        tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(state.phase, GamePhase::Defeat);

        let ticks = state.time_ticks;
        let pos = state.player.body.pos;
        tick(&mut state, &TickInput::jump()).unwrap();
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.player.body.pos, pos);
        assert_eq!(state.phase, GamePhase::Defeat);
    }

    #[test]
    fn test_autopilot_jumps_inside_window() {
        let mut state = session(&[100], &[]);
        state.player.body.pos.x = 100 - ENTITY_SIZE - AUTOPILOT_JUMP_WINDOW;
        assert!(autopilot(&state).jump);

        state.player.body.pos.x = 100 - ENTITY_SIZE - AUTOPILOT_JUMP_WINDOW - 1;
        assert!(!autopilot(&state).jump);

        // Already past the cactus
        state.player.body.pos.x = 140;
        assert!(!autopilot(&state).jump);
    }

    #[test]
    fn test_autopilot_jumps_off_a_reset_next_to_cactus() {
        let mut state = session(&[30], &[]);
        assert!(autopilot(&state).jump);

        let input = autopilot(&state);
        tick(&mut state, &input).unwrap();
        assert_eq!(state.lives, 3);
        assert!(state.player.is_airborne());
    }

    #[test]
    fn test_autopilot_clears_cactus() {
        let mut state = session(&[100], &[]);
        for _ in 0..20 {
            let input = autopilot(&state);
            tick(&mut state, &input).unwrap();
        }
        assert_eq!(state.lives, 3);
        assert!(state.player.body.pos.x > 100);
    }
}
