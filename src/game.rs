//! Session driver
//!
//! Owns one [`GameState`] and its collaborators and runs the device loop:
//! title screen, then one tick per iteration (sample button, simulate, play
//! cues, repaint, wait), then the victory or defeat screen. A finished
//! session is not restarted.

use serde::{Deserialize, Serialize};

use crate::audio::{AudioCue, play_events};
use crate::platform::{Delay, InputSource};
use crate::renderer::{Renderer, ScenePainter};
use crate::sim::{GamePhase, GameState, SimError, TickInput, autopilot, tick};

/// Final numbers of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// `Running` if the session was cut off by the tick limit
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    pub level: usize,
    pub ticks: u64,
}

pub struct Game<R, A, I, D> {
    state: GameState,
    painter: ScenePainter,
    renderer: R,
    audio: A,
    input: I,
    delay: D,
    autopilot: bool,
    screen_hold_ms: u64,
    max_ticks: Option<u64>,
}

impl<R, A, I, D> Game<R, A, I, D>
where
    R: Renderer,
    A: AudioCue,
    I: InputSource,
    D: Delay,
{
    pub fn new(state: GameState, renderer: R, audio: A, input: I, delay: D) -> Self {
        Self {
            state,
            painter: ScenePainter::new(),
            renderer,
            audio,
            input,
            delay,
            autopilot: false,
            screen_hold_ms: 3000,
            max_ticks: None,
        }
    }

    /// Let the autopilot press the button as well
    pub fn with_autopilot(mut self, enabled: bool) -> Self {
        self.autopilot = enabled;
        self
    }

    pub fn with_screen_hold(mut self, ms: u64) -> Self {
        self.screen_hold_ms = ms;
        self
    }

    pub fn with_max_ticks(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub fn outcome(&self) -> SessionOutcome {
        SessionOutcome {
            phase: self.state.phase,
            score: self.state.score,
            lives: self.state.lives,
            level: self.state.level_index(),
            ticks: self.state.time_ticks,
        }
    }

    /// Title screen, hold, then the initial play-field
    pub fn start(&mut self) {
        log::info!("Session starting ({} levels)", self.state.levels.len());
        self.painter.start_screen(&mut self.renderer);
        self.delay.delay_ms(self.screen_hold_ms);
        self.painter.playfield(&mut self.renderer, &self.state);
    }

    /// Sample the button once for this tick
    fn sample_input(&mut self) -> TickInput {
        let pressed = self.input.is_jump_asserted();
        let assisted = self.autopilot && autopilot(&self.state).jump;
        TickInput {
            jump: pressed || assisted,
        }
    }

    /// Run one tick. Returns true while the session keeps running.
    pub fn step(&mut self) -> Result<bool, SimError> {
        if !self.state.is_running() {
            return Ok(false);
        }

        let input = self.sample_input();
        tick(&mut self.state, &input)?;

        let events = self.state.take_events();
        play_events(&mut self.audio, &events);
        self.painter.frame(&mut self.renderer, &self.state, &events);

        if self.state.is_running() {
            self.delay.delay_ms(self.state.tick_delay_ms()?);
        }
        Ok(self.state.is_running())
    }

    /// Terminal screen and hold. Nothing to show if the session is unfinished.
    pub fn finish(&mut self) {
        if !self.state.phase.is_terminal() {
            return;
        }
        self.painter.terminal_screen(&mut self.renderer, self.state.phase);
        self.delay.delay_ms(self.screen_hold_ms);
    }

    /// Whole session: start, tick until a terminal state (or the tick limit), finish
    pub fn run(&mut self) -> Result<SessionOutcome, SimError> {
        self.start();

        while self.state.is_running() {
            if self
                .max_ticks
                .is_some_and(|limit| self.state.time_ticks >= limit)
            {
                log::warn!("Session stopped at the {} tick limit", self.state.time_ticks);
                break;
            }
            self.step()?;
        }

        self.finish();
        let outcome = self.outcome();
        log::info!(
            "Session over: {:?}, score {}, lives {}, level {}, {} ticks",
            outcome.phase,
            outcome.score,
            outcome.lives,
            outcome.level + 1,
            outcome.ticks
        );
        Ok(outcome)
    }
}
