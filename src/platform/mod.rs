//! Platform abstraction layer
//!
//! Handles device/host differences for:
//! - Jump button sampling (polled once per tick, level-triggered)
//! - Tick pacing and screen holds

use std::collections::BTreeSet;
use std::time::Duration;

/// Jump button
pub trait InputSource {
    /// Whether the button is held right now
    fn is_jump_asserted(&mut self) -> bool;
}

/// Blocking pause between ticks
pub trait Delay {
    fn delay_ms(&mut self, ms: u64);
}

/// Jump held on a fixed set of ticks (1-based tick numbers)
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    held: BTreeSet<u64>,
    sample: u64,
}

impl ScriptedInput {
    pub fn new(held: impl IntoIterator<Item = u64>) -> Self {
        Self {
            held: held.into_iter().collect(),
            sample: 0,
        }
    }
}

impl InputSource for ScriptedInput {
    fn is_jump_asserted(&mut self) -> bool {
        self.sample += 1;
        self.held.contains(&self.sample)
    }
}

/// Button that is never pressed
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn is_jump_asserted(&mut self) -> bool {
        false
    }
}

/// Real-time pacing on the host
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn delay_ms(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

/// Runs as fast as possible, only tallying the time that would have passed
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay {
    pub skipped_ms: u64,
}

impl Delay for NoDelay {
    fn delay_ms(&mut self, ms: u64) {
        self.skipped_ms += ms;
    }
}
