//! Runtime settings
//!
//! Read from a JSON file named by `DINO_SETTINGS`. Level layouts are not
//! configurable; these only control how a session is driven.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Environment variable holding the settings file path
pub const SETTINGS_ENV: &str = "DINO_SETTINGS";

/// Where jump input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Button held on the listed ticks
    Scripted(Vec<u64>),
    /// Demo mode: the autopilot decides
    Autopilot,
    /// Button never pressed
    Idle,
}

/// Session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play buzzer cues
    pub sound: bool,
    /// Let the autopilot press the button when no script is given
    pub autopilot: bool,
    /// How long the title and terminal screens stay up
    pub screen_hold_ms: u64,
    /// Sleep between ticks like the device does
    pub realtime: bool,
    /// Stop a session that has not finished after this many ticks
    pub max_ticks: Option<u64>,
    /// Ticks (1-based) on which the button is held
    pub jump_script: Vec<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            autopilot: true,
            screen_hold_ms: 3000,
            realtime: false,
            max_ticks: Some(10_000),
            jump_script: Vec::new(),
        }
    }
}

impl Settings {
    pub fn input_mode(&self) -> InputMode {
        if !self.jump_script.is_empty() {
            InputMode::Scripted(self.jump_script.clone())
        } else if self.autopilot {
            InputMode::Autopilot
        } else {
            InputMode::Idle
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("parsing settings in {}", path.display()))
    }

    /// Settings from `DINO_SETTINGS`, or defaults if unset or unreadable
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", Path::new(&path).display());
                settings
            }
            Err(err) => {
                log::warn!("{err:#}; using default settings");
                Self::default()
            }
        }
    }
}
