//! Dino Runner entry point
//!
//! Runs one headless session on the host: draw calls are recorded, buzzer
//! cues go to the log. Set `RUST_LOG=debug` to follow the ticks and
//! `DINO_SETTINGS=<file.json>` to change how the session is driven.

use dino_runner::audio::AudioManager;
use dino_runner::platform::{Delay, InputSource, NoDelay, NoInput, ScriptedInput, ThreadDelay};
use dino_runner::renderer::CommandBuffer;
use dino_runner::settings::InputMode;
use dino_runner::sim::GameState;
use dino_runner::{Game, SessionOutcome, Settings};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Dino Runner (host) starting...");

    let settings = Settings::load();
    let outcome = match settings.input_mode() {
        InputMode::Scripted(ticks) => run_with(&settings, ScriptedInput::new(ticks), false)?,
        InputMode::Autopilot => run_with(&settings, NoInput, true)?,
        InputMode::Idle => run_with(&settings, NoInput, false)?,
    };

    println!(
        "{:?}: score {}, lives {}, level {}, {} ticks",
        outcome.phase,
        outcome.score,
        outcome.lives,
        outcome.level + 1,
        outcome.ticks
    );
    Ok(())
}

fn run_with<I: InputSource>(
    settings: &Settings,
    input: I,
    autopilot: bool,
) -> anyhow::Result<SessionOutcome> {
    if settings.realtime {
        session(settings, input, ThreadDelay, autopilot)
    } else {
        session(settings, input, NoDelay::default(), autopilot)
    }
}

fn session<I: InputSource, D: Delay>(
    settings: &Settings,
    input: I,
    delay: D,
    autopilot: bool,
) -> anyhow::Result<SessionOutcome> {
    let mut game = Game::new(
        GameState::new(),
        CommandBuffer::counting(),
        AudioManager::new(!settings.sound),
        input,
        delay,
    )
    .with_autopilot(autopilot)
    .with_screen_hold(settings.screen_hold_ms)
    .with_max_ticks(settings.max_ticks);

    let outcome = game.run()?;
    log::debug!("{} draw calls recorded", game.renderer().total());
    Ok(outcome)
}
