//! Buzzer cues
//!
//! The simulation never plays sound itself; the driver turns tick events
//! into cues. Each cue is a short table of square-wave tones.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ran into a cactus
    Collision,
    /// Coin picked up
    Coin,
    /// Out of lives
    Defeat,
    /// Score threshold reached
    Victory,
}

/// One buzzer tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub freq_hz: u16,
    pub duration_ms: u16,
    /// Silence after the tone
    pub hold_ms: u16,
}

impl Tone {
    /// Time the buzzer is busy with this tone, silence included
    pub fn length_ms(&self) -> u32 {
        u32::from(self.duration_ms) + u32::from(self.hold_ms)
    }
}

const fn tone(freq_hz: u16, duration_ms: u16, hold_ms: u16) -> Tone {
    Tone {
        freq_hz,
        duration_ms,
        hold_ms,
    }
}

const COLLISION_TONES: [Tone; 1] = [tone(300, 200, 0)];
const COIN_TONES: [Tone; 1] = [tone(1000, 150, 0)];
const DEFEAT_TONES: [Tone; 2] = [tone(500, 800, 100), tone(250, 800, 0)];
/// Rising sweep 400..=1000 Hz
const VICTORY_TONES: [Tone; 7] = [
    tone(400, 80, 100),
    tone(500, 80, 100),
    tone(600, 80, 100),
    tone(700, 80, 100),
    tone(800, 80, 100),
    tone(900, 80, 100),
    tone(1000, 80, 100),
];

impl SoundEffect {
    /// Tone sequence for this cue
    pub fn tones(&self) -> &'static [Tone] {
        match self {
            SoundEffect::Collision => &COLLISION_TONES,
            SoundEffect::Coin => &COIN_TONES,
            SoundEffect::Defeat => &DEFEAT_TONES,
            SoundEffect::Victory => &VICTORY_TONES,
        }
    }

    /// Total length of the tone sequence
    pub fn length_ms(&self) -> u32 {
        self.tones().iter().map(Tone::length_ms).sum()
    }

    /// Cue for a tick event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::ObstacleHit { .. } => Some(SoundEffect::Collision),
            GameEvent::CoinCollected { .. } => Some(SoundEffect::Coin),
            GameEvent::Defeat => Some(SoundEffect::Defeat),
            GameEvent::Victory => Some(SoundEffect::Victory),
            GameEvent::LevelAdvanced { .. } => None,
        }
    }
}

/// Fire-and-forget audio backend
pub trait AudioCue {
    fn play_collision(&mut self);
    fn play_coin(&mut self);
    fn play_defeat(&mut self);
    fn play_victory(&mut self);

    fn play(&mut self, effect: SoundEffect) {
        match effect {
            SoundEffect::Collision => self.play_collision(),
            SoundEffect::Coin => self.play_coin(),
            SoundEffect::Defeat => self.play_defeat(),
            SoundEffect::Victory => self.play_victory(),
        }
    }
}

/// Play the cue of every event, in order
pub fn play_events<A: AudioCue + ?Sized>(audio: &mut A, events: &[GameEvent]) {
    for effect in events.iter().filter_map(SoundEffect::for_event) {
        audio.play(effect);
    }
}

/// Host audio: no buzzer attached, tones go to the log
#[derive(Debug, Default)]
pub struct AudioManager {
    muted: bool,
    cues_played: u32,
    played_ms: u64,
}

impl AudioManager {
    pub fn new(muted: bool) -> Self {
        Self {
            muted,
            cues_played: 0,
            played_ms: 0,
        }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn cues_played(&self) -> u32 {
        self.cues_played
    }

    /// Buzzer time of every cue emitted so far
    pub fn played_ms(&self) -> u64 {
        self.played_ms
    }

    fn emit(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        self.cues_played += 1;
        self.played_ms += u64::from(effect.length_ms());
        for t in effect.tones() {
            log::trace!(
                "buzzer {:?}: {} Hz for {} ms, then {} ms silence",
                effect,
                t.freq_hz,
                t.duration_ms,
                t.hold_ms
            );
        }
    }
}

impl AudioCue for AudioManager {
    fn play_collision(&mut self) {
        self.emit(SoundEffect::Collision);
    }

    fn play_coin(&mut self) {
        self.emit(SoundEffect::Coin);
    }

    fn play_defeat(&mut self) {
        self.emit(SoundEffect::Defeat);
    }

    fn play_victory(&mut self) {
        self.emit(SoundEffect::Victory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Body;

    #[derive(Default)]
    struct Recorder(Vec<SoundEffect>);

    impl AudioCue for Recorder {
        fn play_collision(&mut self) {
            self.0.push(SoundEffect::Collision);
        }
        fn play_coin(&mut self) {
            self.0.push(SoundEffect::Coin);
        }
        fn play_defeat(&mut self) {
            self.0.push(SoundEffect::Defeat);
        }
        fn play_victory(&mut self) {
            self.0.push(SoundEffect::Victory);
        }
    }

    #[test]
    fn test_events_map_to_cues() {
        let events = [
            GameEvent::ObstacleHit {
                level: 0,
                obstacle: 1,
                lives: 2,
            },
            GameEvent::CoinCollected {
                level: 0,
                coin: 0,
                footprint: Body::square(80, 228),
                score: 10,
            },
            GameEvent::LevelAdvanced {
                from: 0,
                to: 1,
                footprint: Body::square(208, 228),
            },
            GameEvent::Victory,
        ];
        let mut audio = Recorder::default();
        play_events(&mut audio, &events);
        assert_eq!(
            audio.0,
            vec![SoundEffect::Collision, SoundEffect::Coin, SoundEffect::Victory]
        );
    }

    #[test]
    fn test_victory_sweep() {
        let tones = SoundEffect::Victory.tones();
        assert_eq!(tones.first().map(|t| t.freq_hz), Some(400));
        assert_eq!(tones.last().map(|t| t.freq_hz), Some(1000));
        assert!(tones.windows(2).all(|w| w[1].freq_hz == w[0].freq_hz + 100));
    }

    #[test]
    fn test_muted_manager_counts_nothing() {
        let mut audio = AudioManager::new(true);
        audio.play(SoundEffect::Coin);
        assert_eq!(audio.cues_played(), 0);

        audio.set_muted(false);
        audio.play(SoundEffect::Coin);
        assert_eq!(audio.cues_played(), 1);
    }

    #[test]
    fn test_gaps_count_toward_cue_length() {
        // Two 800 ms tones with a 100 ms gap
        assert_eq!(SoundEffect::Defeat.length_ms(), 1700);
        assert_eq!(SoundEffect::Victory.length_ms(), 7 * (80 + 100));

        let mut audio = AudioManager::new(false);
        audio.play(SoundEffect::Defeat);
        audio.play(SoundEffect::Coin);
        assert_eq!(audio.played_ms(), 1700 + 150);
    }
}
