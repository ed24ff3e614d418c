//! Scene painter: reflects session state onto a [`Renderer`]
//!
//! The panel has no back buffer, so every frame erases the player's previous
//! box before drawing it again, and collected coins are erased where they
//! stood.

use super::{Color, Renderer};
use crate::consts::*;
use crate::sim::{Body, Entity, GameEvent, GamePhase, GameState, SpriteId};

/// HUD strip geometry (bottom of the panel)
const HUD_Y: i32 = FIELD_HEIGHT - 20;
const HUD_HEIGHT: i32 = 16;
const HUD_TEXT_Y: i32 = HUD_Y + 2;
const LIFE_BOX_X: i32 = 60;
const LIFE_BOX_SIZE: i32 = 10;
const LIFE_BOX_PITCH: i32 = 12;
const SCORE_X: i32 = 140;

/// Artwork position on the title and terminal screens
const ART_X: i32 = FIELD_WIDTH / 2 - 32;

#[derive(Debug, Default)]
pub struct ScenePainter {
    /// Where the player was drawn last frame
    last_player: Option<Body>,
}

impl ScenePainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title screen shown before the session starts
    pub fn start_screen<R: Renderer + ?Sized>(&mut self, r: &mut R) {
        r.fill_screen(Color::WHITE);
        r.draw_text(FIELD_WIDTH / 2 - 80, 70, 6, Color::RED, "DINO");
        draw_art(r, ART_X, 130, SpriteId::Title);
    }

    /// Full redraw of the play-field: floors, every level's entities, HUD
    pub fn playfield<R: Renderer + ?Sized>(&mut self, r: &mut R, state: &GameState) {
        r.fill_screen(Color::BLACK);
        self.floors(r);
        for level in state.levels.levels() {
            for entity in level.entities() {
                draw_entity(r, entity);
            }
        }
        self.hud(r, state);
        self.last_player = None;
    }

    /// Incremental update after a tick
    pub fn frame<R: Renderer + ?Sized>(&mut self, r: &mut R, state: &GameState, events: &[GameEvent]) {
        if let Some(last) = self.last_player.take() {
            r.clear_rect(&last);
        }
        for event in events {
            match event {
                GameEvent::CoinCollected { footprint, .. }
                | GameEvent::LevelAdvanced { footprint, .. } => r.clear_rect(footprint),
                _ => {}
            }
        }

        draw_entity(r, Entity::Player(&state.player));
        self.last_player = Some(state.player.body);

        self.floors(r);
        self.hud(r, state);
    }

    /// Victory or defeat screen. Does nothing while the session runs.
    pub fn terminal_screen<R: Renderer + ?Sized>(&mut self, r: &mut R, phase: GamePhase) {
        let (color, x, lines) = match phase {
            GamePhase::Running => return,
            GamePhase::Victory => (Color::GREEN, (FIELD_WIDTH - 3 * 30) / 2, ["YOU", "WIN"]),
            GamePhase::Defeat => (Color::RED, FIELD_WIDTH / 2 - 60, ["GAME", "OVER"]),
        };
        r.fill_screen(Color::BLACK);
        r.draw_text(x, FIELD_HEIGHT / 2 - 50, 5, color, lines[0]);
        r.draw_text(x, FIELD_HEIGHT / 2, 5, color, lines[1]);
        draw_art(r, ART_X, FIELD_HEIGHT / 2 + 60, SpriteId::Finale);
        self.last_player = None;
    }

    fn floors<R: Renderer + ?Sized>(&self, r: &mut R) {
        for y in FLOOR_LINES {
            r.draw_line(0, y, FIELD_WIDTH, y, Color::WHITE);
        }
    }

    fn hud<R: Renderer + ?Sized>(&self, r: &mut R, state: &GameState) {
        r.fill_rect(0, HUD_Y, FIELD_WIDTH, HUD_HEIGHT, Color::DARK_GREEN);
        r.draw_text(5, HUD_TEXT_Y, 1, Color::WHITE, "Lives: ");
        for i in 0..START_LIVES {
            let x = LIFE_BOX_X + i32::from(i) * LIFE_BOX_PITCH;
            if i < state.lives {
                r.fill_rect(x, HUD_TEXT_Y, LIFE_BOX_SIZE, LIFE_BOX_SIZE, Color::RED);
            } else {
                r.draw_rect(x, HUD_TEXT_Y, LIFE_BOX_SIZE, LIFE_BOX_SIZE, Color::WHITE);
            }
        }
        r.draw_text(SCORE_X, HUD_TEXT_Y, 1, Color::WHITE, &format!("Score: {}", state.score));
    }
}

fn draw_entity<R: Renderer + ?Sized>(r: &mut R, entity: Entity<'_>) {
    if let Some(sprite) = entity.sprite() {
        let body = entity.body();
        r.draw_sprite(body.left(), body.top(), sprite, body.width(), body.height());
    }
}

fn draw_art<R: Renderer + ?Sized>(r: &mut R, x: i32, y: i32, sprite: SpriteId) {
    let size = sprite.size();
    r.draw_sprite(x, y, sprite, size.x, size.y);
}
