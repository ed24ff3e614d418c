//! Rendering module
//!
//! The display backend is an external collaborator: it fills rectangles,
//! draws lines, bitmaps and text, and never feeds anything back. The scene
//! painter only reflects state the simulation has already computed.

pub mod commands;
pub mod scene;

pub use commands::{CommandBuffer, DrawCommand};
pub use scene::ScenePainter;

use serde::{Deserialize, Serialize};

use crate::sim::{Body, SpriteId};

/// 16-bit RGB565 panel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    /// HUD strip background
    pub const DARK_GREEN: Color = Color(0x03E0);
}

/// Drawing contract of the display backend
pub trait Renderer {
    fn fill_screen(&mut self, color: Color);
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color);
    fn draw_sprite(&mut self, x: i32, y: i32, sprite: SpriteId, w: i32, h: i32);
    fn draw_text(&mut self, x: i32, y: i32, size: u8, color: Color, text: &str);

    /// Erase a box to the background color
    fn clear_rect(&mut self, body: &Body) {
        self.fill_rect(body.left(), body.top(), body.width(), body.height(), Color::BLACK);
    }
}
