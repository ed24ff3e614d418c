//! Headless renderer that records draw calls

use super::{Color, Renderer};
use crate::sim::SpriteId;

/// A recorded draw call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    FillScreen(Color),
    FillRect { x: i32, y: i32, w: i32, h: i32, color: Color },
    DrawRect { x: i32, y: i32, w: i32, h: i32, color: Color },
    Line { x0: i32, y0: i32, x1: i32, y1: i32, color: Color },
    Sprite { x: i32, y: i32, sprite: SpriteId, w: i32, h: i32 },
    Text { x: i32, y: i32, size: u8, color: Color, text: String },
}

/// Collects draw calls instead of sending them to a panel
#[derive(Debug)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
    /// Total commands ever issued (survives `take`)
    total: u64,
    /// Keep the commands, or only count them
    keep: bool,
}

impl Default for CommandBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            total: 0,
            keep: true,
        }
    }

    /// Buffer that only counts draw calls (long headless runs)
    pub fn counting() -> Self {
        Self {
            keep: false,
            ..Self::new()
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Text strings drawn so far, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn push(&mut self, command: DrawCommand) {
        self.total += 1;
        if self.keep {
            self.commands.push(command);
        }
    }
}

impl Renderer for CommandBuffer {
    fn fill_screen(&mut self, color: Color) {
        self.push(DrawCommand::FillScreen(color));
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.push(DrawCommand::DrawRect { x, y, w, h, color });
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.push(DrawCommand::Line { x0, y0, x1, y1, color });
    }

    fn draw_sprite(&mut self, x: i32, y: i32, sprite: SpriteId, w: i32, h: i32) {
        self.push(DrawCommand::Sprite { x, y, sprite, w, h });
    }

    fn draw_text(&mut self, x: i32, y: i32, size: u8, color: Color, text: &str) {
        self.push(DrawCommand::Text {
            x,
            y,
            size,
            color,
            text: text.to_string(),
        });
    }
}
