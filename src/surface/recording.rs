//! In-memory draw surface that records every call
//!
//! Used by the headless driver and by tests to inspect what a frame drew.

use glam::Vec2;
use serde::Serialize;

use super::{DrawSurface, RectStyle, TextAlign};
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Bitmap {
        asset: u32,
        src: Option<Rect>,
        pos: Vec2,
    },
    Rect {
        rect: Rect,
        style: RectStyle,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: u32,
        width: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        align: TextAlign,
    },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Drop recorded commands (call between frames)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of bitmap draws using the given asset id
    pub fn bitmap_count(&self, asset: u32) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Bitmap { asset: a, .. } if *a == asset))
            .count()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn draw_bitmap(&mut self, asset: u32, src: Option<Rect>, pos: Vec2) {
        self.commands.push(DrawCommand::Bitmap { asset, src, pos });
    }

    fn draw_rect(&mut self, rect: Rect, style: RectStyle) {
        self.commands.push(DrawCommand::Rect { rect, style });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: u32, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size,
            align,
        });
    }
}
