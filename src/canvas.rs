// src/canvas.rs

use crate::geometry::Point2;

/// Straight RGBA, components in `0.0..=1.0`.
pub type Color = [f32; 4];

pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

pub mod palette {
    use super::{rgb, Color};

    pub const BACKGROUND: Color = rgb(0, 0, 0);
    pub const CONTROL_STRIP: Color = rgb(115, 70, 120);
    pub const GRID: Color = rgb(55, 55, 55);
    pub const OCCLUDER: Color = rgb(255, 255, 255);
    pub const HIGHLIGHT: Color = rgb(255, 155, 0);
    pub const PENDING: Color = rgb(0, 200, 255);
    pub const LIT: Color = rgb(235, 225, 170);
    pub const SHADOW: Color = rgb(0, 0, 0);
    pub const LIGHT: Color = rgb(255, 255, 80);
}

/// Where a frame's shapes go. Implementations decide how to rasterize.
pub trait Canvas {
    fn fill_rect(&mut self, min: Point2, max: Point2, color: Color);
    fn line(&mut self, from: Point2, to: Point2, color: Color);
    /// Outline only.
    fn circle(&mut self, center: Point2, radius: f32, color: Color);
    fn fill_triangle(&mut self, a: Point2, b: Point2, c: Point2, color: Color);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect { min: Point2, max: Point2, color: Color },
    Line { from: Point2, to: Point2, color: Color },
    Circle { center: Point2, radius: f32, color: Color },
    FillTriangle { points: [Point2; 3], color: Color },
}

/// Keeps every command in submission order.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, min: Point2, max: Point2, color: Color) {
        self.commands.push(DrawCommand::FillRect { min, max, color });
    }

    fn line(&mut self, from: Point2, to: Point2, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn circle(&mut self, center: Point2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn fill_triangle(&mut self, a: Point2, b: Point2, c: Point2, color: Color) {
        self.commands.push(DrawCommand::FillTriangle { points: [a, b, c], color });
    }
}
