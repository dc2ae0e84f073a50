// File: crates/chartkit-core/src/backend.rs
// Summary: Drawing backend capability traits and a recording backend for headless use.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::color::Rgba;
use crate::geometry::{Gravity, TextBox};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    pub size: f64,
    pub bold: bool,
}

impl FontSpec {
    pub const fn regular(size: f64) -> Self {
        Self { size, bold: false }
    }
    pub const fn bold(size: f64) -> Self {
        Self { size, bold: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Rgba, width: f64) -> Self {
        Self { color, width }
    }
    pub const fn hairline(color: Rgba) -> Self {
        Self { color, width: 1.0 }
    }
}

/// One annotate-style text draw.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRequest<'a> {
    pub text: &'a str,
    pub area: TextBox,
    pub gravity: Gravity,
    pub font: FontSpec,
    pub color: Rgba,
    /// Clockwise degrees around the text's own center.
    pub rotation: f64,
}

/// Font metrics in logical units. All the layout pass needs from a backend.
pub trait TextMetrics {
    fn measure_text(&self, font: &FontSpec, text: &str) -> f64;
    /// Height of a line of capitals at `font`.
    fn cap_height(&self, font: &FontSpec) -> f64;
}

/// Drawing surface. Coordinates are logical; implementations apply the
/// output scale themselves.
pub trait DrawBackend: TextMetrics {
    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &Stroke);
    /// Filled rectangle between two corners, in any order.
    fn draw_rectangle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, fill: Rgba);
    fn draw_circle(&mut self, center: (f64, f64), radius: f64, fill: Rgba);
    fn draw_text(&mut self, request: &TextRequest<'_>);
    /// Encode the surface to `path`; the format follows the extension.
    fn write(&mut self, path: &Path) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Line { from: (f64, f64), to: (f64, f64), stroke: Stroke },
    Rectangle { x1: f64, y1: f64, x2: f64, y2: f64, fill: Rgba },
    Circle { center: (f64, f64), radius: f64, fill: Rgba },
    /// `x`/`y` is the anchored top-left corner of the text run.
    Text { text: String, x: f64, y: f64, gravity: Gravity, font: FontSpec, rotation: f64 },
    Write(PathBuf),
}

/// Backend with fixed, font-free metrics that records every call instead of
/// rasterizing. Text is `0.6 * size` per character wide and `size` tall.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    pub calls: Vec<DrawCall>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl TextMetrics for RecordingBackend {
    fn measure_text(&self, font: &FontSpec, text: &str) -> f64 {
        text.chars().count() as f64 * font.size * 0.6
    }

    fn cap_height(&self, font: &FontSpec) -> f64 {
        font.size
    }
}

impl DrawBackend for RecordingBackend {
    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &Stroke) {
        self.calls.push(DrawCall::Line { from, to, stroke: *stroke });
    }

    fn draw_rectangle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, fill: Rgba) {
        self.calls.push(DrawCall::Rectangle { x1, y1, x2, y2, fill });
    }

    fn draw_circle(&mut self, center: (f64, f64), radius: f64, fill: Rgba) {
        self.calls.push(DrawCall::Circle { center, radius, fill });
    }

    fn draw_text(&mut self, request: &TextRequest<'_>) {
        let w = self.measure_text(&request.font, request.text);
        let h = self.cap_height(&request.font);
        let (x, y) = request.area.anchor(request.gravity, w, h);
        self.calls.push(DrawCall::Text {
            text: request.text.to_string(),
            x,
            y,
            gravity: request.gravity,
            font: request.font,
            rotation: request.rotation,
        });
    }

    fn write(&mut self, path: &Path) -> Result<()> {
        self.calls.push(DrawCall::Write(path.to_path_buf()));
        Ok(())
    }
}
