// File: crates/chartkit-skia/src/lib.rs
// Summary: Skia CPU raster backend implementing chartkit-core's DrawBackend.

use std::path::Path;

use anyhow::{anyhow, Result};
use skia_safe as skia;
use tracing::debug;

use chartkit_core::{Canvas, DrawBackend, FontSpec, ImageFormat, RenderOptions, Rgba, Stroke, TextMetrics, TextRequest};

pub mod text;

pub use text::TextShaper;

#[inline]
fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn encoded_format(format: ImageFormat) -> skia::EncodedImageFormat {
    match format {
        ImageFormat::Png => skia::EncodedImageFormat::PNG,
        ImageFormat::Jpeg => skia::EncodedImageFormat::JPEG,
        ImageFormat::Webp => skia::EncodedImageFormat::WEBP,
    }
}

/// Draws onto a CPU raster surface. The canvas matrix carries the logical to
/// device scale, so callers work in chartkit's logical coordinates.
pub struct SkiaBackend {
    surface: skia::Surface,
    shaper: TextShaper,
}

impl SkiaBackend {
    pub fn new(opts: &RenderOptions) -> Result<Self> {
        let (w, h) = (opts.width as i32, opts.height as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
        let scale = Canvas::from_options(opts).scale as f32;
        surface.canvas().scale((scale, scale));
        Ok(Self { surface, shaper: TextShaper::new() })
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Encode the current surface.
    pub fn encode(&mut self, format: ImageFormat) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(encoded_format(format))
            .ok_or_else(|| anyhow!("encode {format:?} failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        self.encode(ImageFormat::Png)
    }

    fn fill_paint(color: Rgba) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(color));
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint
    }
}

impl TextMetrics for SkiaBackend {
    fn measure_text(&self, font: &FontSpec, text: &str) -> f64 {
        f64::from(self.shaper.measure_width(text, font))
    }

    fn cap_height(&self, font: &FontSpec) -> f64 {
        f64::from(self.shaper.line_height(font))
    }
}

impl DrawBackend for SkiaBackend {
    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &Stroke) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(stroke.color));
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke.width as f32);
        self.surface.canvas().draw_line(
            (from.0 as f32, from.1 as f32),
            (to.0 as f32, to.1 as f32),
            &paint,
        );
    }

    fn draw_rectangle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, fill: Rgba) {
        let rect = skia::Rect::from_ltrb(
            x1.min(x2) as f32,
            y1.min(y2) as f32,
            x1.max(x2) as f32,
            y1.max(y2) as f32,
        );
        self.surface.canvas().draw_rect(rect, &Self::fill_paint(fill));
    }

    fn draw_circle(&mut self, center: (f64, f64), radius: f64, fill: Rgba) {
        self.surface
            .canvas()
            .draw_circle((center.0 as f32, center.1 as f32), radius as f32, &Self::fill_paint(fill));
    }

    fn draw_text(&mut self, request: &TextRequest<'_>) {
        let w = self.measure_text(&request.font, request.text);
        let h = self.cap_height(&request.font);
        let (x, y) = request.area.anchor(request.gravity, w, h);
        let canvas = self.surface.canvas();
        if request.rotation != 0.0 {
            let pivot = skia::Point::new((x + w / 2.0) as f32, (y + h / 2.0) as f32);
            canvas.save();
            canvas.rotate(request.rotation as f32, Some(pivot));
            self.shaper.draw_top_left(canvas, request.text, x as f32, y as f32, &request.font, to_skia(request.color));
            canvas.restore();
        } else {
            self.shaper.draw_top_left(canvas, request.text, x as f32, y as f32, &request.font, to_skia(request.color));
        }
    }

    fn write(&mut self, path: &Path) -> Result<()> {
        let format = ImageFormat::from_path(path)
            .ok_or_else(|| anyhow!("unsupported image extension: '{}'", path.display()))?;
        let bytes = self.encode(format)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        debug!(bytes = bytes.len(), ?format, "encoded surface");
        Ok(())
    }
}
