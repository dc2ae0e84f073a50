// File: crates/chartkit-core/src/types.rs
// Summary: Shared types and constants (canvas sizes, margins, logical space).

/// Default output width in pixels.
pub const WIDTH: u32 = 800;
/// Default output height in pixels.
pub const HEIGHT: u32 = 600;

/// Width of the logical layout space. Every layout coordinate lives in this
/// space; backends multiply by [`Canvas::scale`] when drawing.
pub const LOGICAL_WIDTH: f64 = 800.0;

/// Screen margins around the chart, in logical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(20.0)
    }
}

/// Output surface options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT }
    }
}

/// Logical drawing space derived from [`RenderOptions`].
/// Contract: `raw_columns == LOGICAL_WIDTH`, aspect ratio matches the output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub raw_columns: f64,
    pub raw_rows: f64,
    /// Device pixels per logical unit.
    pub scale: f64,
}

impl Canvas {
    pub fn from_options(opts: &RenderOptions) -> Self {
        let w = f64::from(opts.width.max(1));
        let h = f64::from(opts.height.max(1));
        Self {
            raw_columns: LOGICAL_WIDTH,
            raw_rows: LOGICAL_WIDTH * h / w,
            scale: w / LOGICAL_WIDTH,
        }
    }
}

/// Raster output format chosen from a destination path's extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
}

impl ImageFormat {
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }
}
