// File: crates/chartkit-core/src/lib.rs
// Summary: Core library entry point; chart layout engine, backend traits and render pipeline.

pub mod backend;
pub mod bar;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod geometry;
pub mod kind;
pub mod labels;
pub mod legend;
pub mod measure;
pub mod theme;
pub mod ticks;
pub mod types;

pub use backend::{DrawBackend, DrawCall, FontSpec, RecordingBackend, Stroke, TextMetrics, TextRequest};
pub use bar::{BarConversion, BarMode};
pub use chart::{Chart, Frame};
pub use color::{assign_colors, Rgba, SeriesColor};
pub use config::ChartConfig;
pub use data::{ChartData, Dataset};
pub use error::{ColorError, LayoutError};
pub use format::{format_with_increment, insert_thousands_separator, LabelFormatter};
pub use geometry::{Gravity, TextBox};
pub use kind::{BarOptions, ChartKind, DotOptions, DotStyle, LineOptions, ReferenceLine};
pub use labels::{LabelPlacer, PlacedLabel, Truncation};
pub use legend::{layout_legend, LegendLayout, LegendParams};
pub use measure::{measure, Layout};
pub use theme::Theme;
pub use ticks::{select_spacing, TickSpacing, Ticks};
pub use types::{Canvas, ImageFormat, Margins, RenderOptions};
