// File: crates/chartkit-core/src/kind.rs
// Summary: Chart variants (line, bar, dot) and the draw steps each adds after the shared pipeline.

use crate::backend::{DrawBackend, FontSpec, Stroke, TextRequest};
use crate::bar::{BarConversion, BarMode};
use crate::chart::Frame;
use crate::color::Rgba;
use crate::config::ChartConfig;
use crate::data::ChartData;
use crate::geometry::{clamp, Gravity, TextBox};
use crate::labels::{truncate_label, LabelPlacer, PlacedLabel};
use crate::measure::Layout;

pub const REFERENCE_LINE_DEFAULT_COLOR: Rgba = Rgba::rgb(255, 0, 0);
pub const REFERENCE_LINE_DEFAULT_WIDTH: f64 = 5.0;

/// Which screen direction the value axis runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueAxis {
    /// Values grow upward; categories run left to right.
    Vertical,
    /// Values grow rightward; categories run top to bottom.
    Horizontal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DotStyle {
    #[default]
    Circle,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReferencePosition {
    /// Horizontal line at a normalized value.
    Value(f64),
    /// Vertical line through a column.
    Index(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceLine {
    pub position: ReferencePosition,
    pub color: Option<Rgba>,
    pub width: Option<f64>,
}

impl ReferenceLine {
    pub fn at_value(value: f64) -> Self {
        Self { position: ReferencePosition::Value(value), color: None, width: None }
    }
    pub fn at_index(index: usize) -> Self {
        Self { position: ReferencePosition::Index(index), color: None, width: None }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineOptions {
    pub hide_dots: bool,
    pub hide_lines: bool,
    /// Hairline from top to bottom of the plot through every column.
    pub show_vertical_markers: bool,
    pub dot_style: DotStyle,
    pub dot_radius: f64,
    pub line_width: f64,
    pub reference_lines: Vec<ReferenceLine>,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            hide_dots: false,
            hide_lines: false,
            show_vertical_markers: false,
            dot_style: DotStyle::Circle,
            dot_radius: 4.0,
            line_width: 2.0,
            reference_lines: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarOptions {
    /// Share of each column's width covered by bars.
    pub spacing: f64,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self { spacing: 0.9 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotOptions {
    pub radius: f64,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self { radius: 6.0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartKind {
    Line(LineOptions),
    Bar(BarOptions),
    Dot(DotOptions),
}

impl ChartKind {
    pub fn value_axis(&self) -> ValueAxis {
        match self {
            ChartKind::Line(_) | ChartKind::Bar(_) => ValueAxis::Vertical,
            ChartKind::Dot(_) => ValueAxis::Horizontal,
        }
    }

    pub fn value_axis_length(&self, layout: &Layout) -> f64 {
        match self.value_axis() {
            ValueAxis::Vertical => layout.graph_height,
            ValueAxis::Horizontal => layout.graph_width,
        }
    }

    /// Configuration defaults for this variant.
    pub fn default_config(&self) -> ChartConfig {
        let mut config = ChartConfig::default();
        match self {
            ChartKind::Line(_) => config.hide_line_markers = true,
            ChartKind::Bar(_) => config.center_labels_over_point = false,
            ChartKind::Dot(_) => {
                config.has_left_labels = true;
                config.center_labels_over_point = false;
            }
        }
        config
    }

    /// Variant-specific draw steps, run after legend, markers, title and axis labels.
    pub fn draw<B: DrawBackend + ?Sized>(
        &self,
        backend: &mut B,
        frame: &Frame,
        config: &ChartConfig,
        data: &ChartData,
        labels: &mut LabelPlacer,
    ) {
        match self {
            ChartKind::Line(opts) => draw_lines(backend, frame, config, data, labels, opts),
            ChartKind::Bar(opts) => draw_bars(backend, frame, config, data, labels, opts),
            ChartKind::Dot(opts) => draw_dots(backend, frame, config, data, opts),
        }
    }
}

/// Draw a placed category label, top-centered on its x.
fn draw_category_label<B: DrawBackend + ?Sized>(backend: &mut B, config: &ChartConfig, label: &PlacedLabel) {
    backend.draw_text(&TextRequest {
        text: &label.text,
        area: TextBox::new(label.x, label.y, 0.0, 1.0),
        gravity: Gravity::North,
        font: FontSpec::regular(config.marker_font_size),
        color: config.theme.font_color,
        rotation: 0.0,
    });
}

fn value_y(layout: &Layout, value: f64) -> f64 {
    layout.graph_top + layout.graph_height * (1.0 - value)
}

fn draw_lines<B: DrawBackend + ?Sized>(
    backend: &mut B,
    frame: &Frame,
    config: &ChartConfig,
    data: &ChartData,
    labels: &mut LabelPlacer,
    opts: &LineOptions,
) {
    let l = &frame.layout;
    let columns = data.column_count();
    let x_at = |i: usize| {
        if columns > 1 {
            l.graph_left + i as f64 * l.graph_width / (columns - 1) as f64
        } else {
            l.graph_left + l.graph_width / 2.0
        }
    };

    if opts.show_vertical_markers {
        let marker = Stroke::hairline(config.theme.marker_color);
        for i in 0..columns {
            let x = x_at(i);
            backend.draw_line((x, l.graph_top), (x, l.graph_bottom), &marker);
        }
    }

    for line in &opts.reference_lines {
        let stroke = Stroke::new(
            line.color.unwrap_or(REFERENCE_LINE_DEFAULT_COLOR),
            line.width.unwrap_or(REFERENCE_LINE_DEFAULT_WIDTH),
        );
        match line.position {
            ReferencePosition::Value(v) => {
                let y = value_y(l, clamp(v, 0.0, 1.0));
                backend.draw_line((l.graph_left, y), (l.graph_right, y), &stroke);
            }
            ReferencePosition::Index(i) => {
                let x = x_at(i);
                if l.contains_x(x) {
                    backend.draw_line((x, l.graph_top), (x, l.graph_bottom), &stroke);
                }
            }
        }
    }

    for (dataset, &color) in data.datasets.iter().zip(&frame.colors) {
        let stroke = Stroke::new(color, opts.line_width);
        let mut prev: Option<(f64, f64)> = None;
        for (i, &v) in dataset.values.iter().enumerate() {
            let x = x_at(i);
            if let Some(label) = labels.place(&data.labels, i, x) {
                draw_category_label(backend, config, &label);
            }
            if !v.is_finite() {
                prev = None;
                continue;
            }
            let point = (x, value_y(l, v));
            if !opts.hide_lines {
                if let Some(p) = prev {
                    backend.draw_line(p, point, &stroke);
                }
            }
            if !opts.hide_dots {
                let r = opts.dot_radius;
                match opts.dot_style {
                    DotStyle::Circle => backend.draw_circle(point, r, color),
                    DotStyle::Square => backend.draw_rectangle(point.0 - r, point.1 - r, point.0 + r, point.1 + r, color),
                }
            }
            prev = Some(point);
        }
    }
}

fn draw_bars<B: DrawBackend + ?Sized>(
    backend: &mut B,
    frame: &Frame,
    config: &ChartConfig,
    data: &ChartData,
    labels: &mut LabelPlacer,
    opts: &BarOptions,
) {
    let l = &frame.layout;
    let columns = data.column_count();
    if columns == 0 || data.datasets.is_empty() {
        return;
    }
    let group_width = l.graph_width / columns as f64;
    let bar_width = group_width * opts.spacing / data.datasets.len() as f64;
    let padding = group_width * (1.0 - opts.spacing) / 2.0;
    let conversion = BarConversion::new(
        BarMode::for_range(data.minimum_value, data.maximum_value),
        l.graph_top,
        l.graph_height,
    );

    for (d, (dataset, &color)) in data.datasets.iter().zip(&frame.colors).enumerate() {
        for (i, &v) in dataset.values.iter().enumerate() {
            if !v.is_finite() {
                continue;
            }
            let left = l.graph_left + i as f64 * group_width + padding + d as f64 * bar_width;
            let (near, far) = conversion.convert(v);
            backend.draw_rectangle(left, near, left + bar_width, far, color);
        }
    }

    for i in 0..columns {
        let x = l.graph_left + i as f64 * group_width + group_width / 2.0;
        if let Some(label) = labels.place(&data.labels, i, x) {
            draw_category_label(backend, config, &label);
        }
    }
}

fn draw_dots<B: DrawBackend + ?Sized>(
    backend: &mut B,
    frame: &Frame,
    config: &ChartConfig,
    data: &ChartData,
    opts: &DotOptions,
) {
    let l = &frame.layout;
    let rows = data.column_count();
    if rows == 0 {
        return;
    }
    let row_height = l.graph_height / rows as f64;
    let row_y = |i: usize| l.graph_top + (i as f64 + 0.5) * row_height;
    let guide = Stroke::hairline(config.theme.marker_color);
    let font = FontSpec::regular(config.marker_font_size);

    for i in 0..rows {
        let y = row_y(i);
        backend.draw_line((l.graph_left, y), (l.graph_right, y), &guide);
        if let Some(text) = data.labels.get(&i) {
            let text = truncate_label(text, config.label_max_size, config.label_truncation);
            backend.draw_text(&TextRequest {
                text: &text,
                area: TextBox::new(0.0, y - 0.5, l.graph_left - config.label_margin, 1.0),
                gravity: Gravity::East,
                font,
                color: config.theme.font_color,
                rotation: 0.0,
            });
        }
    }

    for (dataset, &color) in data.datasets.iter().zip(&frame.colors) {
        for (i, &v) in dataset.values.iter().enumerate() {
            if v.is_finite() {
                let x = l.graph_left + v * l.graph_width;
                backend.draw_circle((x, row_y(i)), opts.radius, color);
            }
        }
    }
}
