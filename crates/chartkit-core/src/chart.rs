// File: crates/chartkit-core/src/chart.rs
// Summary: Chart struct, layout frame and the shared render pipeline driving a DrawBackend.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::backend::{DrawBackend, FontSpec, Stroke, TextMetrics, TextRequest};
use crate::color::{assign_colors, Rgba};
use crate::config::ChartConfig;
use crate::data::{ChartData, Dataset};
use crate::error::LayoutError;
use crate::format::format_with_increment;
use crate::geometry::{Gravity, TextBox};
use crate::kind::{BarOptions, ChartKind, DotOptions, LineOptions, ValueAxis};
use crate::labels::LabelPlacer;
use crate::legend::{self, LegendLayout, LegendParams, SWATCH_TEXT_OFFSET};
use crate::measure::{measure, Layout};
use crate::theme::{Background, GradientDirection};
use crate::ticks::{select_spacing, Ticks};
use crate::types::{Canvas, RenderOptions};

/// Everything the draw steps need, fixed before the first draw call.
#[derive(Clone, Debug)]
pub struct Frame {
    pub canvas: Canvas,
    pub layout: Layout,
    pub ticks: Ticks,
    /// `None` when the legend is hidden.
    pub legend: Option<LegendLayout>,
    /// One color per dataset.
    pub colors: Vec<Rgba>,
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub kind: ChartKind,
    pub config: ChartConfig,
    pub data: ChartData,
}

impl Chart {
    pub fn new(kind: ChartKind, data: ChartData) -> Self {
        let config = kind.default_config();
        Self { kind, config, data }
    }

    pub fn line(data: ChartData) -> Self {
        Self::new(ChartKind::Line(LineOptions::default()), data)
    }

    pub fn bar(data: ChartData) -> Self {
        Self::new(ChartKind::Bar(BarOptions::default()), data)
    }

    pub fn dot(data: ChartData) -> Self {
        Self::new(ChartKind::Dot(DotOptions::default()), data)
    }

    pub fn add_dataset(&mut self, dataset: Dataset) {
        self.data.push(dataset);
    }

    /// Run measurement, legend wrapping and tick selection without drawing.
    pub fn layout<M: TextMetrics + ?Sized>(&self, metrics: &M, opts: &RenderOptions) -> Result<Frame, LayoutError> {
        if opts.width == 0 || opts.height == 0 {
            return Err(LayoutError::InvalidCanvas { width: opts.width, height: opts.height });
        }
        let spread = self.data.spread()?;
        let canvas = Canvas::from_options(opts);
        let spacing = select_spacing(spread, self.config.marker_count, self.config.y_axis_increment);
        let measured = measure(metrics, &self.config, &self.data, &canvas, &spacing);

        let legend = (!self.config.hide_legend).then(|| self.layout_legend(metrics, &measured));
        let layout = match &legend {
            Some(l) => measured.grow_top(l.growth),
            None => measured,
        };
        layout.validate()?;

        let ticks = spacing.scaled(self.kind.value_axis_length(&layout));
        let colors = assign_colors(&self.data.datasets, &self.config.theme);
        Ok(Frame { canvas, layout, ticks, legend, colors })
    }

    fn layout_legend<M: TextMetrics + ?Sized>(&self, metrics: &M, layout: &Layout) -> LegendLayout {
        let cfg = &self.config;
        let font = FontSpec::regular(cfg.legend_font_size);
        let widths: Vec<f64> = self
            .data
            .datasets
            .iter()
            .map(|d| legend::entry_width(metrics.measure_text(&font, &d.label), cfg.legend_box_size))
            .collect();
        let origin_y = if cfg.legend_at_bottom {
            layout.graph_bottom + cfg.title_margin
        } else if cfg.hide_title {
            cfg.margins.top + cfg.title_margin
        } else {
            cfg.margins.top + cfg.title_margin + layout.title_caps_height
        };
        legend::layout_legend(
            &widths,
            &LegendParams {
                canvas_width: layout.raw_columns,
                box_size: cfg.legend_box_size,
                cap_height: layout.legend_caps_height,
                legend_margin: cfg.legend_margin,
                origin_y,
                grows_graph: !cfg.legend_at_bottom,
            },
        )
    }

    /// Draw the chart onto `backend`. A chart without data draws nothing.
    pub fn render<B: DrawBackend + ?Sized>(&self, backend: &mut B, opts: &RenderOptions) -> Result<()> {
        if !self.data.has_data() {
            debug!("chart has no data; nothing to draw");
            return Ok(());
        }
        let frame = self.layout(&*backend, opts)?;
        let mut labels = LabelPlacer::new(&frame.layout, &self.config);

        self.draw_background(backend, &frame);
        if let Some(legend) = &frame.legend {
            self.draw_legend(backend, &frame, legend);
        }
        self.draw_line_markers(backend, &frame);
        self.draw_title(backend, &frame);
        self.draw_axis_labels(backend, &frame);
        self.kind.draw(backend, &frame, &self.config, &self.data, &mut labels);
        Ok(())
    }

    /// Render, then encode to `path` (format from the extension).
    pub fn render_to_file<B: DrawBackend + ?Sized>(
        &self,
        backend: &mut B,
        opts: &RenderOptions,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let path = path.as_ref();
        self.render(backend, opts)?;
        backend
            .write(path)
            .with_context(|| format!("failed to write chart to '{}'", path.display()))?;
        info!(path = %path.display(), "chart written");
        Ok(())
    }

    fn draw_background<B: DrawBackend + ?Sized>(&self, backend: &mut B, frame: &Frame) {
        let (w, h) = (frame.canvas.raw_columns, frame.canvas.raw_rows);
        match self.config.theme.background {
            Background::Solid(c) => backend.draw_rectangle(0.0, 0.0, w, h, c),
            Background::Gradient { from, to, direction } => {
                let vertical = matches!(direction, GradientDirection::TopBottom | GradientDirection::BottomTop);
                let (from, to) = match direction {
                    GradientDirection::TopBottom | GradientDirection::LeftRight => (from, to),
                    GradientDirection::BottomTop | GradientDirection::RightLeft => (to, from),
                };
                let extent = if vertical { h } else { w };
                let bands = extent.ceil().max(1.0) as usize;
                for i in 0..bands {
                    let t = if bands > 1 { i as f64 / (bands - 1) as f64 } else { 0.0 };
                    let c = from.lerp(to, t);
                    let p = i as f64;
                    if vertical {
                        backend.draw_rectangle(0.0, p, w, (p + 1.0).min(h), c);
                    } else {
                        backend.draw_rectangle(p, 0.0, (p + 1.0).min(w), h, c);
                    }
                }
            }
        }
    }

    fn draw_legend<B: DrawBackend + ?Sized>(&self, backend: &mut B, frame: &Frame, legend: &LegendLayout) {
        let cfg = &self.config;
        let box_size = cfg.legend_box_size;
        for ((entry, dataset), &color) in legend.entries.iter().zip(&self.data.datasets).zip(&frame.colors) {
            backend.draw_text(&TextRequest {
                text: &dataset.label,
                area: TextBox::new(entry.x + box_size * SWATCH_TEXT_OFFSET, entry.y - 0.5, frame.canvas.raw_columns, 1.0),
                gravity: Gravity::West,
                font: FontSpec::regular(cfg.legend_font_size),
                color: cfg.theme.font_color,
                rotation: 0.0,
            });
            backend.draw_rectangle(
                entry.x,
                entry.y - box_size / 2.0,
                entry.x + box_size,
                entry.y + box_size / 2.0,
                color,
            );
        }
    }

    /// Reference lines and their numbers along the value axis.
    fn draw_line_markers<B: DrawBackend + ?Sized>(&self, backend: &mut B, frame: &Frame) {
        let cfg = &self.config;
        let l = &frame.layout;
        let t = &frame.ticks;
        let marker = Stroke::hairline(cfg.theme.marker_color);
        let shadow = cfg.theme.marker_shadow_color.map(Stroke::hairline);
        let font = FontSpec::regular(cfg.marker_font_size);
        let count = t.visible_markers();

        for index in 0..=count {
            let show_line = !cfg.hide_line_markers || index == 0;
            let value = index as f64 * t.increment + self.data.minimum_value;
            let text = format_with_increment(value, t.increment);
            match self.kind.value_axis() {
                ValueAxis::Vertical => {
                    let y = l.graph_top + l.graph_height - t.offset(index);
                    if show_line {
                        backend.draw_line((l.graph_left, y), (l.graph_right, y), &marker);
                    }
                    if let Some(s) = &shadow {
                        backend.draw_line((l.graph_left, y + 1.0), (l.graph_right, y + 1.0), s);
                    }
                    if index < count {
                        let y_next = l.graph_top + l.graph_height - t.offset(index + 1);
                        backend.draw_line((l.graph_left, y + 1.0), (l.graph_left, y_next + 1.0), &marker);
                    }
                    if !cfg.hide_line_numbers {
                        backend.draw_text(&TextRequest {
                            text: &text,
                            area: TextBox::new(0.0, y - 0.5, l.graph_left - cfg.label_margin, 1.0),
                            gravity: Gravity::East,
                            font,
                            color: cfg.theme.font_color,
                            rotation: 0.0,
                        });
                    }
                }
                ValueAxis::Horizontal => {
                    let x = l.graph_left + t.offset(index);
                    if show_line {
                        backend.draw_line((x, l.graph_top), (x, l.graph_bottom), &marker);
                    }
                    if let Some(s) = &shadow {
                        backend.draw_line((x + 1.0, l.graph_top), (x + 1.0, l.graph_bottom), s);
                    }
                    if !cfg.hide_line_numbers {
                        backend.draw_text(&TextRequest {
                            text: &text,
                            area: TextBox::new(x, l.graph_bottom + cfg.label_margin, 0.0, 1.0),
                            gravity: Gravity::North,
                            font,
                            color: cfg.theme.font_color,
                            rotation: 0.0,
                        });
                    }
                }
            }
        }
    }

    fn draw_title<B: DrawBackend + ?Sized>(&self, backend: &mut B, frame: &Frame) {
        let Some(title) = self.config.visible_title() else { return };
        backend.draw_text(&TextRequest {
            text: title,
            area: TextBox::new(0.0, self.config.margins.top, frame.canvas.raw_columns, 1.0),
            gravity: Gravity::North,
            font: FontSpec::bold(self.config.title_font_size),
            color: self.config.theme.font_color,
            rotation: 0.0,
        });
    }

    fn draw_axis_labels<B: DrawBackend + ?Sized>(&self, backend: &mut B, frame: &Frame) {
        let cfg = &self.config;
        let l = &frame.layout;
        let font = FontSpec::regular(cfg.marker_font_size);
        if let Some(label) = &cfg.x_axis_label {
            let y = l.graph_bottom + cfg.label_margin * 2.0 + l.marker_caps_height;
            backend.draw_text(&TextRequest {
                text: label,
                area: TextBox::new(0.0, y, frame.canvas.raw_columns, 1.0),
                gravity: Gravity::North,
                font,
                color: cfg.theme.font_color,
                rotation: 0.0,
            });
        }
        if let Some(label) = &cfg.y_axis_label {
            let x = cfg.margins.left + l.marker_caps_height / 2.0;
            backend.draw_text(&TextRequest {
                text: label,
                area: TextBox::new(x, 0.0, 1.0, frame.canvas.raw_rows),
                gravity: Gravity::Center,
                font,
                color: cfg.theme.font_color,
                rotation: -90.0,
            });
        }
    }
}
