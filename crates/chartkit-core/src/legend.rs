// File: crates/chartkit-core/src/legend.rs
// Summary: Legend packing: wraps entries into centered lines under a width budget.

use tracing::{debug, warn};

/// Share of the canvas width a legend line may use.
pub const LEGEND_WIDTH_BUDGET: f64 = 0.9;
/// Entry width multiplier for the swatch, the gap after it and trailing space.
pub const SWATCH_WIDTH_FACTOR: f64 = 2.7;
/// Label text starts this many swatch widths after the entry's x.
pub const SWATCH_TEXT_OFFSET: f64 = 1.7;

/// Width one legend entry takes up on its line.
pub fn entry_width(text_width: f64, box_size: f64) -> f64 {
    text_width + box_size * SWATCH_WIDTH_FACTOR
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendParams {
    pub canvas_width: f64,
    pub box_size: f64,
    pub cap_height: f64,
    pub legend_margin: f64,
    /// Vertical center of the first legend line.
    pub origin_y: f64,
    /// Extra lines push the plot box down (legend above the plot).
    pub grows_graph: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendEntry {
    pub line: usize,
    /// Left edge of the swatch.
    pub x: f64,
    /// Vertical center of the line.
    pub y: f64,
    pub width: f64,
    pub starts_line: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    pub entries: Vec<LegendEntry>,
    pub line_widths: Vec<f64>,
    pub line_height: f64,
    /// How far the plot box's top edge moves down to make room for wrapped lines.
    pub growth: f64,
}

impl LegendLayout {
    pub fn line_count(&self) -> usize {
        self.line_widths.len()
    }
}

/// Pack entries of the given widths left to right. A line breaks before the
/// entry that would push it past 90% of the canvas; an entry wider than that
/// on its own still gets a line to itself. Every line is centered.
pub fn layout_legend(widths: &[f64], params: &LegendParams) -> LegendLayout {
    let budget = params.canvas_width * LEGEND_WIDTH_BUDGET;
    let mut lines: Vec<Vec<f64>> = Vec::new();
    for &w in widths {
        if w > budget {
            warn!(width = w, budget, "legend entry wider than the wrap budget");
        }
        match lines.last_mut() {
            Some(line) if !line.is_empty() && line.iter().sum::<f64>() + w <= budget => line.push(w),
            _ => lines.push(vec![w]),
        }
    }

    let line_height = params.cap_height.max(params.box_size) + params.legend_margin;
    let line_widths: Vec<f64> = lines.iter().map(|l| l.iter().sum()).collect();
    let mut entries = Vec::with_capacity(widths.len());
    for (line_idx, line) in lines.iter().enumerate() {
        let mut x = (params.canvas_width - line_widths[line_idx]) / 2.0;
        let y = params.origin_y + line_idx as f64 * line_height;
        for (k, &w) in line.iter().enumerate() {
            entries.push(LegendEntry { line: line_idx, x, y, width: w, starts_line: k == 0 });
            x += w;
        }
    }

    let extra_lines = line_widths.len().saturating_sub(1) as f64;
    let growth = if params.grows_graph { extra_lines * line_height } else { 0.0 };
    debug!(lines = line_widths.len(), growth, "legend layout");
    LegendLayout { entries, line_widths, line_height, growth }
}
