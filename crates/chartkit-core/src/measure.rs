// File: crates/chartkit-core/src/measure.rs
// Summary: Graph measurement pass; derives the plot box from font metrics, margins and labels.

use tracing::debug;

use crate::backend::{FontSpec, TextMetrics};
use crate::config::ChartConfig;
use crate::data::ChartData;
use crate::error::LayoutError;
use crate::format::LabelFormatter;
use crate::ticks::TickSpacing;
use crate::types::Canvas;

/// Padding factor applied to the widest categorical left label.
pub const LEFT_LABEL_PADDING: f64 = 1.25;
/// Slack for points computed exactly on the plot's left or right edge.
pub const EDGE_EPSILON: f64 = 1e-6;

/// Plot box and text block sizes for one render, in logical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub raw_columns: f64,
    pub raw_rows: f64,
    pub graph_left: f64,
    pub graph_right: f64,
    pub graph_top: f64,
    pub graph_bottom: f64,
    pub graph_width: f64,
    pub graph_height: f64,
    pub marker_caps_height: f64,
    pub title_caps_height: f64,
    pub legend_caps_height: f64,
    /// Width reserved left of the plot for marker numbers or left labels.
    pub line_number_width: f64,
}

impl Layout {
    /// Copy with the top edge moved down by `amount` (wrapped legend lines).
    pub fn grow_top(&self, amount: f64) -> Layout {
        let graph_top = self.graph_top + amount;
        Layout { graph_top, graph_height: self.graph_bottom - graph_top, ..*self }
    }

    /// Reject a plot box with negative extent.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.graph_height < 0.0 {
            return Err(LayoutError::NegativeGraphHeight { height: self.graph_height });
        }
        if self.graph_width < 0.0 {
            return Err(LayoutError::NegativeGraphWidth { width: self.graph_width });
        }
        Ok(())
    }

    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.graph_left - EDGE_EPSILON && x <= self.graph_right + EDGE_EPSILON
    }
}

/// Compute the plot box.
///
/// Never fails: a configuration that leaves no room yields a negative
/// `graph_height`/`graph_width`, which [`Layout::validate`] reports.
pub fn measure<M: TextMetrics + ?Sized>(
    metrics: &M,
    config: &ChartConfig,
    data: &ChartData,
    canvas: &Canvas,
    spacing: &TickSpacing,
) -> Layout {
    let marker_font = FontSpec::regular(config.marker_font_size);
    let marker_caps_height = metrics.cap_height(&marker_font);
    let title_caps_height = match config.visible_title() {
        Some(title) => {
            let lines = title.lines().count().max(1) as f64;
            metrics.cap_height(&FontSpec::bold(config.title_font_size)) * lines
        }
        None => 0.0,
    };
    let legend_caps_height = metrics.cap_height(&FontSpec::regular(config.legend_font_size));

    let longest_left_label_width = if config.has_left_labels {
        data.longest_label()
            .map(|l| metrics.measure_text(&marker_font, l) * LEFT_LABEL_PADDING)
            .unwrap_or(0.0)
    } else {
        let formatter = LabelFormatter {
            spread: spacing.spread,
            marker_count: spacing.marker_count,
            explicit_increment: spacing.explicit,
        };
        let text = formatter.format(data.maximum_value, Some(spacing.increment));
        metrics.measure_text(&marker_font, &text)
    };

    let line_number_width = if config.hide_line_numbers && !config.has_left_labels {
        0.0
    } else {
        longest_left_label_width + config.label_margin * 2.0
    };

    let y_label_room = if config.y_axis_label.is_some() {
        marker_caps_height + config.label_margin * 2.0
    } else {
        0.0
    };
    let graph_left = config.margins.left + line_number_width + y_label_room;

    // half of the last column's label hangs past the final point
    let extra_room_for_long_label = match data.labels.iter().next_back() {
        Some((&last, text))
            if config.center_labels_over_point && last + 1 >= data.column_count() =>
        {
            metrics.measure_text(&marker_font, text) / 2.0
        }
        _ => 0.0,
    };

    let graph_right = canvas.raw_columns - (config.margins.right + extra_room_for_long_label);
    let graph_width = graph_right - graph_left;

    let graph_top = if config.legend_at_bottom {
        config.margins.top
    } else {
        let title_block = if config.hide_title {
            config.title_margin
        } else {
            title_caps_height + config.title_margin
        };
        let legend_block = if config.hide_legend {
            0.0
        } else {
            legend_caps_height + config.legend_margin
        };
        config.margins.top + title_block + legend_block
    };

    let x_axis_label_height = if config.x_axis_label.is_some() {
        marker_caps_height + config.label_margin
    } else {
        0.0
    };
    let graph_bottom = canvas.raw_rows
        - config.margins.bottom
        - marker_caps_height
        - config.label_margin
        - x_axis_label_height
        - config.label_stagger_height;
    let graph_height = graph_bottom - graph_top;

    debug!(graph_left, graph_right, graph_top, graph_bottom, "measured plot box");
    Layout {
        raw_columns: canvas.raw_columns,
        raw_rows: canvas.raw_rows,
        graph_left,
        graph_right,
        graph_top,
        graph_bottom,
        graph_width,
        graph_height,
        marker_caps_height,
        title_caps_height,
        legend_caps_height,
        line_number_width,
    }
}
