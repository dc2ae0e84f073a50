// File: crates/chartkit-core/src/config.rs
// Summary: Chart configuration: margins, text, fonts, toggles and theme.

use crate::labels::Truncation;
use crate::theme::Theme;
use crate::types::Margins;

/// Default vertical gap between text blocks and the plot box.
pub const LABEL_MARGIN: f64 = 10.0;

/// Layout and styling options consumed by the measurement pass and draw steps.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub margins: Margins,
    pub title: Option<String>,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,

    pub title_font_size: f64,
    pub marker_font_size: f64,
    pub legend_font_size: f64,
    /// Side of the colored square drawn next to each legend entry.
    pub legend_box_size: f64,
    pub title_margin: f64,
    pub legend_margin: f64,
    pub label_margin: f64,
    /// Extra drop applied to odd-indexed category labels.
    pub label_stagger_height: f64,
    /// Category labels longer than this many characters are truncated.
    pub label_max_size: Option<usize>,
    pub label_truncation: Truncation,

    /// Fixed marker count; picked automatically when `None`.
    pub marker_count: Option<usize>,
    /// Fixed value distance between markers; overrides `marker_count`.
    pub y_axis_increment: Option<f64>,

    pub hide_title: bool,
    pub hide_legend: bool,
    pub hide_line_numbers: bool,
    pub hide_line_markers: bool,
    pub legend_at_bottom: bool,
    pub center_labels_over_point: bool,
    /// Size the left column from the category labels instead of numbers.
    pub has_left_labels: bool,

    pub theme: Theme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            title: None,
            x_axis_label: None,
            y_axis_label: None,
            title_font_size: 36.0,
            marker_font_size: 21.0,
            legend_font_size: 20.0,
            legend_box_size: 20.0,
            title_margin: 20.0,
            legend_margin: 20.0,
            label_margin: LABEL_MARGIN,
            label_stagger_height: 0.0,
            label_max_size: None,
            label_truncation: Truncation::Absolute,
            marker_count: None,
            y_axis_increment: None,
            hide_title: false,
            hide_legend: false,
            hide_line_numbers: false,
            hide_line_markers: false,
            legend_at_bottom: false,
            center_labels_over_point: true,
            has_left_labels: false,
            theme: Theme::default(),
        }
    }
}

impl ChartConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Title text if it should be drawn and take up room.
    pub fn visible_title(&self) -> Option<&str> {
        if self.hide_title { None } else { self.title.as_deref() }
    }
}
