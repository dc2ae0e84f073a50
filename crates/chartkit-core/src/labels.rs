// File: crates/chartkit-core/src/labels.rs
// Summary: Category label placement under the plot: truncation, stagger, once-per-render guard.

use std::collections::{BTreeMap, HashSet};

use tracing::trace;

use crate::config::ChartConfig;
use crate::measure::{Layout, EDGE_EPSILON};

/// How over-long category labels are shortened.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Truncation {
    /// Cut and end with "..." so the result is exactly `max` characters.
    /// Needs `max > 3`; otherwise the label is left whole.
    TrailingDots,
    /// Hard cut at `max` characters.
    #[default]
    Absolute,
}

pub fn truncate_label(text: &str, max: Option<usize>, style: Truncation) -> String {
    let Some(max) = max else { return text.to_string() };
    if text.chars().count() <= max {
        return text.to_string();
    }
    match style {
        Truncation::TrailingDots if max > 3 => {
            let head: String = text.chars().take(max - 3).collect();
            format!("{head}...")
        }
        Truncation::TrailingDots => text.to_string(),
        Truncation::Absolute => text.chars().take(max).collect(),
    }
}

/// A label ready to be drawn: top-center at (`x`, `y`).
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLabel {
    pub index: usize,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Places x-axis category labels for one render. Each index is handled at
/// most once; later requests for the same index return `None`.
#[derive(Clone, Debug)]
pub struct LabelPlacer {
    seen: HashSet<usize>,
    graph_left: f64,
    graph_right: f64,
    baseline_y: f64,
    stagger: f64,
    max_size: Option<usize>,
    style: Truncation,
}

impl LabelPlacer {
    pub fn new(layout: &Layout, config: &ChartConfig) -> Self {
        Self {
            seen: HashSet::new(),
            graph_left: layout.graph_left,
            graph_right: layout.graph_right,
            baseline_y: layout.graph_bottom + config.label_margin,
            stagger: config.label_stagger_height,
            max_size: config.label_max_size,
            style: config.label_truncation,
        }
    }

    pub fn is_seen(&self, index: usize) -> bool {
        self.seen.contains(&index)
    }

    /// Place the label for `index` centered on `x`. Indices without a label
    /// are ignored. A label outside `[graph_left, graph_right]` is not
    /// returned but still counts as handled.
    pub fn place(&mut self, labels: &BTreeMap<usize, String>, index: usize, x: f64) -> Option<PlacedLabel> {
        let text = labels.get(&index)?;
        if !self.seen.insert(index) {
            return None;
        }
        if x < self.graph_left - EDGE_EPSILON || x > self.graph_right + EDGE_EPSILON {
            trace!(index, x, "label outside plot box, skipped");
            return None;
        }
        let y = if index % 2 == 1 { self.baseline_y + self.stagger } else { self.baseline_y };
        Some(PlacedLabel {
            index,
            text: truncate_label(text, self.max_size, self.style),
            x,
            y,
        })
    }
}
