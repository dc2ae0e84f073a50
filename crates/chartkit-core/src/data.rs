// File: crates/chartkit-core/src/data.rs
// Summary: Dataset and chart data model (normalized values, category labels, value range).
// Notes:
// - Values are expected to be normalized into [0, 1] relative to the chart's
//   minimum/maximum before they get here; nothing in this crate rescales them.

use std::collections::BTreeMap;

use crate::color::SeriesColor;
use crate::error::LayoutError;

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
    pub color: SeriesColor,
}

impl Dataset {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self { label: label.into(), values, color: SeriesColor::Default }
    }

    pub fn with_color(mut self, color: impl Into<SeriesColor>) -> Self {
        self.color = color.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartData {
    pub datasets: Vec<Dataset>,
    /// Category labels keyed by column index.
    pub labels: BTreeMap<usize, String>,
    pub minimum_value: f64,
    pub maximum_value: f64,
}

impl ChartData {
    pub fn new(minimum_value: f64, maximum_value: f64) -> Self {
        Self { minimum_value, maximum_value, ..Default::default() }
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = (usize, S)>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(|(i, s)| (i, s.into())).collect();
        self
    }

    pub fn push(&mut self, dataset: Dataset) {
        self.datasets.push(dataset);
    }

    /// `maximum_value - minimum_value`, checked for a usable range.
    pub fn spread(&self) -> Result<f64, LayoutError> {
        if !self.minimum_value.is_finite() || !self.maximum_value.is_finite() {
            return Err(LayoutError::NonFiniteRange);
        }
        if self.maximum_value < self.minimum_value {
            return Err(LayoutError::InvertedRange {
                minimum: self.minimum_value,
                maximum: self.maximum_value,
            });
        }
        Ok(self.maximum_value - self.minimum_value)
    }

    /// Number of columns: the length of the longest dataset.
    pub fn column_count(&self) -> usize {
        self.datasets.iter().map(|d| d.values.len()).max().unwrap_or(0)
    }

    pub fn has_data(&self) -> bool {
        self.datasets.iter().any(|d| !d.values.is_empty())
    }

    /// Longest category label by character count (first wins on ties).
    pub fn longest_label(&self) -> Option<&str> {
        self.labels
            .values()
            .fold(None, |best: Option<&String>, l| match best {
                Some(b) if b.chars().count() >= l.chars().count() => Some(b),
                _ => Some(l),
            })
            .map(String::as_str)
    }
}
