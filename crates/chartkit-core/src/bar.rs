// File: crates/chartkit-core/src/bar.rs
// Summary: Maps a normalized bar value to the (near, far) pixel edges along the value axis.

/// Where bars start from, picked from the sign of the chart's value range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BarMode {
    /// Every value >= 0: bars grow up from the bottom edge.
    AllPositive,
    /// Every value <= 0: bars hang down from the top edge.
    AllNegative,
    /// Mixed signs: bars grow away from the zero line, which sits at
    /// fraction `zero` of the axis measured from the bottom.
    Mixed { zero: f64 },
}

impl BarMode {
    pub fn for_range(minimum_value: f64, maximum_value: f64) -> Self {
        if minimum_value >= 0.0 {
            BarMode::AllPositive
        } else if maximum_value <= 0.0 {
            BarMode::AllNegative
        } else {
            let spread = maximum_value - minimum_value;
            BarMode::Mixed { zero: -minimum_value / spread }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarConversion {
    pub mode: BarMode,
    pub graph_top: f64,
    pub graph_height: f64,
}

impl BarConversion {
    pub fn new(mode: BarMode, graph_top: f64, graph_height: f64) -> Self {
        Self { mode, graph_top, graph_height }
    }

    #[inline]
    fn y_at(&self, fraction: f64) -> f64 {
        self.graph_top + self.graph_height * (1.0 - fraction)
    }

    /// Pixel rows `(near, far)` for a bar at normalized `value`; fill the
    /// rectangle between them. Edges sit one pixel inside the baseline.
    pub fn convert(&self, value: f64) -> (f64, f64) {
        match self.mode {
            BarMode::AllPositive => (self.y_at(value) + 1.0, self.graph_top + self.graph_height - 1.0),
            BarMode::AllNegative => (self.graph_top + 1.0, self.y_at(value) - 1.0),
            BarMode::Mixed { zero } => {
                let value_y = self.y_at(value);
                let zero_y = self.y_at(zero);
                if value >= zero {
                    (value_y + 1.0, zero_y - 1.0)
                } else {
                    (zero_y + 1.0, value_y - 1.0)
                }
            }
        }
    }
}
