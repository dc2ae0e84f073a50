// File: crates/chartkit-core/src/ticks.rs
// Summary: Marker count and "nice" increment selection for the value axis.

use std::ops::RangeInclusive;

use tracing::{debug, warn};

use crate::format::is_integral;

/// Marker counts tried, in order, when looking for one that splits the spread evenly.
pub const MARKER_COUNT_CANDIDATES: RangeInclusive<usize> = 3..=7;
/// Marker count used when no candidate splits the spread evenly.
pub const DEFAULT_MARKER_COUNT: usize = 4;

const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Marker count and value distance between markers, before pixel scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickSpacing {
    pub marker_count: usize,
    pub increment: f64,
    pub spread: f64,
    /// The increment came from configuration rather than from the selector.
    pub explicit: bool,
}

/// [`TickSpacing`] resolved against the plot's value-axis length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ticks {
    pub marker_count: usize,
    pub increment: f64,
    /// Pixels per increment.
    pub increment_scaled: f64,
    pub spread: f64,
}

/// `spread` is an exact multiple of `count`, within float tolerance.
pub fn divides_evenly(spread: f64, count: usize) -> bool {
    count > 0 && is_integral(spread / count as f64)
}

/// First candidate count that divides `spread` evenly, else the default.
pub fn pick_marker_count(spread: f64) -> usize {
    MARKER_COUNT_CANDIDATES
        .into_iter()
        .find(|&n| divides_evenly(spread, n))
        .unwrap_or(DEFAULT_MARKER_COUNT)
}

/// `x * 10^exp`, dividing for negative exponents to keep decimal steps exact.
fn shift_decimal(x: f64, exp: i32) -> f64 {
    if exp >= 0 { x * 10f64.powi(exp) } else { x / 10f64.powi(-exp) }
}

/// Reduce a positive step to at most two significant digits. A step that
/// already fits (4, 7, 19, 0.3) is kept; a longer one (23.7, 3.125) is
/// rounded to the nearest of 1, 2, 2.5, 5, 10 times a power of ten, with
/// ties going to the smaller step.
pub fn nice_increment(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let mut exp = raw.log10().floor() as i32;
    let mut fraction = shift_decimal(raw, -exp);
    // log10 can land one decade off near exact powers of ten
    if fraction < 1.0 {
        exp -= 1;
        fraction *= 10.0;
    } else if fraction >= 10.0 {
        exp += 1;
        fraction /= 10.0;
    }
    let two_digits = fraction * 10.0;
    if is_integral(two_digits) {
        return shift_decimal(two_digits.round(), exp - 1);
    }
    let mut best = NICE_STEPS[0];
    for step in NICE_STEPS {
        if (fraction - step).abs() < (fraction - best).abs() {
            best = step;
        }
    }
    shift_decimal(best, exp)
}

/// Choose marker count and increment for `spread`.
///
/// An explicit `increment` is used as-is and sets the count to
/// `floor(spread / increment)`. Otherwise `marker_count` (or the first even
/// divisor in 3..=7, else 4) splits the spread and the step is rounded to a
/// nice value. A zero spread resolves to a single marker one unit apart.
pub fn select_spacing(spread: f64, marker_count: Option<usize>, increment: Option<f64>) -> TickSpacing {
    let explicit = match increment {
        Some(inc) if inc.is_finite() && inc > 0.0 => Some(inc),
        Some(inc) => {
            warn!(increment = inc, "ignoring non-positive axis increment");
            None
        }
        None => None,
    };

    let spacing = if let Some(inc) = explicit {
        TickSpacing {
            marker_count: (spread / inc).floor() as usize,
            increment: inc,
            spread,
            explicit: true,
        }
    } else {
        // a flat range has one step no matter what count was asked for
        let count = match marker_count {
            _ if spread == 0.0 => 1,
            Some(n) => n,
            None => pick_marker_count(spread),
        };
        let increment = if spread > 0.0 && count > 0 { nice_increment(spread / count as f64) } else { 1.0 };
        TickSpacing { marker_count: count, increment, spread, explicit: false }
    };
    debug!(spread, marker_count = spacing.marker_count, increment = spacing.increment, "tick spacing");
    spacing
}

impl TickSpacing {
    /// Resolve against an axis `length` in pixels.
    pub fn scaled(&self, length: f64) -> Ticks {
        let steps = if self.spread == 0.0 { 1.0 } else { self.spread / self.increment };
        Ticks {
            marker_count: self.marker_count,
            increment: self.increment,
            increment_scaled: length / steps,
            spread: self.spread,
        }
    }
}

impl Ticks {
    /// Markers to draw: the configured count, minus any whose value would land
    /// past the top of the axis after nice rounding.
    pub fn visible_markers(&self) -> usize {
        if self.spread <= 0.0 {
            return self.marker_count.min(1);
        }
        let fit = (self.spread / self.increment + 1e-9).floor() as usize;
        self.marker_count.min(fit)
    }

    /// Offset of marker `index` from the axis origin, in pixels.
    pub fn offset(&self, index: usize) -> f64 {
        index as f64 * self.increment_scaled
    }
}
