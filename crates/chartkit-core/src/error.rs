// File: crates/chartkit-core/src/error.rs
// Summary: Typed errors for layout validation and color parsing.

use thiserror::Error;

/// Structural problems that make a chart impossible to lay out.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("graph height is negative ({height:.2}); margins, title or legend leave no room for the plot")]
    NegativeGraphHeight { height: f64 },

    #[error("graph width is negative ({width:.2}); margins and label columns leave no room for the plot")]
    NegativeGraphWidth { width: f64 },

    #[error("value range is inverted: minimum {minimum} > maximum {maximum}")]
    InvertedRange { minimum: f64, maximum: f64 },

    #[error("value range contains a non-finite bound")]
    NonFiniteRange,

    #[error("canvas must be at least 1x1 pixels, got {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    #[error("unknown color name: {0:?}")]
    UnknownName(String),
}
