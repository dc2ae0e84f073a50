// File: crates/chartkit-core/src/color.rs
// Summary: RGBA colors, per-dataset color choice and palette assignment.

use crate::data::Dataset;
use crate::error::ColorError;
use crate::theme::Theme;

/// 8-bit RGBA color, backend-neutral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::from_argb(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let hex = s.trim().trim_start_matches('#');
        let bad = || ColorError::InvalidHex(s.to_string());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        match hex.len() {
            3 => {
                let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17).map_err(|_| bad());
                Ok(Self::rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => Err(bad()),
        }
    }

    /// Look up a basic named color (case-insensitive).
    pub fn named(name: &str) -> Result<Self, ColorError> {
        let c = match name.trim().to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "transparent" => Self::TRANSPARENT,
            "red" => Self::rgb(255, 0, 0),
            "green" => Self::rgb(0, 128, 0),
            "blue" => Self::rgb(0, 0, 255),
            "yellow" => Self::rgb(255, 255, 0),
            "orange" => Self::rgb(255, 165, 0),
            "purple" => Self::rgb(128, 0, 128),
            "pink" => Self::rgb(255, 192, 203),
            "brown" => Self::rgb(165, 42, 42),
            "cyan" => Self::rgb(0, 255, 255),
            "magenta" => Self::rgb(255, 0, 255),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            _ => return Err(ColorError::UnknownName(name.to_string())),
        };
        Ok(c)
    }

    /// Linear blend toward `other`; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

/// Color requested for a dataset: an explicit color or "next from the theme palette".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeriesColor {
    #[default]
    Default,
    Explicit(Rgba),
}

impl From<Rgba> for SeriesColor {
    fn from(c: Rgba) -> Self {
        SeriesColor::Explicit(c)
    }
}

/// Resolve one color per dataset. Palette entries are reused cyclically, so the
/// result always has exactly `datasets.len()` entries.
pub fn assign_colors(datasets: &[Dataset], theme: &Theme) -> Vec<Rgba> {
    datasets
        .iter()
        .enumerate()
        .map(|(i, ds)| match ds.color {
            SeriesColor::Explicit(c) => c,
            SeriesColor::Default if theme.palette.is_empty() => theme.font_color,
            SeriesColor::Default => theme.palette[i % theme.palette.len()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms() {
        assert_eq!(Rgba::from_hex("#FDD84E").unwrap(), Rgba::rgb(0xfd, 0xd8, 0x4e));
        assert_eq!(Rgba::from_hex("fff").unwrap(), Rgba::WHITE);
        assert_eq!(Rgba::from_hex("#00000080").unwrap(), Rgba::from_argb(0x80, 0, 0, 0));
        assert!(Rgba::from_hex("#12345").is_err());
        assert!(Rgba::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn named_is_case_insensitive() {
        assert_eq!(Rgba::named("Blue").unwrap(), Rgba::rgb(0, 0, 255));
        assert_eq!(Rgba::named("nope"), Err(ColorError::UnknownName("nope".into())));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Rgba::BLACK;
        let b = Rgba::WHITE;
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgba::rgb(128, 128, 128));
    }
}
