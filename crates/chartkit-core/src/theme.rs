// File: crates/chartkit-core/src/theme.rs
// Summary: Theme presets: background, text/marker colors and dataset palettes.

use crate::color::Rgba;

/// Direction of a two-stop background gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientDirection {
    TopBottom,
    BottomTop,
    LeftRight,
    RightLeft,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Background {
    Solid(Rgba),
    Gradient { from: Rgba, to: Rgba, direction: GradientDirection },
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Background,
    pub font_color: Rgba,
    pub marker_color: Rgba,
    pub marker_shadow_color: Option<Rgba>,
    /// Dataset colors, used in order for datasets without an explicit color.
    pub palette: &'static [Rgba],
}

const KEYNOTE_PALETTE: [Rgba; 7] = [
    Rgba::rgb(0xfd, 0xd8, 0x4e), // yellow
    Rgba::rgb(0x68, 0x86, 0xb4), // blue
    Rgba::rgb(0x72, 0xae, 0x6e), // green
    Rgba::rgb(0xd1, 0x69, 0x5e), // red
    Rgba::rgb(0x8a, 0x6e, 0xaf), // purple
    Rgba::rgb(0xef, 0xaa, 0x43), // orange
    Rgba::WHITE,
];

const DARK_PALETTE: [Rgba; 6] = [
    Rgba::rgb(64, 160, 255),
    Rgba::rgb(40, 200, 120),
    Rgba::rgb(220, 80, 80),
    Rgba::rgb(255, 230, 70),
    Rgba::rgb(180, 120, 255),
    Rgba::rgb(255, 150, 60),
];

const LIGHT_PALETTE: [Rgba; 6] = [
    Rgba::rgb(32, 120, 200),
    Rgba::rgb(20, 160, 90),
    Rgba::rgb(200, 60, 60),
    Rgba::rgb(200, 150, 20),
    Rgba::rgb(120, 80, 190),
    Rgba::rgb(230, 110, 30),
];

const SOLARIZED_PALETTE: [Rgba; 6] = [
    Rgba::rgb(0x26, 0x8b, 0xd2), // blue
    Rgba::rgb(0x2a, 0xa1, 0x98), // cyan
    Rgba::rgb(0xdc, 0x32, 0x2f), // red
    Rgba::rgb(0xb5, 0x89, 0x00), // yellow
    Rgba::rgb(0x6c, 0x71, 0xc4), // violet
    Rgba::rgb(0xcb, 0x4b, 0x16), // orange
];

const HIGH_CONTRAST_PALETTE: [Rgba; 5] = [
    Rgba::rgb(0x00, 0xff, 0xff),
    Rgba::rgb(0xff, 0xff, 0x00),
    Rgba::rgb(0x00, 0xff, 0x00),
    Rgba::rgb(0xff, 0x00, 0xff),
    Rgba::rgb(0xff, 0x80, 0x00),
];

impl Theme {
    pub fn keynote() -> Self {
        Self {
            name: "keynote",
            background: Background::Gradient {
                from: Rgba::BLACK,
                to: Rgba::rgb(0x4a, 0x46, 0x5a),
                direction: GradientDirection::TopBottom,
            },
            font_color: Rgba::WHITE,
            marker_color: Rgba::WHITE,
            marker_shadow_color: None,
            palette: &KEYNOTE_PALETTE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Background::Solid(Rgba::rgb(18, 18, 20)),
            font_color: Rgba::rgb(235, 235, 245),
            marker_color: Rgba::rgb(80, 80, 90),
            marker_shadow_color: None,
            palette: &DARK_PALETTE,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Background::Solid(Rgba::rgb(250, 250, 252)),
            font_color: Rgba::rgb(20, 20, 30),
            marker_color: Rgba::rgb(200, 200, 210),
            marker_shadow_color: None,
            palette: &LIGHT_PALETTE,
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Background::Solid(Rgba::rgb(0x00, 0x2b, 0x36)), // base03
            font_color: Rgba::rgb(0xee, 0xe8, 0xd5),                     // base2
            marker_color: Rgba::rgb(0x58, 0x6e, 0x75),                   // base01
            marker_shadow_color: Some(Rgba::rgb(0x07, 0x36, 0x42)),      // base02
            palette: &SOLARIZED_PALETTE,
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Background::Gradient {
                from: Rgba::rgb(0xfd, 0xf6, 0xe3), // base3
                to: Rgba::rgb(0xee, 0xe8, 0xd5),   // base2
                direction: GradientDirection::TopBottom,
            },
            font_color: Rgba::rgb(0x00, 0x2b, 0x36),
            marker_color: Rgba::rgb(0x93, 0xa1, 0xa1),
            marker_shadow_color: None,
            palette: &SOLARIZED_PALETTE,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Background::Solid(Rgba::BLACK),
            font_color: Rgba::WHITE,
            marker_color: Rgba::rgb(0xcc, 0xcc, 0xcc),
            marker_shadow_color: None,
            palette: &HIGH_CONTRAST_PALETTE,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::keynote()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::keynote(),
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to keynote.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::default()
}
