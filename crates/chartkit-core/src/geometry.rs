// File: crates/chartkit-core/src/geometry.rs
// Summary: Text boxes and gravity anchoring for annotate-style text placement.

/// Anchor used to position text inside its logical box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gravity {
    North,
    South,
    East,
    West,
    Center,
}

/// Logical box a piece of text is positioned against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl TextBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner of a `text_w` x `text_h` run placed in this box by `gravity`.
    pub fn anchor(&self, gravity: Gravity, text_w: f64, text_h: f64) -> (f64, f64) {
        let cx = self.x + (self.width - text_w) / 2.0;
        let cy = self.y + (self.height - text_h) / 2.0;
        match gravity {
            Gravity::North => (cx, self.y),
            Gravity::South => (cx, self.y + self.height - text_h),
            Gravity::East => (self.x + self.width - text_w, cy),
            Gravity::West => (self.x, cy),
            Gravity::Center => (cx, cy),
        }
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors() {
        let b = TextBox::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(b.anchor(Gravity::North, 20.0, 10.0), (50.0, 20.0));
        assert_eq!(b.anchor(Gravity::South, 20.0, 10.0), (50.0, 50.0));
        assert_eq!(b.anchor(Gravity::East, 20.0, 10.0), (90.0, 35.0));
        assert_eq!(b.anchor(Gravity::West, 20.0, 10.0), (10.0, 35.0));
        assert_eq!(b.anchor(Gravity::Center, 20.0, 10.0), (50.0, 35.0));
    }
}
