// File: crates/chartkit-core/tests/bar.rs
// Purpose: Bar coordinate conversion in the three baseline modes.

use chartkit_core::{BarConversion, BarMode};

const TOP: f64 = 10.0;
const HEIGHT: f64 = 400.0;

#[test]
fn mode_from_range_sign() {
    assert_eq!(BarMode::for_range(0.0, 10.0), BarMode::AllPositive);
    assert_eq!(BarMode::for_range(-5.0, 0.0), BarMode::AllNegative);
    assert_eq!(BarMode::for_range(-2.0, 6.0), BarMode::Mixed { zero: 0.25 });
}

#[test]
fn all_positive_bars_rise_from_bottom() {
    let c = BarConversion::new(BarMode::AllPositive, TOP, HEIGHT);
    assert_eq!(c.convert(1.0), (TOP + 1.0, TOP + HEIGHT - 1.0));
    assert_eq!(c.convert(0.0).0, TOP + HEIGHT + 1.0);
    assert_eq!(c.convert(0.5), (211.0, 409.0));
}

#[test]
fn all_negative_bars_hang_from_top() {
    let c = BarConversion::new(BarMode::AllNegative, TOP, HEIGHT);
    assert_eq!(c.convert(0.0), (TOP + 1.0, TOP + HEIGHT - 1.0));
    assert_eq!(c.convert(0.5), (TOP + 1.0, 209.0));
}

#[test]
fn mixed_bars_grow_away_from_zero_line() {
    let c = BarConversion::new(BarMode::for_range(-2.0, 6.0), TOP, HEIGHT);
    let zero_y = TOP + HEIGHT * 0.75;

    // +4 sits at 0.75 of the axis: bar from the value down to the zero line
    let (near, far) = c.convert(0.75);
    assert_eq!((near, far), (TOP + HEIGHT * 0.25 + 1.0, zero_y - 1.0));

    // -2 sits at 0.0: bar from the zero line down to the value
    let (near, far) = c.convert(0.0);
    assert_eq!((near, far), (zero_y + 1.0, TOP + HEIGHT - 1.0));
}

#[test]
fn mixed_branches_mirror_around_zero() {
    let c = BarConversion::new(BarMode::Mixed { zero: 0.5 }, TOP, HEIGHT);
    let zero_y = TOP + HEIGHT * 0.5;
    let (up_near, up_far) = c.convert(0.75);
    let (down_near, down_far) = c.convert(0.25);
    // equal-magnitude values give equal-length bars on opposite sides
    assert_eq!(up_far - up_near, down_far - down_near);
    assert!(up_far < zero_y && down_near > zero_y);
}
