// File: crates/chartkit-core/tests/labels.rs
// Purpose: Label truncation styles and the once-per-index placement guard.

use std::collections::BTreeMap;

use chartkit_core::labels::truncate_label;
use chartkit_core::{ChartConfig, LabelPlacer, Layout, Truncation};

fn layout() -> Layout {
    Layout {
        raw_columns: 800.0,
        raw_rows: 600.0,
        graph_left: 80.0,
        graph_right: 780.0,
        graph_top: 116.0,
        graph_bottom: 549.0,
        graph_width: 700.0,
        graph_height: 433.0,
        marker_caps_height: 21.0,
        title_caps_height: 36.0,
        legend_caps_height: 20.0,
        line_number_width: 60.0,
    }
}

fn labels() -> BTreeMap<usize, String> {
    [(0, "Jan"), (1, "Feb"), (2, "September")].into_iter().map(|(i, s)| (i, s.to_string())).collect()
}

#[test]
fn truncation_styles() {
    assert_eq!(truncate_label("February", Some(5), Truncation::TrailingDots), "Fe...");
    assert_eq!(truncate_label("February", Some(5), Truncation::Absolute), "Febru");
    assert_eq!(truncate_label("February", Some(3), Truncation::TrailingDots), "February");
    assert_eq!(truncate_label("May", Some(5), Truncation::TrailingDots), "May");
    assert_eq!(truncate_label("February", None, Truncation::Absolute), "February");
}

#[test]
fn truncation_counts_characters() {
    assert_eq!(truncate_label("héllo wörld", Some(4), Truncation::Absolute), "héll");
    assert_eq!(truncate_label("日本語のラベル", Some(5), Truncation::TrailingDots), "日本...");
}

#[test]
fn each_index_is_placed_once() {
    let cfg = ChartConfig::default();
    let mut placer = LabelPlacer::new(&layout(), &cfg);
    let labels = labels();

    let first = placer.place(&labels, 0, 100.0).expect("label inside plot");
    assert_eq!(first.text, "Jan");
    assert_eq!(first.y, 549.0 + cfg.label_margin);
    assert!(placer.place(&labels, 0, 100.0).is_none());
    assert!(placer.place(&labels, 0, 300.0).is_none());
}

#[test]
fn out_of_box_label_is_skipped_but_marked() {
    let mut placer = LabelPlacer::new(&layout(), &ChartConfig::default());
    let labels = labels();

    assert!(placer.place(&labels, 1, 790.0).is_none());
    assert!(placer.is_seen(1));
    assert!(placer.place(&labels, 1, 400.0).is_none());
}

#[test]
fn missing_label_is_ignored() {
    let mut placer = LabelPlacer::new(&layout(), &ChartConfig::default());
    assert!(placer.place(&labels(), 7, 400.0).is_none());
    assert!(!placer.is_seen(7));
}

#[test]
fn odd_indices_are_staggered_and_truncated() {
    let cfg = ChartConfig {
        label_stagger_height: 12.0,
        label_max_size: Some(6),
        label_truncation: Truncation::TrailingDots,
        ..ChartConfig::default()
    };
    let mut placer = LabelPlacer::new(&layout(), &cfg);
    let labels = labels();

    let even = placer.place(&labels, 2, 400.0).expect("even label");
    let odd = placer.place(&labels, 1, 300.0).expect("odd label");
    assert_eq!(even.text, "Sep...");
    assert_eq!(odd.y - even.y, 12.0);
}
