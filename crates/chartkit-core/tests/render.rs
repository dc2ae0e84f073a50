// File: crates/chartkit-core/tests/render.rs
// Purpose: Render pipeline against the recording backend: draw order, markers, variants.

use chartkit_core::kind::ReferenceLine;
use chartkit_core::theme::Theme;
use chartkit_core::{
    Chart, ChartData, ChartKind, Dataset, DrawCall, FontSpec, LineOptions, RecordingBackend, RenderOptions,
};

fn line_chart() -> Chart {
    let mut data = ChartData::new(0.0, 100.0).with_labels([(0, "Q1"), (1, "Q2"), (2, "Q3"), (3, "Q4")]);
    data.push(Dataset::new("Data", vec![0.1, 0.5, 0.3, 0.9]));
    let mut chart = Chart::line(data);
    chart.config.title = Some("Test".into());
    chart.config.theme = Theme::light();
    chart
}

fn render(chart: &Chart) -> RecordingBackend {
    let mut backend = RecordingBackend::new();
    chart.render(&mut backend, &RenderOptions::default()).expect("render");
    backend
}

#[test]
fn chart_without_data_draws_nothing() {
    let chart = Chart::line(ChartData::new(0.0, 10.0));
    assert!(render(&chart).calls.is_empty());

    let mut chart = Chart::bar(ChartData::new(0.0, 10.0));
    chart.add_dataset(Dataset::new("empty", Vec::new()));
    assert!(render(&chart).calls.is_empty());
}

#[test]
fn background_comes_first_then_legend_markers_title() {
    let backend = render(&line_chart());
    assert!(matches!(backend.calls[0], DrawCall::Rectangle { x1, y1, x2, y2, .. }
        if (x1, y1, x2, y2) == (0.0, 0.0, 800.0, 600.0)));

    let texts: Vec<&str> = backend.texts().collect();
    assert_eq!(&texts[..7], &["Data", "0", "25", "50", "75", "100", "Test"]);
    assert_eq!(&texts[7..], &["Q1", "Q2", "Q3", "Q4"]);
}

#[test]
fn title_is_bold_and_centered() {
    let backend = render(&line_chart());
    let (x, y, font) = backend
        .calls
        .iter()
        .find_map(|c| match c {
            DrawCall::Text { text, x, y, font, .. } if text == "Test" => Some((*x, *y, *font)),
            _ => None,
        })
        .expect("title drawn");
    assert_eq!(font, FontSpec::bold(36.0));
    assert!((x - (800.0 - 4.0 * 36.0 * 0.6) / 2.0).abs() < 1e-9);
    assert_eq!(y, 20.0);
}

#[test]
fn line_chart_draws_polyline_and_dots() {
    let backend = render(&line_chart());
    let circles = backend.calls.iter().filter(|c| matches!(c, DrawCall::Circle { .. })).count();
    let segments = backend
        .calls
        .iter()
        .filter(|c| matches!(c, DrawCall::Line { stroke, .. } if stroke.width == 2.0))
        .count();
    assert_eq!(circles, 4);
    assert_eq!(segments, 3);
}

#[test]
fn hidden_line_markers_keep_the_baseline() {
    let chart = line_chart();
    assert!(chart.config.hide_line_markers);
    let frame = chart.layout(&RecordingBackend::new(), &RenderOptions::default()).expect("layout");
    let l = frame.layout;
    let backend = render(&chart);

    let horizontal = backend
        .calls
        .iter()
        .filter(|c| matches!(c, DrawCall::Line { from, to, stroke }
            if stroke.width == 1.0 && from.1 == to.1 && from.0 == l.graph_left && to.0 == l.graph_right))
        .count();
    assert_eq!(horizontal, 1);
}

#[test]
fn shown_line_markers_span_every_increment() {
    let mut chart = line_chart();
    chart.config.hide_line_markers = false;
    let frame = chart.layout(&RecordingBackend::new(), &RenderOptions::default()).expect("layout");
    let l = frame.layout;
    let backend = render(&chart);

    let ys: Vec<f64> = backend
        .calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::Line { from, to, stroke }
                if stroke.width == 1.0 && from.1 == to.1 && from.0 == l.graph_left && to.0 == l.graph_right =>
            {
                Some(from.1)
            }
            _ => None,
        })
        .collect();
    assert_eq!(ys.len(), 5);
    assert_eq!(ys[0], l.graph_bottom);
    assert!((ys[4] - l.graph_top).abs() < 1e-9);
}

#[test]
fn reference_line_uses_red_default() {
    let mut chart = line_chart();
    chart.kind = ChartKind::Line(LineOptions {
        reference_lines: vec![ReferenceLine::at_value(0.5)],
        ..LineOptions::default()
    });
    let backend = render(&chart);
    let refs: Vec<_> = backend
        .calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::Line { stroke, .. } if stroke.width == 5.0 => Some(stroke.color),
            _ => None,
        })
        .collect();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0], chartkit_core::Rgba::rgb(255, 0, 0));
}

#[test]
fn bars_fill_from_the_bottom_and_label_group_centers() {
    let mut data = ChartData::new(0.0, 10.0).with_labels([(0, "Q1"), (1, "Q2")]);
    data.push(Dataset::new("Sales", vec![0.5, 1.0]));
    let mut chart = Chart::bar(data);
    chart.config.theme = Theme::light();
    let frame = chart.layout(&RecordingBackend::new(), &RenderOptions::default()).expect("layout");
    let l = frame.layout;
    let color = frame.colors[0];
    let backend = render(&chart);

    let bars: Vec<(f64, f64)> = backend
        .calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::Rectangle { y1, y2, fill, .. } if *fill == color && *y2 == l.graph_bottom - 1.0 => {
                Some((*y1, *y2))
            }
            _ => None,
        })
        .collect();
    assert_eq!(bars.len(), 2);
    assert!((bars[0].0 - (l.graph_top + l.graph_height * 0.5 + 1.0)).abs() < 1e-9);
    assert_eq!(bars[1].0, l.graph_top + 1.0);

    let texts: Vec<&str> = backend.texts().collect();
    assert!(texts.contains(&"Q1") && texts.contains(&"Q2"));
}

#[test]
fn dot_chart_draws_left_labels_and_circles() {
    let mut data = ChartData::new(0.0, 10.0).with_labels([(0, "Alpha"), (1, "Beta")]);
    data.push(Dataset::new("Score", vec![0.2, 0.8]));
    let chart = Chart::dot(data);
    let backend = render(&chart);

    let circles = backend.calls.iter().filter(|c| matches!(c, DrawCall::Circle { radius, .. } if *radius == 6.0)).count();
    assert_eq!(circles, 2);
    let texts: Vec<&str> = backend.texts().collect();
    assert!(texts.contains(&"Alpha") && texts.contains(&"Beta"));
}

#[test]
fn y_axis_label_is_rotated() {
    let mut chart = line_chart();
    chart.config.y_axis_label = Some("Revenue".into());
    chart.config.x_axis_label = Some("Quarter".into());
    let backend = render(&chart);
    let rotation = backend.calls.iter().find_map(|c| match c {
        DrawCall::Text { text, rotation, .. } if text == "Revenue" => Some(*rotation),
        _ => None,
    });
    assert_eq!(rotation, Some(-90.0));
    assert!(backend.texts().any(|t| t == "Quarter"));
}

#[test]
fn gradient_background_paints_bands() {
    let mut chart = line_chart();
    chart.config.theme = Theme::keynote();
    let backend = render(&chart);
    let bands = backend
        .calls
        .iter()
        .take_while(|c| matches!(c, DrawCall::Rectangle { x1, x2, .. } if *x1 == 0.0 && *x2 == 800.0))
        .count();
    assert_eq!(bands, 600);
}

#[test]
fn render_to_file_writes_last() {
    let mut backend = RecordingBackend::new();
    line_chart()
        .render_to_file(&mut backend, &RenderOptions::default(), "target/out/recorded.png")
        .expect("render");
    assert!(matches!(backend.calls.last(), Some(DrawCall::Write(p)) if p.ends_with("recorded.png")));
}

#[test]
fn flat_range_keeps_markers_inside_plot() {
    let mut data = ChartData::new(5.0, 5.0);
    data.push(Dataset::new("flat", vec![0.0, 0.0, 0.0]));
    let mut chart = Chart::bar(data);
    chart.config.marker_count = Some(5);
    chart.config.hide_legend = true;
    chart.config.theme = Theme::light();
    let frame = chart.layout(&RecordingBackend::new(), &RenderOptions::default()).expect("layout");
    let l = frame.layout;
    let backend = render(&chart);

    let ys: Vec<f64> = backend
        .calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::Line { from, to, stroke }
                if stroke.width == 1.0 && from.1 == to.1 && from.0 == l.graph_left && to.0 == l.graph_right =>
            {
                Some(from.1)
            }
            _ => None,
        })
        .collect();
    assert_eq!(ys.len(), 2);
    assert!(ys.iter().all(|&y| y >= l.graph_top - 1e-9 && y <= l.graph_bottom + 1e-9), "{ys:?}");

    let texts: Vec<&str> = backend.texts().collect();
    assert_eq!(texts, vec!["5", "6"]);
}

#[test]
fn uneven_axis_top_gets_a_marker() {
    let mut data = ChartData::new(0.0, 21.0);
    data.push(Dataset::new("a", vec![0.2, 1.0]));
    let mut chart = Chart::bar(data);
    chart.config.hide_legend = true;
    let texts: Vec<String> = render(&chart).texts().map(str::to_string).collect();
    assert_eq!(texts, vec!["0", "7", "14", "21"]);
}

#[test]
fn vertical_markers_drop_through_each_column() {
    let mut chart = line_chart();
    chart.kind = ChartKind::Line(LineOptions { show_vertical_markers: true, ..LineOptions::default() });
    let frame = chart.layout(&RecordingBackend::new(), &RenderOptions::default()).expect("layout");
    let l = frame.layout;
    let marker = chart.config.theme.marker_color;
    let backend = render(&chart);

    let columns = backend
        .calls
        .iter()
        .filter(|c| matches!(c, DrawCall::Line { from, to, stroke }
            if stroke.color == marker && from.0 == to.0 && from.1 == l.graph_top && to.1 == l.graph_bottom))
        .count();
    assert_eq!(columns, 4);

    // off by default
    let plain = render(&line_chart());
    assert!(!plain.calls.iter().any(|c| matches!(c, DrawCall::Line { from, to, .. }
        if from.0 == to.0 && from.1 == l.graph_top && to.1 == l.graph_bottom)));
}
