// File: crates/chartkit-examples/src/bin/charts.rs
// Summary: Renders line, bar and dot demo charts to PNG under target/out/.

use anyhow::Result;
use chartkit_core::{
    theme, Chart, ChartData, ChartKind, Dataset, LineOptions, ReferenceLine, RenderOptions, Rgba, Truncation,
};
use chartkit_skia::SkiaBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Normalize raw values against the chart's range.
fn normalized(values: &[f64], min: f64, max: f64) -> Vec<f64> {
    let spread = (max - min).max(f64::EPSILON);
    values.iter().map(|v| (v - min) / spread).collect()
}

fn line_chart() -> Result<Chart> {
    let (min, max) = (0.0, 100.0);
    let mut data = ChartData::new(min, max).with_labels([(0, "Q1"), (1, "Q2"), (2, "Q3"), (3, "Q4")]);
    data.push(Dataset::new("Marco", normalized(&[20.0, 23.0, 19.0, 8.0], min, max)));
    let green = Rgba::named("green")?;
    data.push(Dataset::new("John", normalized(&[1.0, 53.0, 76.0, 18.0], min, max)).with_color(green));
    let opts = LineOptions {
        reference_lines: vec![ReferenceLine::at_value(0.5)],
        ..LineOptions::default()
    };
    let mut chart = Chart::new(ChartKind::Line(opts), data);
    chart.config.title = Some("A Line Graph".into());
    chart.config.x_axis_label = Some("Quarter".into());
    chart.config.y_axis_label = Some("Score".into());
    Ok(chart)
}

fn bar_chart() -> Chart {
    let (min, max) = (-40_000.0, 110_000.0);
    let mut data = ChartData::new(min, max).with_labels([
        (0, "January"),
        (1, "February"),
        (2, "March"),
        (3, "April"),
    ]);
    data.push(Dataset::new("large", normalized(&[100_005.0, 35_000.0, -28_000.0, 27_000.0], min, max)));
    data.push(Dataset::new("large2", normalized(&[35_000.0, -38_000.0, 27_000.0, 100_005.0], min, max)));
    let mut chart = Chart::bar(data);
    chart.config.title = Some("Mixed Sign Bars".into());
    chart.config.label_max_size = Some(5);
    chart.config.label_truncation = Truncation::TrailingDots;
    chart.config.theme = theme::find("solarized-light");
    chart
}

fn dot_chart() -> Chart {
    let (min, max) = (0.0, 10.0);
    let mut data = ChartData::new(min, max).with_labels([(0, "Rust"), (1, "Ruby"), (2, "Python")]);
    data.push(Dataset::new("2023", normalized(&[7.0, 4.0, 9.0], min, max)));
    data.push(Dataset::new("2024", normalized(&[9.0, 3.0, 8.5], min, max)));
    let mut chart = Chart::dot(data);
    chart.config.title = Some("Dot Chart".into());
    chart.config.theme = theme::find("dark");
    chart
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let opts = RenderOptions::default();
    let out_dir = std::path::PathBuf::from("target/out");
    for (name, chart) in [("line", line_chart()?), ("bar", bar_chart()), ("dot", dot_chart())] {
        let mut backend = SkiaBackend::new(&opts)?;
        let path = out_dir.join(format!("example_{name}.png"));
        chart.render_to_file(&mut backend, &opts, &path)?;
        info!(chart = name, "rendered");
    }
    Ok(())
}
