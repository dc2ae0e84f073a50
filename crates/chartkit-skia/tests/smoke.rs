// File: crates/chartkit-skia/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNG/JPEG through the Skia backend.

use chartkit_core::{Chart, ChartData, Dataset, DrawBackend, RenderOptions};
use chartkit_skia::SkiaBackend;

fn sample_line() -> Chart {
    let mut data = ChartData::new(0.0, 76.0).with_labels([(0, "Ola"), (1, "Hello")]);
    data.push(Dataset::new("Marco", vec![20.0 / 76.0, 23.0 / 76.0, 19.0 / 76.0, 8.0 / 76.0]));
    data.push(Dataset::new("John", vec![1.0 / 76.0, 53.0 / 76.0, 1.0, 18.0 / 76.0]));
    let mut chart = Chart::line(data);
    chart.config.title = Some("A Line Graph".into());
    chart
}

#[test]
fn render_smoke_png() {
    let chart = sample_line();
    let opts = RenderOptions::default();
    let mut backend = SkiaBackend::new(&opts).expect("surface");
    let out = std::path::PathBuf::from("target/test_out/smoke_line.png");

    chart.render_to_file(&mut backend, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = backend.png_bytes().expect("png bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (800, 600));
}

#[test]
fn scaled_surface_matches_requested_size() {
    let chart = sample_line();
    let opts = RenderOptions { width: 400, height: 300 };
    let mut backend = SkiaBackend::new(&opts).expect("surface");
    chart.render(&mut backend, &opts).expect("render");
    assert_eq!((backend.width(), backend.height()), (400, 300));
    let img = image::load_from_memory(&backend.png_bytes().expect("png")).expect("decode");
    assert_eq!((img.width(), img.height()), (400, 300));
}

#[test]
fn jpeg_by_extension() {
    let chart = sample_line();
    let opts = RenderOptions::default();
    let mut backend = SkiaBackend::new(&opts).expect("surface");
    let out = std::path::PathBuf::from("target/test_out/smoke_line.jpg");
    chart.render_to_file(&mut backend, &opts, &out).expect("render jpeg");
    let bytes = std::fs::read(&out).expect("read jpeg");
    assert!(bytes.starts_with(&[0xFF, 0xD8]), "should be JPEG SOI marker");
}

#[test]
fn unknown_extension_is_an_error() {
    let opts = RenderOptions::default();
    let mut backend = SkiaBackend::new(&opts).expect("surface");
    let err = backend.write(std::path::Path::new("target/test_out/chart.xyz")).unwrap_err();
    assert!(err.to_string().contains("unsupported image extension"));
}
