#![cfg(feature = "svg-io")]

mod support;

use msh2sdf::{
    compute_sdf,
    grid::GridSpec,
    io::{IoError, PlotOptions, plot_sdf, plot_sdf_arrays, svg::to_svg},
    sdf::compute_field,
};

#[test]
fn svg_has_cells_markers_and_title() {
    let circle = support::reference_circle();
    let field = compute_field(&circle, GridSpec::new(2.5, 6)).unwrap();
    let options = PlotOptions {
        levels: 10,
        ..PlotOptions::default()
    };
    let text = to_svg(&field, circle.vertices(), &options).to_string();

    // 36 grid cells plus 10 colour bar bands
    assert_eq!(text.matches("<rect").count(), 36 + 10);
    assert_eq!(text.matches("<circle").count(), 1000);
    assert!(text.contains("Signed Distance Field"));
}

#[test]
fn plot_writes_svg() {
    let circle = support::reference_circle();
    let field = compute_field(&circle, GridSpec::new(2.5, 8)).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sdf.svg");

    plot_sdf(&field, circle.vertices(), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("<svg"));
}

#[test]
fn plot_arrays_from_compute_sdf() {
    let circle = support::reference_circle();
    let x: Vec<_> = circle.vertices().iter().map(|v| [v.x, v.y]).collect();
    let (sdf, points) = compute_sdf(&x, circle.edges(), 2.5, 6).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("arrays.svg");

    plot_sdf_arrays(&sdf, &points, circle.vertices(), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.matches("<circle").count(), 1000);

    let err = plot_sdf_arrays(&sdf[1..], &points, circle.vertices(), &path).unwrap_err();
    assert!(matches!(err, IoError::MalformedInput(_)));
    let err = plot_sdf_arrays(&sdf, &points[..30], circle.vertices(), &path).unwrap_err();
    assert!(matches!(err, IoError::MalformedInput(_)));
}
