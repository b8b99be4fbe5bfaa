//! Vector plots of signed distance fields using the `svg` crate.

use super::{COLORBAR_MARGIN, COLORBAR_WIDTH, ContourScale, IoError, PlotOptions};
use crate::float_types::Real;
use crate::sdf::SignedDistanceField;
use ::svg::Document;
use ::svg::node::element::{Circle, Rectangle, Text};
use nalgebra::Point2;
use std::path::Path;

fn hex([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Build an SVG document for `field`.
///
/// Every grid node becomes one square cell filled with its level colour;
/// vertices are drawn as black circles.
pub fn to_svg(
    field: &SignedDistanceField,
    vertices: &[Point2<Real>],
    options: &PlotOptions,
) -> Document {
    let size = options.size.max(1) as Real;
    let grid = field.grid();
    let side = grid.side();
    let n = grid.nseed();
    let scale = ContourScale::new(field, options.levels);

    let cell = size / n as Real;
    let to_x = |x: Real| (x + side) / (2.0 * side) * size;
    let to_y = |y: Real| size - (y + side) / (2.0 * side) * size;

    let width = (options.size + COLORBAR_MARGIN) as Real;
    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, width, size))
        .set("width", width)
        .set("height", size);

    // cells are centred on their node, so the lattice spans the plot area
    for row in 0..n {
        for col in 0..n {
            let Some(value) = field.value_at(row, col) else {
                continue;
            };
            let rect = Rectangle::new()
                .set("x", col as Real * cell)
                .set("y", size - (row + 1) as Real * cell)
                .set("width", cell)
                .set("height", cell)
                .set("stroke", "none")
                .set("fill", hex(scale.color(value)));
            document = document.add(rect);
        }
    }

    for v in vertices {
        let c = Circle::new()
            .set("cx", to_x(v.x))
            .set("cy", to_y(v.y))
            .set("r", options.marker_radius)
            .set("stroke", "none")
            .set("fill", "black");
        document = document.add(c);
    }

    let (lo, hi) = scale.range();
    let levels = options.levels.max(1);
    let band = size / levels as Real;
    let x0 = size + ((COLORBAR_MARGIN - COLORBAR_WIDTH) / 2) as Real;
    for level in 0..levels {
        let t = (level as Real + 0.5) / levels as Real;
        let rect = Rectangle::new()
            .set("x", x0)
            .set("y", size - (level + 1) as Real * band)
            .set("width", COLORBAR_WIDTH as Real)
            .set("height", band)
            .set("stroke", "none")
            .set("fill", hex(scale.color(lo + t * (hi - lo))));
        document = document.add(rect);
    }

    let title = Text::new("Signed Distance Field")
        .set("x", size / 2.0)
        .set("y", 16.0)
        .set("font-size", 14.0)
        .set("text-anchor", "middle");
    document.add(title)
}

/// Build the SVG document for `field` and save it to `path`.
pub fn write_svg(
    field: &SignedDistanceField,
    vertices: &[Point2<Real>],
    path: &Path,
    options: &PlotOptions,
) -> Result<(), IoError> {
    ::svg::save(path, &to_svg(field, vertices, options))?;
    Ok(())
}
