//! Raster plots of signed distance fields using the `image` crate.

use super::{COLORBAR_MARGIN, COLORBAR_WIDTH, ContourScale, IoError, PlotOptions, field_value};
use crate::float_types::Real;
use crate::sdf::SignedDistanceField;
use ::image::{Rgb, RgbImage};
use nalgebra::Point2;
use std::path::Path;

/// Render `field` into an RGB image.
///
/// The plot area is `options.size` pixels square and covers the grid extent
/// `[-side, side]²` with +y pointing up; the colour bar occupies the strip to
/// its right.
pub fn render_sdf(
    field: &SignedDistanceField,
    vertices: &[Point2<Real>],
    options: &PlotOptions,
) -> RgbImage {
    let size = options.size.max(1);
    let side = field.grid().side();
    let scale = ContourScale::new(field, options.levels);
    let mut img = RgbImage::from_pixel(size + COLORBAR_MARGIN, size, Rgb([255, 255, 255]));

    let to_world = |px: u32| -side + (px as Real + 0.5) / size as Real * 2.0 * side;

    for py in 0..size {
        let y = -to_world(py);
        for px in 0..size {
            let p = Point2::new(to_world(px), y);
            img.put_pixel(px, py, Rgb(scale.color(field_value(field, &p))));
        }
    }

    // boundary markers
    let radius = options.marker_radius.max(0.5);
    let reach = radius.ceil() as i64;
    let to_pixel = |c: Real| (c + side) / (2.0 * side) * size as Real;
    for v in vertices {
        let cx = to_pixel(v.x);
        let cy = size as Real - to_pixel(v.y);
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let px = cx.floor() as i64 + dx;
                let py = cy.floor() as i64 + dy;
                if px < 0 || py < 0 || px >= size as i64 || py >= size as i64 {
                    continue;
                }
                let ddx = px as Real + 0.5 - cx;
                let ddy = py as Real + 0.5 - cy;
                if ddx * ddx + ddy * ddy <= radius * radius {
                    img.put_pixel(px as u32, py as u32, Rgb([0, 0, 0]));
                }
            }
        }
    }

    // colour bar, max at the top
    let (lo, hi) = scale.range();
    let x0 = size + (COLORBAR_MARGIN - COLORBAR_WIDTH) / 2;
    for py in 0..size {
        let t = if size > 1 {
            1.0 - py as Real / (size - 1) as Real
        } else {
            0.5
        };
        let color = Rgb(scale.color(lo + t * (hi - lo)));
        for px in x0..x0 + COLORBAR_WIDTH {
            img.put_pixel(px, py, color);
        }
    }

    img
}

/// Render `field` and save it as a PNG file.
pub fn write_png(
    field: &SignedDistanceField,
    vertices: &[Point2<Real>],
    path: &Path,
    options: &PlotOptions,
) -> Result<(), IoError> {
    render_sdf(field, vertices, options).save(path)?;
    Ok(())
}
