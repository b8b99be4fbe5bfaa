//! Plotting of signed distance fields.
//!
//! A field is drawn as a filled contour map over the grid extent with a
//! red-blue diverging palette (negative red, positive blue), the boundary
//! vertices overlaid as black dots and a colour bar on the right.

#[cfg(feature = "image-io")]
pub mod png;

#[cfg(feature = "svg-io")]
pub mod svg;

use crate::float_types::Real;
use crate::grid::BackgroundGrid;
use crate::sdf::SignedDistanceField;
use nalgebra::Point2;
use std::path::Path;

/// Generic I/O and format‑conversion errors.
///
/// Output formats are behind cargo feature‑flags.
/// When a feature is disabled the corresponding variant is *not*
/// constructed in user code.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    MalformedInput(String),
    Unimplemented(String),

    #[cfg(feature = "image-io")]
    /// Error bubbled up from the `image` crate while encoding.
    Image(::image::ImageError),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),

            MalformedInput(msg) => write!(f, "Input is malformed: {msg}"),
            Unimplemented(msg) => write!(f, "Feature is not implemented: {msg}"),

            #[cfg(feature = "image-io")]
            Image(error) => write!(f, "Image encoding error: {error}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

#[cfg(feature = "image-io")]
impl From<::image::ImageError> for IoError {
    fn from(value: ::image::ImageError) -> Self {
        Self::Image(value)
    }
}

/// Appearance of a field plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotOptions {
    /// Edge length of the square plot area in pixels (user units for SVG).
    pub size: u32,
    /// Number of filled contour levels.
    pub levels: usize,
    /// Radius of the boundary vertex markers.
    pub marker_radius: Real,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            size: 600,
            levels: 50,
            marker_radius: 1.0,
        }
    }
}

/// Width of the colour bar strip right of the plot area.
pub(crate) const COLORBAR_MARGIN: u32 = 50;
pub(crate) const COLORBAR_WIDTH: u32 = 20;

// ColorBrewer RdBu, red (low) to blue (high)
const RDBU: [[u8; 3]; 11] = [
    [103, 0, 31],
    [178, 24, 43],
    [214, 96, 77],
    [244, 165, 130],
    [253, 219, 199],
    [247, 247, 247],
    [209, 229, 240],
    [146, 197, 222],
    [67, 147, 195],
    [33, 102, 172],
    [5, 48, 97],
];

/// Colour of `t` in `[0, 1]` on the red-blue palette.
pub fn rdbu(t: Real) -> [u8; 3] {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };
    let scaled = t * (RDBU.len() - 1) as Real;
    let i = (scaled.floor() as usize).min(RDBU.len() - 2);
    let frac = scaled - i as Real;
    let (lo, hi) = (RDBU[i], RDBU[i + 1]);
    core::array::from_fn(|c| {
        let v = lo[c] as Real + (hi[c] as Real - lo[c] as Real) * frac;
        v.round() as u8
    })
}

/// Maps field values onto the filled-contour palette.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContourScale {
    min: Real,
    max: Real,
    levels: usize,
}

impl ContourScale {
    pub(crate) fn new(field: &SignedDistanceField, levels: usize) -> Self {
        Self {
            min: field.min(),
            max: field.max(),
            levels: levels.max(1),
        }
    }

    /// Position of `value` in `[0, 1]`, snapped to the middle of its level band.
    pub(crate) fn level(&self, value: Real) -> Real {
        let span = self.max - self.min;
        if !span.is_finite() || span <= 0.0 {
            return 0.5;
        }
        let t = ((value - self.min) / span).clamp(0.0, 1.0);
        let band = ((t * self.levels as Real).floor() as usize).min(self.levels - 1);
        (band as Real + 0.5) / self.levels as Real
    }

    pub(crate) fn color(&self, value: Real) -> [u8; 3] {
        rdbu(self.level(value))
    }

    pub(crate) const fn range(&self) -> (Real, Real) {
        (self.min, self.max)
    }
}

/// Field value at `p`, falling back to the only node of a single-sample grid.
pub(crate) fn field_value(field: &SignedDistanceField, p: &Point2<Real>) -> Real {
    field
        .sample(p)
        .or_else(|| field.values().first().copied())
        .unwrap_or(0.0)
}

/// Plot `field` with the boundary `vertices` overlaid and save it to `path`.
///
/// The format follows the file extension: `.png` (feature `image-io`) or
/// `.svg` (feature `svg-io`).
pub fn plot_sdf(
    field: &SignedDistanceField,
    vertices: &[Point2<Real>],
    path: impl AsRef<Path>,
) -> Result<(), IoError> {
    plot_sdf_with(field, vertices, path, &PlotOptions::default())
}

/// Plot the `(signed_distances, grid_points)` pair returned by
/// [`crate::compute_sdf`], see [`plot_sdf`].
///
/// Fails with [`IoError::MalformedInput`] when the points are not a square
/// background grid or the two slices differ in length.
pub fn plot_sdf_arrays(
    signed_distances: &[Real],
    grid_points: &[Point2<Real>],
    vertices: &[Point2<Real>],
    path: impl AsRef<Path>,
) -> Result<(), IoError> {
    let field = BackgroundGrid::from_points(grid_points)
        .and_then(|grid| SignedDistanceField::from_parts(signed_distances.to_vec(), grid))
        .map_err(|e| IoError::MalformedInput(e.to_string()))?;
    plot_sdf(&field, vertices, path)
}

pub fn plot_sdf_with(
    field: &SignedDistanceField,
    vertices: &[Point2<Real>],
    path: impl AsRef<Path>,
    options: &PlotOptions,
) -> Result<(), IoError> {
    let path = path.as_ref();
    if field.is_empty() {
        return Err(IoError::MalformedInput("field has no values".to_string()));
    }
    if options.size == 0 {
        return Err(IoError::MalformedInput("plot size must be positive".to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        #[cfg(feature = "image-io")]
        "png" => png::write_png(field, vertices, path, options),
        #[cfg(feature = "svg-io")]
        "svg" => svg::write_svg(field, vertices, path, options),
        other => Err(IoError::Unimplemented(format!(
            "no plot backend for extension {other:?}"
        ))),
    }
}
