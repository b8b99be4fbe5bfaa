//! Synthetic boundaries for tests and demonstrations.

use crate::boundary::Boundary;
use crate::errors::{SdfError, SdfResult};
use crate::float_types::{Real, TAU};
use crate::grid::linspace;
use nalgebra::Point2;

impl Boundary {
    /// Circle of `radius` around the origin sampled with `point_count`
    /// vertices, traversed counter-clockwise.
    ///
    /// Angles run over `[0, 2π]` inclusive, so the last vertex lands on top
    /// of the first one; the closing edge `[n - 1, 0]` is therefore (almost)
    /// zero length. This keeps the vertex set identical to reference data
    /// generated the same way.
    ///
    /// # Example
    /// ```
    /// # use msh2sdf::boundary::Boundary;
    /// let circle = Boundary::circle(2.0, 1000).unwrap();
    /// assert_eq!(circle.vertices().len(), 1000);
    /// assert_eq!(circle.edges()[999], [999, 0]);
    /// ```
    pub fn circle(radius: Real, point_count: usize) -> SdfResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SdfError::InvalidShape(format!(
                "circle radius must be positive and finite, got {radius}"
            )));
        }
        if point_count < 3 {
            return Err(SdfError::InvalidShape(format!(
                "circle needs at least 3 points, got {point_count}"
            )));
        }

        let vertices = linspace(0.0, TAU, point_count)
            .into_iter()
            .map(|theta| Point2::new(radius * theta.cos(), radius * theta.sin()))
            .collect();

        Self::new(vertices, closed_loop(point_count))
    }

    /// Closed polygon through `points` in the given order; the last edge
    /// returns to the first point.
    pub fn polygon(points: &[[Real; 2]]) -> SdfResult<Self> {
        if points.len() < 3 {
            return Err(SdfError::InvalidShape(format!(
                "polygon needs at least 3 points, got {}",
                points.len()
            )));
        }
        Self::from_arrays(points, &closed_loop(points.len()))
    }
}

/// `[i, i + 1]` for every vertex, wrapping the last one back to `0`.
fn closed_loop(n: usize) -> Vec<[usize; 2]> {
    (0..n).map(|i| [i, (i + 1) % n]).collect()
}

/// Coordinate and connectivity arrays of a circular boundary, see
/// [`Boundary::circle`].
pub fn generate_circle(
    radius: Real,
    point_count: usize,
) -> SdfResult<(Vec<[Real; 2]>, Vec<[usize; 2]>)> {
    let circle = Boundary::circle(radius, point_count)?;
    let x = circle.vertices().iter().map(|p| [p.x, p.y]).collect();
    Ok((x, circle.edges().to_vec()))
}
