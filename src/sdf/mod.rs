//! Signed distance fields of a boundary over a background grid
//!
//! This module provides evaluation with dependency inversion, allowing for
//! different strategies (serial/parallel) behind [`SdfOps`].

pub mod kernel;
pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use kernel::SignedDistanceKernel;
pub use serial::SerialSdfOps;
pub use traits::SdfOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelSdfOps;

use crate::boundary::Boundary;
use crate::errors::{SdfError, SdfResult};
use crate::float_types::Real;
use crate::grid::{BackgroundGrid, GridSpec};
use nalgebra::Point2;
use tracing::debug;

/// Signed distance for each of `points`, in order, using the crate's
/// default evaluation strategy.
pub fn evaluate_points(boundary: &Boundary, points: &[Point2<Real>]) -> SdfResult<Vec<Real>> {
    #[cfg(not(feature = "parallel"))]
    let ops = SerialSdfOps::new();
    #[cfg(feature = "parallel")]
    let ops = ParallelSdfOps::new();

    evaluate_points_with(&ops, boundary, points)
}

/// Signed distance for each of `points` with an explicit strategy.
pub fn evaluate_points_with<O: SdfOps>(
    ops: &O,
    boundary: &Boundary,
    points: &[Point2<Real>],
) -> SdfResult<Vec<Real>> {
    let kernel = SignedDistanceKernel::new(boundary)?;
    debug!(points = points.len(), "evaluating signed distances");
    let values = ops.evaluate(&kernel, points)?;
    debug!(values = values.len(), "signed distance evaluation finished");
    Ok(values)
}

/// Signed distances sampled on a [`BackgroundGrid`].
///
/// `values()[i]` belongs to `grid().points()[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedDistanceField {
    values: Vec<Real>,
    grid: BackgroundGrid,
}

impl SignedDistanceField {
    /// Evaluate `boundary` on every node of `grid`.
    pub fn compute(boundary: &Boundary, grid: BackgroundGrid) -> SdfResult<Self> {
        let values = evaluate_points(boundary, grid.points())?;
        Ok(Self { values, grid })
    }

    pub fn compute_with<O: SdfOps>(
        ops: &O,
        boundary: &Boundary,
        grid: BackgroundGrid,
    ) -> SdfResult<Self> {
        let values = evaluate_points_with(ops, boundary, grid.points())?;
        Ok(Self { values, grid })
    }

    /// Pair precomputed `values` with the grid they were evaluated on.
    ///
    /// Together with [`BackgroundGrid::from_points`] this turns the
    /// `(signed_distances, grid_points)` pair from [`compute_sdf`] back into
    /// a field, e.g. for [`crate::plot_sdf`].
    pub fn from_parts(values: Vec<Real>, grid: BackgroundGrid) -> SdfResult<Self> {
        if values.len() != grid.len() {
            return Err(SdfError::LengthMismatch {
                values: values.len(),
                points: grid.len(),
            });
        }
        Ok(Self { values, grid })
    }

    pub fn values(&self) -> &[Real] {
        &self.values
    }

    pub const fn grid(&self) -> &BackgroundGrid {
        &self.grid
    }

    /// `(signed_distances, grid_points)`
    pub fn into_parts(self) -> (Vec<Real>, Vec<Point2<Real>>) {
        (self.values, self.grid.into_points())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at lattice node (`row`, `col`); see [`BackgroundGrid::index_of`].
    pub fn value_at(&self, row: usize, col: usize) -> Option<Real> {
        self.grid.index_of(row, col).map(|i| self.values[i])
    }

    pub fn min(&self) -> Real {
        self.values.iter().copied().fold(Real::INFINITY, Real::min)
    }

    pub fn max(&self) -> Real {
        self.values.iter().copied().fold(Real::NEG_INFINITY, Real::max)
    }

    /// Bilinear interpolation of the field at `p`.
    ///
    /// `None` when `p` lies outside the grid extent or the grid has a
    /// single sample per axis.
    pub fn sample(&self, p: &Point2<Real>) -> Option<Real> {
        let n = self.grid.nseed();
        let side = self.grid.side();
        if n < 2 || p.x.abs() > side || p.y.abs() > side {
            return None;
        }

        let h = self.grid.spacing();
        let locate = |c: Real| {
            let u = (c + side) / h;
            let i = (u.floor() as usize).min(n - 2);
            (i, (u - i as Real).clamp(0.0, 1.0))
        };
        let (col, tx) = locate(p.x);
        let (row, ty) = locate(p.y);

        let v00 = self.value_at(row, col)?;
        let v01 = self.value_at(row, col + 1)?;
        let v10 = self.value_at(row + 1, col)?;
        let v11 = self.value_at(row + 1, col + 1)?;

        let bottom = v00 + (v01 - v00) * tx;
        let top = v10 + (v11 - v10) * tx;
        Some(bottom + (top - bottom) * ty)
    }
}

/// Evaluate `boundary` on a square grid described by `spec`.
pub fn compute_field(boundary: &Boundary, spec: GridSpec) -> SdfResult<SignedDistanceField> {
    SignedDistanceField::compute(boundary, spec.build()?)
}

/// Signed distance from the boundary `(x, t)` to every node of a square grid
/// of half-extent `side` with `nseed` samples per axis.
///
/// Returns `(signed_distances, grid_points)` with matching order.
///
/// # Example
/// ```
/// # use msh2sdf::{compute_sdf, generate_circle};
/// let (x, t) = generate_circle(2.0, 1000).unwrap();
/// let (sdf, grid) = compute_sdf(&x, &t, 2.5, 5).unwrap();
/// assert_eq!(sdf.len(), 25);
/// assert_eq!(grid.len(), 25);
/// assert!((sdf[7] - 2.0).abs() < 1e-6); // grid center, inside the circle
/// ```
pub fn compute_sdf(
    x: &[[Real; 2]],
    t: &[[usize; 2]],
    side: Real,
    nseed: usize,
) -> SdfResult<(Vec<Real>, Vec<Point2<Real>>)> {
    let boundary = Boundary::from_arrays(x, t)?;
    Ok(compute_field(&boundary, GridSpec::new(side, nseed))?.into_parts())
}
