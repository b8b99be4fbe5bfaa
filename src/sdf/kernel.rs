//! Per-point signed distance: nearest vertex, its outgoing edge, and the
//! cross-product sign test.

use crate::boundary::Boundary;
use crate::errors::{SdfError, SdfResult};
use crate::float_types::Real;
use crate::spatial::VertexIndex;
use nalgebra::{Point2, Vector2, Vector3};
use tracing::warn;

/// z component of `ab × ap`, with both vectors embedded at z = 0.
///
/// Positive when `p` lies to the left of the directed edge `a → b`.
#[inline]
pub fn cross_z(ab: &Vector2<Real>, ap: &Vector2<Real>) -> Real {
    let ab3 = Vector3::new(ab.x, ab.y, 0.0);
    let ap3 = Vector3::new(ap.x, ap.y, 0.0);
    ab3.cross(&ap3).z
}

/// Negative distance right of the edge, positive otherwise; collinear
/// points (`z == 0`) keep the positive sign.
#[inline]
pub fn apply_sign(distance: Real, z: Real) -> Real {
    if z < 0.0 { -distance } else { distance }
}

/// Shared, read-only state for evaluating one boundary: the boundary itself
/// and a spatial index over its vertices.
#[derive(Debug)]
pub struct SignedDistanceKernel<'a> {
    boundary: &'a Boundary,
    index: VertexIndex,
}

impl<'a> SignedDistanceKernel<'a> {
    pub fn new(boundary: &'a Boundary) -> SdfResult<Self> {
        if boundary.vertices().is_empty() {
            return Err(SdfError::EmptyBoundary);
        }

        let degenerate = boundary.degenerate_edges();
        if !degenerate.is_empty() {
            warn!(
                count = degenerate.len(),
                first = degenerate[0],
                "boundary has near zero-length edges; signs next to them may be unreliable"
            );
        }

        Ok(Self {
            boundary,
            index: VertexIndex::build(boundary.vertices()),
        })
    }

    pub const fn boundary(&self) -> &Boundary {
        self.boundary
    }

    pub const fn index(&self) -> &VertexIndex {
        &self.index
    }

    /// Signed distance from `p` to the nearest boundary vertex.
    pub fn signed_distance(&self, p: &Point2<Real>) -> SdfResult<Real> {
        let nearest = self.index.nearest(p).ok_or(SdfError::EmptyBoundary)?;
        let edge = self.boundary.outgoing().require(nearest.vertex)?;
        let (a, b) = self.boundary.segment(edge);

        let z = cross_z(&(b - a), &(p - a));
        Ok(apply_sign(nearest.distance, z))
    }
}
