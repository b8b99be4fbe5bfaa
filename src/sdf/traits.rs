//! Traits defining signed distance evaluation strategies for dependency inversion

use crate::errors::SdfResult;
use crate::float_types::Real;
use crate::sdf::kernel::SignedDistanceKernel;
use nalgebra::Point2;

/// Core evaluation operation: map every query point to its signed distance.
///
/// Implementations must return one value per point, in the order of
/// `points`, or fail without a partial result.
pub trait SdfOps {
    fn evaluate(
        &self,
        kernel: &SignedDistanceKernel<'_>,
        points: &[Point2<Real>],
    ) -> SdfResult<Vec<Real>>;
}
