//! Serial implementation of signed distance evaluation

use crate::errors::SdfResult;
use crate::float_types::Real;
use crate::sdf::kernel::SignedDistanceKernel;
use crate::sdf::traits::SdfOps;
use nalgebra::Point2;

/// Serial implementation of `SdfOps`
pub struct SerialSdfOps;

impl SerialSdfOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SerialSdfOps {
    fn default() -> Self {
        Self::new()
    }
}

impl SdfOps for SerialSdfOps {
    fn evaluate(
        &self,
        kernel: &SignedDistanceKernel<'_>,
        points: &[Point2<Real>],
    ) -> SdfResult<Vec<Real>> {
        points.iter().map(|p| kernel.signed_distance(p)).collect()
    }
}
