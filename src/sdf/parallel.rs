//! Parallel implementation of signed distance evaluation

use crate::errors::SdfResult;
use crate::float_types::Real;
use crate::sdf::kernel::SignedDistanceKernel;
use crate::sdf::traits::SdfOps;
use nalgebra::Point2;
use rayon::prelude::*;

/// Parallel implementation of `SdfOps`.
///
/// Grid points are split into chunks of `min_chunk` or more and handed to the
/// rayon pool; each chunk writes only its own slice of the output, and the
/// kernel is shared read-only.
pub struct ParallelSdfOps {
    min_chunk: usize,
}

impl ParallelSdfOps {
    pub const fn new() -> Self {
        Self { min_chunk: 256 }
    }

    pub const fn with_min_chunk(min_chunk: usize) -> Self {
        Self {
            min_chunk: if min_chunk == 0 { 1 } else { min_chunk },
        }
    }
}

impl Default for ParallelSdfOps {
    fn default() -> Self {
        Self::new()
    }
}

impl SdfOps for ParallelSdfOps {
    fn evaluate(
        &self,
        kernel: &SignedDistanceKernel<'_>,
        points: &[Point2<Real>],
    ) -> SdfResult<Vec<Real>> {
        points
            .par_iter()
            .with_min_len(self.min_chunk)
            .map(|p| kernel.signed_distance(p))
            .collect()
    }
}
