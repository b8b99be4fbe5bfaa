// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Length below which a boundary edge, or the enclosed area of a boundary,
/// is treated as zero. Degenerate edges are reported when a boundary is
/// evaluated, and [`crate::boundary::Boundary::orientation`] calls a
/// near-zero area undetermined. [`crate::grid::BackgroundGrid::from_points`]
/// uses it, scaled by the grid extent, to match points against a lattice.
///
/// The default follows the precision of [`Real`] (`1e-6` for `f64`, `1e-4`
/// for `f32`). Set `MSH2SDF_TOLERANCE` at build time to change it, or call
/// [`set_tolerance`] before the first boundary is checked.
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-6
    }
}

/// Zero-length threshold for edges and areas, fixed on first use.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("MSH2SDF_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Pick the zero-length threshold at runtime. Only the first call before any
/// boundary check takes effect; later calls are ignored.
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;
