//! Interpolator trait for sampling volumes at continuous coordinates.

use crate::spatial::Point3;
use crate::volume::Volume;

/// Coordinates within this distance of the sampling support are clamped
/// onto it instead of being reported missing.
pub const SUPPORT_EPSILON: f64 = 1e-6;

/// Interpolator trait for sampling values at continuous coordinates.
///
/// Interpolators are stateless kernels. `interpolate` returns `None` when
/// `point` lies outside the region where the kernel can produce a value;
/// that is ordinary output, not an error.
pub trait Interpolator {
    /// Sample `volume` at the continuous voxel coordinate `point`.
    fn interpolate(&self, volume: &Volume, point: &Point3) -> Option<f64>;
}

impl<I: Interpolator + ?Sized> Interpolator for &I {
    fn interpolate(&self, volume: &Volume, point: &Point3) -> Option<f64> {
        (**self).interpolate(volume, point)
    }
}

/// Clamp `x` into `[0, n - 1]`, rejecting coordinates further than
/// [`SUPPORT_EPSILON`] outside.
#[inline]
pub(crate) fn clamp_to_support(x: f64, n: usize) -> Option<f64> {
    let upper = (n - 1) as f64;
    if x.is_finite() && x >= -SUPPORT_EPSILON && x <= upper + SUPPORT_EPSILON {
        Some(x.clamp(0.0, upper))
    } else {
        None
    }
}
