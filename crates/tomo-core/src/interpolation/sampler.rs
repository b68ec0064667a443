//! Interpolator bound to a source volume.

use crate::spatial::Point3;
use crate::volume::Volume;
use super::trait_::Interpolator;

/// An interpolator bound to the volume it samples.
///
/// Created once per resample call and shared read-only between workers.
#[derive(Debug, Clone, Copy)]
pub struct VolumeSampler<'a, I> {
    volume: &'a Volume,
    interpolator: I,
}

impl<'a, I: Interpolator> VolumeSampler<'a, I> {
    /// Bind `interpolator` to `volume`.
    pub fn new(volume: &'a Volume, interpolator: I) -> Self {
        Self { volume, interpolator }
    }

    /// Value at `point`, or `None` outside the interpolator's support.
    #[inline]
    pub fn evaluate(&self, point: &Point3) -> Option<f64> {
        self.interpolator.interpolate(self.volume, point)
    }

    /// The source volume.
    pub fn volume(&self) -> &'a Volume {
        self.volume
    }

    /// The bound interpolator.
    pub fn interpolator(&self) -> &I {
        &self.interpolator
    }
}
