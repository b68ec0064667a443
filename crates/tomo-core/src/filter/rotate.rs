//! Volume rotation.
//!
//! Rotation and translation of a volume about its geometric center, onto a
//! grid of the same size.

use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::interpolation::InterpolationKind;
use crate::spatial::{Matrix3, Vector3};
use crate::transform::AffineTransform;
use crate::volume::{SampledVolume, Volume};
use super::resample::ResampleVolumeFilter;

/// Rotation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotateConfig {
    /// Interpolation method used to sample the source volume.
    pub interpolation: InterpolationKind,
    /// Fill output slices in parallel.
    pub parallel: bool,
}

impl Default for RotateConfig {
    fn default() -> Self {
        Self {
            interpolation: InterpolationKind::Cubic,
            parallel: true,
        }
    }
}

impl RotateConfig {
    /// Create a new rotation config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interpolation method.
    pub fn with_interpolation(mut self, interpolation: InterpolationKind) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Evaluate on the calling thread only.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Rotate and translate `vol` about its center with cubic interpolation.
///
/// Content at `x` moves to `rm (x - c) + c + dx`. Output voxels whose
/// source coordinate falls outside the volume are missing. Pass
/// `Vector3::zeros()` for a pure rotation.
///
/// # Errors
/// `InvalidTransform` when `rm` is singular or non-finite.
pub fn rotate_vol(vol: &Volume, rm: &Matrix3, dx: &Vector3) -> Result<SampledVolume> {
    rotate_vol_with(vol, rm, dx, &RotateConfig::default())
}

/// [`rotate_vol`] with an explicit configuration.
pub fn rotate_vol_with(
    vol: &Volume,
    rm: &Matrix3,
    dx: &Vector3,
    config: &RotateConfig,
) -> Result<SampledVolume> {
    let at = AffineTransform::centered(*rm, *dx, vol.dims())?;
    let filter = ResampleVolumeFilter::new(vol.dims(), at, config.interpolation)?
        .with_parallel(config.parallel);
    Ok(filter.apply(vol))
}
