//! Boundary fill policies.
//!
//! Resolve the missing voxels of a [`SampledVolume`]. Valid samples are
//! copied through unchanged.

use serde::{Deserialize, Serialize};
use crate::error::{ResampleError, Result};
use crate::spatial::{Matrix3, Vector3};
use crate::volume::{SampledVolume, Volume};
use super::rotate::{rotate_vol_with, RotateConfig};

/// Value written into missing voxels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryFill {
    /// Mean of every valid sample.
    Mean,
    /// Zero.
    Zero,
}

impl BoundaryFill {
    /// Resolve every missing voxel of `sampled`.
    ///
    /// # Errors
    /// `EmptyResult` for [`BoundaryFill::Mean`] when no voxel is valid.
    pub fn apply(self, sampled: &SampledVolume) -> Result<Volume> {
        let value = match self {
            Self::Zero => 0.0,
            Self::Mean => match sampled.mean_of_valid() {
                Some(mean) => mean,
                None => {
                    tracing::warn!(dims = ?sampled.dims(), "every resampled voxel is missing, no fill mean");
                    return Err(ResampleError::EmptyResult);
                }
            },
        };
        Ok(sampled.fill_missing(value))
    }
}

/// Rotate `vol` and resolve missing voxels with `fill`.
pub fn rotate_vol_padded(
    vol: &Volume,
    rm: &Matrix3,
    dx: &Vector3,
    fill: BoundaryFill,
    config: &RotateConfig,
) -> Result<Volume> {
    let sampled = rotate_vol_with(vol, rm, dx, config)?;
    fill.apply(&sampled)
}

/// Rotate the volume and fill in any missing data with the mean of
/// non-missing data.
///
/// # Errors
/// `InvalidTransform` for a singular `rm`; `EmptyResult` when the
/// transform leaves no voxel with a valid sample.
pub fn rotate_vol_pad_mean(vol: &Volume, rm: &Matrix3, dx: &Vector3) -> Result<Volume> {
    rotate_vol_padded(vol, rm, dx, BoundaryFill::Mean, &RotateConfig::default())
}

/// Rotate the volume and fill in any missing data with zeros.
pub fn rotate_vol_pad_zero(vol: &Volume, rm: &Matrix3, dx: &Vector3) -> Result<Volume> {
    rotate_vol_padded(vol, rm, dx, BoundaryFill::Zero, &RotateConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ones_identity_pad_zero() {
        let vol = Volume::filled([4, 4, 4], 1.0).unwrap();
        let out = rotate_vol_pad_zero(&vol, &Matrix3::identity(), &Vector3::zeros()).unwrap();
        assert_eq!(out.dims(), [4, 4, 4]);
        assert!(out.as_slice().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_pad_mean_uses_valid_samples_only() {
        let vol = Volume::from_fn([4, 1, 1], |i, _, _| i as f64 + 1.0).unwrap();
        // Shift by one voxel: output = [missing, 1, 2, 3]
        let out = rotate_vol_pad_mean(&vol, &Matrix3::identity(), &Vector3::new(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(out.as_slice(), &[2.0, 1.0, 2.0, 3.0]);

        let zero = rotate_vol_pad_zero(&vol, &Matrix3::identity(), &Vector3::new(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(zero.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_pad_mean_empty_result() {
        let vol = Volume::filled([4, 4, 4], 1.0).unwrap();
        let err = rotate_vol_pad_mean(&vol, &Matrix3::identity(), &Vector3::new(10.0, 0.0, 0.0)).unwrap_err();
        assert_eq!(err, ResampleError::EmptyResult);

        // Zero fill has no such failure
        let zero = rotate_vol_pad_zero(&vol, &Matrix3::identity(), &Vector3::new(10.0, 0.0, 0.0)).unwrap();
        assert!(zero.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_nan_source_voxel_does_not_poison_fill() {
        let mut vol = Volume::filled([5, 5, 5], 1.0).unwrap();
        vol.set(2, 2, 2, f64::NAN);
        let dx = Vector3::new(1.0, 0.0, 0.0);

        let mean_filled = rotate_vol_pad_mean(&vol, &Matrix3::identity(), &dx).unwrap();
        assert!(mean_filled.as_slice().iter().all(|v| v.is_finite()));
        assert!(mean_filled.as_slice().iter().all(|&v| (v - 1.0).abs() < 1e-12));

        let zero = rotate_vol_pad_zero(&vol, &Matrix3::identity(), &dx).unwrap();
        assert!(zero.as_slice().iter().all(|v| v.is_finite()));
        // The shifted NaN voxel and the swept-in x = 0 face are zero
        assert_eq!(zero.get(3, 2, 2), Some(0.0));
        assert_eq!(zero.get(0, 1, 1), Some(0.0));
        assert_eq!(zero.get(4, 4, 4), Some(1.0));
    }

    #[test]
    fn test_boundary_fill_zero_valued_data_is_not_empty() {
        let vol = Volume::zeros([3, 3, 3]).unwrap();
        let out = rotate_vol_pad_mean(&vol, &Matrix3::identity(), &Vector3::new(1.0, 1.0, 1.0)).unwrap();
        assert!(out.as_slice().iter().all(|&v| v == 0.0));
    }
}
