//! Mask rotation.
//!
//! Masks are binarized before rotation: a finite nonzero voxel is inside
//! (1), anything else is outside (0). The binary volume is resampled with
//! trilinear interpolation, voxels the rotation sweeps in from outside the
//! grid resolve to 0, and the result is thresholded at [`MASK_THRESHOLD`].

use crate::error::Result;
use crate::interpolation::LinearInterpolator;
use crate::spatial::{Matrix3, Vector3};
use crate::transform::AffineTransform;
use crate::volume::Volume;
use super::resample::ResampleVolumeFilter;

/// Interpolated occupancy at or above this value is inside the mask.
pub const MASK_THRESHOLD: f64 = 0.5;

#[inline]
fn occupancy(v: f64) -> f64 {
    if v.is_finite() && v != 0.0 { 1.0 } else { 0.0 }
}

/// Rotate the mask about its center.
///
/// The output holds only `0.0` and `1.0`.
///
/// # Errors
/// `InvalidTransform` when `rm` is singular or non-finite.
pub fn rotate_mask(mask: &Volume, rm: &Matrix3) -> Result<Volume> {
    let mut binary = mask.clone();
    binary.map_inplace(occupancy);

    let at = AffineTransform::centered(*rm, Vector3::zeros(), mask.dims())?;
    let filter = ResampleVolumeFilter::new(mask.dims(), at, LinearInterpolator::new())?;
    let sampled = filter.apply(&binary);

    let mut rotated = sampled.fill_missing(0.0);
    rotated.map_inplace(|v| if v >= MASK_THRESHOLD { 1.0 } else { 0.0 });
    Ok(rotated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Rotation3;
    use std::f64::consts::FRAC_PI_2;

    fn slab() -> Volume {
        // Occupied for x in 1..=4 of an 8^3 grid
        Volume::from_fn([8, 8, 8], |i, _, _| if (1..=4).contains(&i) { 1.0 } else { 0.0 }).unwrap()
    }

    #[test]
    fn test_rotate_mask_identity() {
        let mask = slab();
        let out = rotate_mask(&mask, &Matrix3::identity()).unwrap();
        assert_eq!(out, mask);
    }

    #[test]
    fn test_rotate_mask_binarizes_input() {
        let mask = Volume::from_fn([3, 3, 3], |i, j, k| match (i, j, k) {
            (0, 0, 0) => 7.0,
            (1, 1, 1) => f64::NAN,
            (2, 2, 2) => -0.25,
            _ => 0.0,
        })
        .unwrap();
        let out = rotate_mask(&mask, &Matrix3::identity()).unwrap();
        assert_eq!(out.get(0, 0, 0), Some(1.0));
        assert_eq!(out.get(1, 1, 1), Some(0.0));
        assert_eq!(out.get(2, 2, 2), Some(1.0));
    }

    #[test]
    fn test_rotate_mask_quarter_turn() {
        let mask = slab();
        let rm = Rotation3::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2).into_inner();
        let out = rotate_mask(&mask, &rm).unwrap();

        // The x-slab becomes a y-slab: center 3.5, x offsets -2.5..=0.5 map to y
        for j in 0..8 {
            let expected = if (1..=4).contains(&j) { 1.0 } else { 0.0 };
            assert_eq!(out.get(3, j, 3), Some(expected), "j={}", j);
        }
    }

    #[test]
    fn test_rotate_mask_oblique_stays_binary() {
        let mask = Volume::filled([9, 9, 9], 1.0).unwrap();
        let rm = Rotation3::from_euler_angles(0.3, 0.5, -0.8).into_inner();
        let out = rotate_mask(&mask, &rm).unwrap();

        assert!(out.as_slice().iter().all(|&v| v == 0.0 || v == 1.0));
        // Center stays inside, corners are swept out of the grid
        assert_eq!(out.get(4, 4, 4), Some(1.0));
        assert_eq!(out.get(0, 0, 0), Some(0.0));
    }
}
