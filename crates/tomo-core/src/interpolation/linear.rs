//! Linear interpolation implementation.
//!
//! This module provides trilinear interpolation of 3D volumes.

use serde::{Deserialize, Serialize};
use crate::spatial::Point3;
use crate::volume::Volume;
use super::trait_::{clamp_to_support, Interpolator};

/// Linear Interpolator.
///
/// Performs trilinear interpolation over the 8 voxels surrounding the
/// sample point. The support is `[0, n - 1]` on each axis; points on the
/// far border are blended with weight 1 on the last voxel so grid points
/// reproduce their values exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearInterpolator;

impl LinearInterpolator {
    /// Create a new linear interpolator.
    pub fn new() -> Self {
        Self
    }
}

/// Lower tap, upper tap and weight of the upper tap along one axis.
#[inline]
fn axis_taps(x: f64, n: usize) -> Option<(usize, usize, f64)> {
    let x = clamp_to_support(x, n)?;
    if n == 1 {
        return Some((0, 0, 0.0));
    }
    let i0 = (x.floor() as usize).min(n - 2);
    Some((i0, i0 + 1, x - i0 as f64))
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, volume: &Volume, point: &Point3) -> Option<f64> {
        let [nx, ny, nz] = volume.dims();
        let (x0, x1, wx) = axis_taps(point.x, nx)?;
        let (y0, y1, wy) = axis_taps(point.y, ny)?;
        let (z0, z1, wz) = axis_taps(point.z, nz)?;

        // Interpolate along X
        let c00 = volume.at(x0, y0, z0) * (1.0 - wx) + volume.at(x1, y0, z0) * wx;
        let c10 = volume.at(x0, y1, z0) * (1.0 - wx) + volume.at(x1, y1, z0) * wx;
        let c01 = volume.at(x0, y0, z1) * (1.0 - wx) + volume.at(x1, y0, z1) * wx;
        let c11 = volume.at(x0, y1, z1) * (1.0 - wx) + volume.at(x1, y1, z1) * wx;

        // Interpolate along Y
        let c0 = c00 * (1.0 - wy) + c10 * wy;
        let c1 = c01 * (1.0 - wy) + c11 * wy;

        // Interpolate along Z
        Some(c0 * (1.0 - wz) + c1 * wz)
    }
}
