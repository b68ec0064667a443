//! Nearest neighbor interpolation implementation.

use serde::{Deserialize, Serialize};
use crate::spatial::Point3;
use crate::volume::Volume;
use super::trait_::Interpolator;

/// Nearest Neighbor Interpolator.
///
/// Rounds each coordinate to the nearest voxel. A coordinate is inside the
/// support when it rounds onto the grid, i.e. lies in `[-0.5, n - 0.5)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearestNeighborInterpolator;

impl NearestNeighborInterpolator {
    /// Create a new nearest neighbor interpolator.
    pub fn new() -> Self {
        Self
    }
}

#[inline]
fn nearest_index(x: f64, n: usize) -> Option<usize> {
    let r = (x + 0.5).floor();
    if r >= 0.0 && r < n as f64 {
        Some(r as usize)
    } else {
        None
    }
}

impl Interpolator for NearestNeighborInterpolator {
    fn interpolate(&self, volume: &Volume, point: &Point3) -> Option<f64> {
        let [nx, ny, nz] = volume.dims();
        let i = nearest_index(point.x, nx)?;
        let j = nearest_index(point.y, ny)?;
        let k = nearest_index(point.z, nz)?;
        Some(volume.at(i, j, k))
    }
}
