//! Cubic convolution interpolation implementation.
//!
//! This module provides separable cubic convolution (Keys, a = -0.5)
//! for smooth sampling of volumes at continuous coordinates.

use serde::{Deserialize, Serialize};
use crate::spatial::Point3;
use crate::volume::Volume;
use super::trait_::{clamp_to_support, Interpolator};

const A: f64 = -0.5;

/// Cubic convolution kernel.
///
/// - (a + 2)|x|^3 - (a + 3)|x|^2 + 1      for |x| < 1
/// - a|x|^3 - 5a|x|^2 + 8a|x| - 4a        for 1 <= |x| < 2
/// - 0                                    otherwise
#[inline]
fn keys_kernel(x: f64) -> f64 {
    let s = x.abs();
    if s < 1.0 {
        ((A + 2.0) * s - (A + 3.0)) * s * s + 1.0
    } else if s < 2.0 {
        ((A * s - 5.0 * A) * s + 8.0 * A) * s - 4.0 * A
    } else {
        0.0
    }
}

/// Four taps along one axis: voxel indices and their weights.
type AxisTaps = ([usize; 4], [f64; 4]);

/// Taps covering voxels `i0 - 1 ..= i0 + 2` for a coordinate in `[0, n - 1]`.
///
/// A tap that falls one voxel past the border is folded back onto the grid
/// with the boundary condition `f(-1) = 3f(0) - 3f(1) + f(2)` (and its
/// mirror at the far end). Axes with fewer than 3 voxels clamp instead.
fn axis_taps(x: f64, n: usize) -> Option<AxisTaps> {
    let x = clamp_to_support(x, n)?;
    if n == 1 {
        return Some(([0; 4], [1.0, 0.0, 0.0, 0.0]));
    }

    let i0 = (x.floor() as usize).min(n - 2);
    let t = x - i0 as f64;
    let mut w = [
        keys_kernel(t + 1.0),
        keys_kernel(t),
        keys_kernel(1.0 - t),
        keys_kernel(2.0 - t),
    ];

    let last = n - 1;
    if n < 3 {
        let idx = [
            i0.saturating_sub(1),
            i0,
            i0 + 1,
            (i0 + 2).min(last),
        ];
        return Some((idx, w));
    }

    // idx[m] = i0 - 1 + m; slot 0 is virtual when i0 == 0, slot 3 when i0 + 2 == n.
    let mut idx = [0usize; 4];
    for (m, slot) in idx.iter_mut().enumerate() {
        *slot = (i0 + m).saturating_sub(1).min(last);
    }
    if i0 == 0 {
        let v = w[0];
        w[0] = 0.0;
        w[1] += 3.0 * v;
        w[2] -= 3.0 * v;
        w[3] += v;
    }
    if i0 + 2 > last {
        let v = w[3];
        w[3] = 0.0;
        w[2] += 3.0 * v;
        w[1] -= 3.0 * v;
        w[0] += v;
    }
    Some((idx, w))
}

/// Cubic convolution interpolator.
///
/// Samples a 4×4×4 neighbourhood with the Keys cubic kernel. The support
/// is `[0, n - 1]` on each axis; grid points reproduce their values exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubicInterpolator;

impl CubicInterpolator {
    /// Create a new cubic interpolator.
    pub fn new() -> Self {
        Self
    }
}

impl Interpolator for CubicInterpolator {
    fn interpolate(&self, volume: &Volume, point: &Point3) -> Option<f64> {
        let [nx, ny, nz] = volume.dims();
        let (xi, xw) = axis_taps(point.x, nx)?;
        let (yi, yw) = axis_taps(point.y, ny)?;
        let (zi, zw) = axis_taps(point.z, nz)?;

        let mut value = 0.0;
        for c in 0..4 {
            if zw[c] == 0.0 {
                continue;
            }
            let mut plane = 0.0;
            for b in 0..4 {
                if yw[b] == 0.0 {
                    continue;
                }
                let mut row = 0.0;
                for a in 0..4 {
                    if xw[a] != 0.0 {
                        row += xw[a] * volume.at(xi[a], yi[b], zi[c]);
                    }
                }
                plane += yw[b] * row;
            }
            value += zw[c] * plane;
        }
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_interpolates_grid() {
        assert_eq!(keys_kernel(0.0), 1.0);
        assert_eq!(keys_kernel(1.0), 0.0);
        assert_eq!(keys_kernel(2.0), 0.0);
        assert_eq!(keys_kernel(-1.0), 0.0);
    }

    #[test]
    fn test_axis_weights_sum_to_one() {
        for n in [1usize, 2, 3, 4, 9] {
            for step in 0..=20 {
                let x = (n - 1) as f64 * step as f64 / 20.0;
                let (_, w) = axis_taps(x, n).unwrap();
                let sum: f64 = w.iter().sum();
                assert!((sum - 1.0).abs() < 1e-12, "n={} x={} sum={}", n, x, sum);
            }
        }
    }

    #[test]
    fn test_cubic_grid_points_exact() {
        let vol = Volume::from_fn([5, 4, 3], |i, j, k| ((i * 7 + j * 3 + k * 11) % 5) as f64).unwrap();
        let interp = CubicInterpolator::new();
        for k in 0..3 {
            for j in 0..4 {
                for i in 0..5 {
                    let v = interp.interpolate(&vol, &Point3::new(i as f64, j as f64, k as f64));
                    assert_eq!(v, vol.get(i, j, k));
                }
            }
        }
    }

    #[test]
    fn test_cubic_reproduces_quadratic_in_interior() {
        // Keys cubic convolution is exact for polynomials up to degree 2.
        let vol = Volume::from_fn([8, 8, 8], |i, j, k| {
            let (x, y, z) = (i as f64, j as f64, k as f64);
            x * x + 0.5 * y - z * z * 0.25
        })
        .unwrap();
        let interp = CubicInterpolator::new();
        let (x, y, z) = (3.3, 4.6, 2.5);
        let v = interp.interpolate(&vol, &Point3::new(x, y, z)).unwrap();
        assert!((v - (x * x + 0.5 * y - z * z * 0.25)).abs() < 1e-9);
    }

    #[test]
    fn test_cubic_boundary_extrapolation_keeps_quadratic() {
        // The boundary rule is exact for quadratics too, so cells next to
        // the border stay exact.
        let vol = Volume::from_fn([6, 1, 1], |i, _, _| (i as f64) * (i as f64)).unwrap();
        let interp = CubicInterpolator::new();
        for x in [0.25, 0.5, 4.5, 4.75] {
            let v = interp.interpolate(&vol, &Point3::new(x, 0.0, 0.0)).unwrap();
            assert!((v - x * x).abs() < 1e-9, "x={} v={}", x, v);
        }
    }

    #[test]
    fn test_cubic_support_bounds() {
        let vol = Volume::zeros([4, 4, 4]).unwrap();
        let interp = CubicInterpolator::new();
        assert!(interp.interpolate(&vol, &Point3::new(3.0, 3.0, 3.0)).is_some());
        assert!(interp.interpolate(&vol, &Point3::new(3.1, 0.0, 0.0)).is_none());
        assert!(interp.interpolate(&vol, &Point3::new(0.0, 0.0, -0.1)).is_none());
    }
}
