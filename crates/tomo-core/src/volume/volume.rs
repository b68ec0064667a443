//! Dense 3D voxel array.

use std::ops::Index;
use crate::error::{ResampleError, Result};
use crate::spatial::{grid_center, Dims, Point3};

/// Validate that every axis has at least one sample and that the voxel
/// count fits in `usize`. Returns the voxel count.
pub(crate) fn validate_dims(dims: Dims) -> Result<usize> {
    if dims.iter().any(|&d| d == 0) {
        return Err(ResampleError::InvalidDimensions { dims });
    }
    dims[0]
        .checked_mul(dims[1])
        .and_then(|n| n.checked_mul(dims[2]))
        .ok_or(ResampleError::InvalidDimensions { dims })
}

/// Dense 3D volume of real-valued voxels.
///
/// Voxels are addressed by 0-based `(i, j, k)` along `(x, y, z)` and stored
/// contiguously with `i` varying fastest:
/// `index = i + nx * (j + ny * k)`.
///
/// # Examples
/// ```rust
/// use tomo_core::Volume;
///
/// let vol = Volume::from_fn([4, 4, 4], |i, j, k| (i + j + k) as f64).unwrap();
/// assert_eq!(vol.get(1, 2, 3), Some(6.0));
/// assert_eq!(vol.get(4, 0, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    dims: Dims,
    data: Vec<f64>,
}

impl Volume {
    /// Create a volume from voxel data in `i`-fastest order.
    ///
    /// Fails with `InvalidDimensions` when an axis is zero and with
    /// `ShapeMismatch` when `data.len()` differs from `nx * ny * nz`.
    pub fn new(dims: Dims, data: Vec<f64>) -> Result<Self> {
        let expected = validate_dims(dims)?;
        if data.len() != expected {
            return Err(ResampleError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    /// Build from parts whose dimensions and length were already checked.
    pub(crate) fn from_parts(dims: Dims, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), dims[0] * dims[1] * dims[2]);
        Self { dims, data }
    }

    /// Create a volume with every voxel set to `value`.
    pub fn filled(dims: Dims, value: f64) -> Result<Self> {
        let len = validate_dims(dims)?;
        Ok(Self { dims, data: vec![value; len] })
    }

    /// Create a zero-valued volume.
    pub fn zeros(dims: Dims) -> Result<Self> {
        Self::filled(dims, 0.0)
    }

    /// Create a volume by evaluating `f(i, j, k)` at every voxel.
    pub fn from_fn<F>(dims: Dims, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize, usize) -> f64,
    {
        let len = validate_dims(dims)?;
        let mut data = Vec::with_capacity(len);
        for k in 0..dims[2] {
            for j in 0..dims[1] {
                for i in 0..dims[0] {
                    data.push(f(i, j, k));
                }
            }
        }
        Ok(Self { dims, data })
    }

    /// Dimensions `[nx, ny, nz]`.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Total number of voxels.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; a volume has at least one voxel.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Voxel data in `i`-fastest order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consume the volume and return its voxel data.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Linear storage offset of `(i, j, k)`, or `None` outside the grid.
    #[inline]
    pub fn offset(&self, i: usize, j: usize, k: usize) -> Option<usize> {
        let [nx, ny, nz] = self.dims;
        if i < nx && j < ny && k < nz {
            Some(i + nx * (j + ny * k))
        } else {
            None
        }
    }

    /// Voxel value at `(i, j, k)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<f64> {
        self.offset(i, j, k).map(|o| self.data[o])
    }

    /// Set the voxel at `(i, j, k)`. Returns false outside the grid.
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: f64) -> bool {
        match self.offset(i, j, k) {
            Some(o) => {
                self.data[o] = value;
                true
            }
            None => false,
        }
    }

    /// Unchecked voxel read for interpolation kernels that already
    /// validated their taps.
    #[inline]
    pub(crate) fn at(&self, i: usize, j: usize, k: usize) -> f64 {
        let [nx, ny, _] = self.dims;
        self.data[i + nx * (j + ny * k)]
    }

    /// Geometric center, the pivot of centered transforms.
    pub fn center(&self) -> Point3 {
        grid_center(self.dims)
    }

    /// Arithmetic mean of all voxels.
    pub fn mean(&self) -> f64 {
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    /// Apply `f` to every voxel in place.
    pub fn map_inplace<F: FnMut(f64) -> f64>(&mut self, mut f: F) {
        for v in self.data.iter_mut() {
            *v = f(*v);
        }
    }
}

impl Index<(usize, usize, usize)> for Volume {
    type Output = f64;

    fn index(&self, (i, j, k): (usize, usize, usize)) -> &f64 {
        let [nx, ny, nz] = self.dims;
        assert!(
            i < nx && j < ny && k < nz,
            "voxel ({}, {}, {}) outside volume {:?}",
            i, j, k, self.dims
        );
        &self.data[i + nx * (j + ny * k)]
    }
}
