//! Spatial types for voxel-space coordinates.
//!
//! All coordinates are continuous voxel indices `(x, y, z)` = `(i, j, k)`.
//! The types are plain nalgebra aliases so the full linear algebra API is
//! available to callers.

use nalgebra::{Point3 as NaPoint3, SMatrix, SVector};

/// Continuous voxel coordinate.
pub type Point3 = NaPoint3<f64>;
/// Displacement in voxel units.
pub type Vector3 = SVector<f64, 3>;
/// 3×3 linear map (rotation matrix in the common case).
pub type Matrix3 = SMatrix<f64, 3, 3>;

/// Volume dimensions `[nx, ny, nz]`.
pub type Dims = [usize; 3];

/// Geometric center of a grid with the given dimensions, `(d - 1) / 2` per axis.
pub fn grid_center(dims: Dims) -> Point3 {
    Point3::new(
        (dims[0] as f64 - 1.0) / 2.0,
        (dims[1] as f64 - 1.0) / 2.0,
        (dims[2] as f64 - 1.0) / 2.0,
    )
}
