//! Transform trait for voxel-space coordinate maps.

use crate::spatial::Point3;

/// Coordinate map consumed by the resample filter.
///
/// `transform_point` maps an output voxel coordinate to the source
/// coordinate that should be sampled for it.
pub trait Transform {
    /// Map an output coordinate to a source coordinate.
    fn transform_point(&self, point: &Point3) -> Point3;
}

impl<T: Transform + ?Sized> Transform for &T {
    fn transform_point(&self, point: &Point3) -> Point3 {
        (**self).transform_point(point)
    }
}
