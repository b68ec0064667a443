//! Resample volume filter.
//!
//! This module provides ResampleVolumeFilter which resamples a volume
//! onto a new grid using a transform and an interpolator.

use rayon::prelude::*;
use crate::error::Result;
use crate::interpolation::{Interpolator, VolumeSampler};
use crate::spatial::{Dims, Point3};
use crate::transform::{AffineTransform, Transform};
use crate::volume::volume::validate_dims;
use crate::volume::{SampledVolume, Volume};

/// Resample volume filter.
///
/// For every voxel `(i, j, k)` of the output grid the transform yields a
/// source coordinate, and the interpolator samples the input there.
///
/// The transform maps Output Space -> Input Space, which is what
/// [`AffineTransform::apply`] computes.
///
/// An interpolated value that is not finite (a NaN or infinite source voxel
/// under the kernel's taps) is recorded as missing, so non-finite values
/// never reach boundary fills or their mean.
///
/// Output z-slices are independent and are filled in parallel unless the
/// filter is made sequential.
///
/// # Type Parameters
/// * `T` - The transform type
/// * `I` - The interpolator type
pub struct ResampleVolumeFilter<T, I>
where
    T: Transform,
    I: Interpolator,
{
    size: Dims,
    transform: T,
    interpolator: I,
    parallel: bool,
}

impl<T, I> ResampleVolumeFilter<T, I>
where
    T: Transform + Sync,
    I: Interpolator + Sync,
{
    /// Create a new resample filter.
    ///
    /// # Arguments
    /// * `size` - Output volume size `[nx, ny, nz]`
    /// * `transform` - Transform from output space to input space
    /// * `interpolator` - Interpolator for input volume sampling
    ///
    /// # Errors
    /// `InvalidDimensions` when an axis of `size` is zero.
    pub fn new(size: Dims, transform: T, interpolator: I) -> Result<Self> {
        validate_dims(size)?;
        Ok(Self {
            size,
            transform,
            interpolator,
            parallel: true,
        })
    }

    /// Enable or disable slice-parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Output volume size.
    pub fn size(&self) -> Dims {
        self.size
    }

    /// Apply filter to an input volume.
    pub fn apply(&self, input: &Volume) -> SampledVolume {
        let [nx, ny, nz] = self.size;
        tracing::debug!(
            output = ?self.size,
            input = ?input.dims(),
            interpolator = std::any::type_name::<I>(),
            parallel = self.parallel,
            "resampling volume"
        );

        let mut samples = vec![None; nx * ny * nz];
        let fill_slice = |(k, slice): (usize, &mut [Option<f64>])| {
            for j in 0..ny {
                for i in 0..nx {
                    let output = Point3::new(i as f64, j as f64, k as f64);
                    let source = self.transform.transform_point(&output);
                    slice[i + nx * j] = self
                        .interpolator
                        .interpolate(input, &source)
                        .filter(|v| v.is_finite());
                }
            }
        };

        if self.parallel {
            samples.par_chunks_mut(nx * ny).enumerate().for_each(fill_slice);
        } else {
            samples.chunks_mut(nx * ny).enumerate().for_each(fill_slice);
        }

        let result = SampledVolume::from_samples(self.size, samples);
        tracing::debug!(missing = result.missing_count(), "resample finished");
        result
    }
}

/// Construct a new volume of `size` by sampling through `transform`.
///
/// Every output voxel `p` takes the value of the bound interpolator at
/// `transform.apply(p)`, or is missing where the interpolator has no support.
///
/// # Errors
/// `InvalidDimensions` when an axis of `size` is zero.
pub fn transform<I>(
    sampler: &VolumeSampler<'_, I>,
    transform: &AffineTransform,
    size: Dims,
) -> Result<SampledVolume>
where
    I: Interpolator + Sync,
{
    let filter = ResampleVolumeFilter::new(size, transform, sampler.interpolator())?;
    Ok(filter.apply(sampler.volume()))
}
