//! Resampled volume with explicit missing samples.

use crate::spatial::Dims;
use super::volume::Volume;

/// Output of a resample pass.
///
/// Each voxel is `Some(value)` when the interpolator had support at the
/// mapped source coordinate and `None` otherwise. Missing samples never take
/// part in arithmetic until a boundary fill resolves them.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledVolume {
    dims: Dims,
    samples: Vec<Option<f64>>,
}

impl SampledVolume {
    pub(crate) fn from_samples(dims: Dims, samples: Vec<Option<f64>>) -> Self {
        debug_assert_eq!(samples.len(), dims[0] * dims[1] * dims[2]);
        Self { dims, samples }
    }

    /// Dimensions `[nx, ny, nz]`.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Samples in `i`-fastest order.
    pub fn samples(&self) -> &[Option<f64>] {
        &self.samples
    }

    /// Sample at `(i, j, k)`. `None` both outside the grid and for missing voxels.
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<f64> {
        let [nx, ny, nz] = self.dims;
        if i < nx && j < ny && k < nz {
            self.samples[i + nx * (j + ny * k)]
        } else {
            None
        }
    }

    /// Number of missing voxels.
    pub fn missing_count(&self) -> usize {
        self.samples.iter().filter(|s| s.is_none()).count()
    }

    /// Number of voxels carrying a value.
    pub fn valid_count(&self) -> usize {
        self.samples.len() - self.missing_count()
    }

    /// True when no voxel is missing.
    pub fn is_complete(&self) -> bool {
        self.samples.iter().all(Option::is_some)
    }

    /// Mean over valid samples, `None` if every voxel is missing.
    pub fn mean_of_valid(&self) -> Option<f64> {
        let (sum, count) = self
            .samples
            .iter()
            .flatten()
            .fold((0.0f64, 0usize), |(s, n), v| (s + v, n + 1));
        (count > 0).then(|| sum / count as f64)
    }

    /// Resolve missing voxels to `value`. Valid samples pass through untouched.
    pub fn fill_missing(&self, value: f64) -> Volume {
        let data = self.samples.iter().map(|s| s.unwrap_or(value)).collect();
        Volume::from_parts(self.dims, data)
    }

    /// Convert into a `Volume` if no voxel is missing.
    pub fn into_volume(self) -> Option<Volume> {
        let data: Option<Vec<f64>> = self.samples.into_iter().collect();
        data.map(|d| Volume::from_parts(self.dims, d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SampledVolume {
        SampledVolume::from_samples(
            [2, 2, 1],
            vec![Some(1.0), None, Some(3.0), None],
        )
    }

    #[test]
    fn test_counts_and_mean() {
        let s = sample();
        assert_eq!(s.missing_count(), 2);
        assert_eq!(s.valid_count(), 2);
        assert!(!s.is_complete());
        assert_eq!(s.mean_of_valid(), Some(2.0));
    }

    #[test]
    fn test_fill_missing_passes_valid_through() {
        let v = sample().fill_missing(-7.0);
        assert_eq!(v.as_slice(), &[1.0, -7.0, 3.0, -7.0]);
    }

    #[test]
    fn test_all_missing_has_no_mean() {
        let s = SampledVolume::from_samples([1, 1, 2], vec![None, None]);
        assert_eq!(s.mean_of_valid(), None);
        assert!(s.into_volume().is_none());
    }

    #[test]
    fn test_into_volume_when_complete() {
        let s = SampledVolume::from_samples([1, 1, 2], vec![Some(0.5), Some(1.5)]);
        let v = s.into_volume().unwrap();
        assert_eq!(v.as_slice(), &[0.5, 1.5]);
    }
}
