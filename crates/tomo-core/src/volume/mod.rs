//! Volume types.
//!
//! [`Volume`] is the dense voxel array passed into and out of the resampler.
//! [`SampledVolume`] is the resampler's intermediate result, where every voxel
//! either carries a value or is explicitly missing.

pub mod volume;
pub mod sampled;
pub mod tensor;

pub use volume::Volume;
pub use sampled::SampledVolume;
