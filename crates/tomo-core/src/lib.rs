//! Rigid resampling of dense 3D volumes.
//!
//! Sub-volumes are rotated and translated about their geometric center by
//! sampling the source through an interpolation kernel. Samples that fall
//! outside the source are reported missing and can be resolved with a
//! boundary fill.
//!
//! ```rust
//! use tomo_core::{rotate_vol, rotate_vol_pad_zero, Matrix3, Vector3, Volume};
//!
//! let vol = Volume::filled([4, 4, 4], 1.0).unwrap();
//! let rotated = rotate_vol(&vol, &Matrix3::identity(), &Vector3::zeros()).unwrap();
//! assert!(rotated.is_complete());
//!
//! let padded = rotate_vol_pad_zero(&vol, &Matrix3::identity(), &Vector3::new(1.0, 0.0, 0.0)).unwrap();
//! assert_eq!(padded.get(0, 0, 0), Some(0.0));
//! ```

pub mod error;
pub mod volume;
pub mod spatial;
pub mod transform;
pub mod interpolation;
pub mod filter;

pub use error::{ResampleError, Result};
pub use volume::{SampledVolume, Volume};
pub use spatial::{Dims, Matrix3, Point3, Vector3};
pub use transform::{AffineTransform, Transform};
pub use interpolation::{
    CubicInterpolator, InterpolationKind, Interpolator, LinearInterpolator,
    NearestNeighborInterpolator, VolumeSampler,
};
pub use filter::{
    rotate_mask, rotate_vol, rotate_vol_pad_mean, rotate_vol_pad_zero, rotate_vol_padded,
    rotate_vol_with, transform, BoundaryFill, ResampleVolumeFilter, RotateConfig,
};
