//! Interpolation types and operations.
//!
//! This module provides the interpolation trait and the nearest, linear
//! and cubic kernels for sampling volumes at continuous coordinates.

pub mod trait_;
pub mod nearest;
pub mod linear;
pub mod cubic;
pub mod sampler;

use serde::{Deserialize, Serialize};
use crate::spatial::Point3;
use crate::volume::Volume;

pub use trait_::{Interpolator, SUPPORT_EPSILON};
pub use nearest::NearestNeighborInterpolator;
pub use linear::LinearInterpolator;
pub use cubic::CubicInterpolator;
pub use sampler::VolumeSampler;

/// Interpolation method selected by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationKind {
    Nearest,
    Linear,
    #[default]
    Cubic,
}

impl Interpolator for InterpolationKind {
    fn interpolate(&self, volume: &Volume, point: &Point3) -> Option<f64> {
        match self {
            Self::Nearest => NearestNeighborInterpolator.interpolate(volume, point),
            Self::Linear => LinearInterpolator.interpolate(volume, point),
            Self::Cubic => CubicInterpolator.interpolate(volume, point),
        }
    }
}
