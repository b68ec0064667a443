//! Affine transform implementation.
//!
//! This module provides a centered affine transform (linear part + translation).

use serde::{Deserialize, Serialize};
use crate::error::{ResampleError, Result};
use crate::spatial::{grid_center, Dims, Matrix3, Point3, Vector3};
use super::trait_::Transform;

/// Linear parts with `|det|` below this are rejected as singular.
pub const DETERMINANT_TOLERANCE: f64 = 1e-10;

/// Affine Transform (Linear transformation + Translation) about a fixed center.
///
/// Content at source position `x` lands in the output at
///
/// F(x) = L(x - c) + c + t
///
/// where:
/// * L is the 3×3 linear part (a rotation matrix in the common case)
/// * t is the translation, in voxels
/// * c is the pivot, normally the geometric center of the volume
///
/// Resampling needs the opposite direction: for each output voxel `p`,
/// [`apply`](Self::apply) returns the source coordinate
/// `L⁻¹(p - c - t) + c`. The inverse of L is computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AffineTransformRepr", into = "AffineTransformRepr")]
pub struct AffineTransform {
    linear: Matrix3,
    linear_inv: Matrix3,
    translation: Vector3,
    center: Point3,
}

/// Serialized form; the inverse is recomputed and validated on load.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct AffineTransformRepr {
    linear: Matrix3,
    translation: Vector3,
    center: Point3,
}

impl TryFrom<AffineTransformRepr> for AffineTransform {
    type Error = ResampleError;

    fn try_from(repr: AffineTransformRepr) -> Result<Self> {
        Self::new(repr.linear, repr.translation, repr.center)
    }
}

impl From<AffineTransform> for AffineTransformRepr {
    fn from(at: AffineTransform) -> Self {
        Self {
            linear: at.linear,
            translation: at.translation,
            center: at.center,
        }
    }
}

impl AffineTransform {
    /// Create a new affine transform.
    ///
    /// # Errors
    /// `InvalidTransform` when any component is non-finite or the linear
    /// part is not invertible.
    pub fn new(linear: Matrix3, translation: Vector3, center: Point3) -> Result<Self> {
        if !linear.iter().all(|v| v.is_finite()) {
            return Err(ResampleError::invalid_transform("linear part has non-finite entries"));
        }
        if !translation.iter().chain(center.coords.iter()).all(|v| v.is_finite()) {
            return Err(ResampleError::invalid_transform(
                "translation or center has non-finite entries",
            ));
        }

        let det = linear.determinant();
        if det.abs() < DETERMINANT_TOLERANCE {
            return Err(ResampleError::invalid_transform(format!(
                "linear part is singular (determinant {:e})",
                det
            )));
        }
        let linear_inv = linear.try_inverse().ok_or_else(|| {
            ResampleError::invalid_transform("linear part has no numerical inverse")
        })?;

        Ok(Self {
            linear,
            linear_inv,
            translation,
            center,
        })
    }

    /// Create a transform pivoting about the center of a grid with `dims`.
    pub fn centered(linear: Matrix3, translation: Vector3, dims: Dims) -> Result<Self> {
        Self::new(linear, translation, grid_center(dims))
    }

    /// Create an identity transform centered on a grid with `dims`.
    pub fn identity(dims: Dims) -> Self {
        Self {
            linear: Matrix3::identity(),
            linear_inv: Matrix3::identity(),
            translation: Vector3::zeros(),
            center: grid_center(dims),
        }
    }

    /// Get the linear part.
    pub fn linear(&self) -> &Matrix3 {
        &self.linear
    }

    /// Get the inverse of the linear part.
    pub fn linear_inverse(&self) -> &Matrix3 {
        &self.linear_inv
    }

    /// Get the translation vector.
    pub fn translation(&self) -> &Vector3 {
        &self.translation
    }

    /// Get the center of rotation.
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Source coordinate sampled for output coordinate `output`.
    #[inline]
    pub fn apply(&self, output: &Point3) -> Point3 {
        let rel = output - self.center - self.translation;
        self.center + self.linear_inv * rel
    }

    /// Output position of content located at `source`.
    #[inline]
    pub fn forward(&self, source: &Point3) -> Point3 {
        self.center + self.linear * (source - self.center) + self.translation
    }

    /// Transform that undoes this one: `L⁻¹`, `-L⁻¹ t`, same center.
    pub fn inverse(&self) -> Self {
        Self {
            linear: self.linear_inv,
            linear_inv: self.linear,
            translation: -(self.linear_inv * self.translation),
            center: self.center,
        }
    }

    /// Compose with `next`: the result moves content by `self`, then by `next`.
    ///
    /// Both transforms must share a center.
    pub fn then(&self, next: &AffineTransform) -> Result<Self> {
        if (self.center - next.center).norm() > 1e-12 {
            return Err(ResampleError::invalid_transform(format!(
                "cannot compose transforms with centers {:?} and {:?}",
                self.center.coords.as_slice(),
                next.center.coords.as_slice()
            )));
        }
        Self::new(
            next.linear * self.linear,
            next.linear * self.translation + next.translation,
            self.center,
        )
    }
}

impl Transform for AffineTransform {
    fn transform_point(&self, point: &Point3) -> Point3 {
        self.apply(point)
    }
}
