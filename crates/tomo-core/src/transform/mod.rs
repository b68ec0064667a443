//! Transform types and operations.
//!
//! This module provides the transform trait and the centered affine
//! transform used to rotate and translate volumes.

pub mod trait_;
pub mod affine;

pub use trait_::Transform;
pub use affine::{AffineTransform, DETERMINANT_TOLERANCE};
