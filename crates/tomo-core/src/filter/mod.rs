pub mod resample;
pub mod rotate;
pub mod fill;
pub mod mask;

pub use resample::{transform, ResampleVolumeFilter};
pub use rotate::{rotate_vol, rotate_vol_with, RotateConfig};
pub use fill::{rotate_vol_pad_mean, rotate_vol_pad_zero, rotate_vol_padded, BoundaryFill};
pub use mask::{rotate_mask, MASK_THRESHOLD};
