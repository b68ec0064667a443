//! Conversion between volumes and burn tensors.
//!
//! Tensors use the `[D, H, W]` = `[nz, ny, nx]` layout, so the last tensor
//! axis is the volume's fastest axis and no data reordering is needed.

use burn::tensor::{Shape, Tensor, TensorData};
use burn::tensor::backend::Backend;
use crate::error::{ResampleError, Result};
use super::volume::Volume;

impl Volume {
    /// Copy the volume into a `[nz, ny, nx]` tensor on `device`.
    ///
    /// Voxels are narrowed to `f32` on the way in, so values lose precision
    /// beyond about 7 significant digits. Resampling itself stays in `f64`.
    pub fn to_tensor<B: Backend>(&self, device: &B::Device) -> Tensor<B, 3> {
        let [nx, ny, nz] = self.dims();
        let values: Vec<f32> = self.as_slice().iter().map(|&v| v as f32).collect();
        Tensor::<B, 3>::from_data(TensorData::new(values, Shape::new([nz, ny, nx])), device)
    }

    /// Read a `[nz, ny, nx]` tensor into a volume, widening `f32` to `f64`.
    pub fn from_tensor<B: Backend>(tensor: &Tensor<B, 3>) -> Result<Self> {
        let [nz, ny, nx] = tensor.dims();
        let values = tensor
            .to_data()
            .convert::<f32>()
            .to_vec::<f32>()
            .map_err(|e| ResampleError::tensor_conversion(format!("{:?}", e)))?;
        Volume::new([nx, ny, nz], values.into_iter().map(f64::from).collect())
    }
}
