use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;
use ndarray::Ix2;

impl Tensor {
    /// 实现矩阵乘法。只接受2阶张量，
    /// 且需要保证前一个张量的列数（col）等于后一个张量的行数（row），否则返回`OperatorError`。
    pub fn mat_mul(&self, other: &Tensor) -> Result<Tensor, TensorError> {
        let shape_error = || TensorError::OperatorError {
            operator: Operator::MatMul,
            tensor1_shape: self.shape().to_vec(),
            tensor2_shape: other.shape().to_vec(),
        };
        if self.dimension() != 2 || other.dimension() != 2 || self.shape()[1] != other.shape()[0]
        {
            return Err(shape_error());
        }
        // 将动态维度数组转换为常量维度数组
        let self_data = self
            .data
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| shape_error())?;
        let other_data = other
            .data
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| shape_error())?;
        Ok(Tensor {
            data: self_data.dot(&other_data).into_dyn(),
        })
    }
}
