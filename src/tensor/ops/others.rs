use crate::errors::TensorError;
use crate::tensor::Tensor;
use ndarray::Axis;
use std::cmp::PartialEq;

impl From<f32> for Tensor {
    /// 实现 From<f32> trait 用于将`f32`类型转换为形状为`[1]`的张量
    fn from(scalar: f32) -> Self {
        Tensor::new(&[scalar], &[1])
    }
}

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Tensor {
    /// 对每个元素施加`f`，返回同形状的新张量
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Tensor {
        Tensor {
            data: self.data.mapv(f),
        }
    }

    pub fn tanh(&self) -> Tensor {
        self.map(f32::tanh)
    }

    pub fn sin(&self) -> Tensor {
        self.map(f32::sin)
    }

    pub fn cos(&self) -> Tensor {
        self.map(f32::cos)
    }

    pub fn exp(&self) -> Tensor {
        self.map(f32::exp)
    }

    /// 对张量中的所有元素求和并返回一个形状为[1]的标量。
    pub fn sum(&self) -> Tensor {
        Tensor::from(self.data.sum())
    }

    /// 沿`axis`求和，该维度被消去
    pub fn sum_axis(&self, axis: usize) -> Result<Tensor, TensorError> {
        if axis >= self.dimension() {
            return Err(TensorError::AxisOutOfRange {
                axis,
                rank: self.dimension(),
            });
        }
        Ok(Tensor {
            data: self.data.sum_axis(Axis(axis)),
        })
    }

    /// 所有元素绝对值中的最大值；空张量返回0
    pub fn max_abs(&self) -> f32 {
        self.data.iter().fold(0.0_f32, |acc, x| acc.max(x.abs()))
    }
}
