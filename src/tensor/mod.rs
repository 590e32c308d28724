/*
 * @Author       : 老董
 * @Date         : 2023-08-17 17:24:24
 * @Description  : 张量：对ndarray动态维度数组的轻量封装，只负责前向数值计算（不含自动微分）
 */

use ndarray::{Array, ArrayD, IxDyn};
use rand::Rng;
use rand::distributions::{Distribution, Standard, Uniform};
use serde::{Deserialize, Serialize};

use crate::errors::{ComparisonOperator, TensorError};

mod ops;

mod print;
mod property;
mod save_load;
mod shape;

#[cfg(test)]
mod tests;

/// 定义张量的结构体。其可以是标量、向量、矩阵或更高维度的数组。
/// 注：只要通Tensor初始化的都是张量（即使标量也是张量）；
/// 而通常意义上的数字（类型为usize、i32、f32等）就只是纯数（number），在这里不被认为是张量。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tensor {
    data: Array<f32, IxDyn>,
}

impl Tensor {
    /// 创建一个张量，若为标量，`shape`可以是[]、[1]、[1,1]、[1,1,1]...
    /// 若为向量，`shape`可以是[n]、[1,n]、[n,1]；
    /// 若为矩阵，`shape`可以是[n,m]；
    /// 若为更高维度的数组，`shape`可以是[c,n,m,...]；
    /// 注：`data`的长度必须和`shape`中所有元素的乘积相等，否则会panic。
    pub fn new(data: &[f32], shape: &[usize]) -> Tensor {
        let data = Array::from_shape_vec(IxDyn(shape), data.to_vec()).unwrap_or_else(|_| {
            panic!(
                "{}",
                TensorError::ReshapeError {
                    from: vec![data.len()],
                    size: data.len(),
                    to: shape.to_vec(),
                }
            )
        });
        Tensor { data }
    }

    /// 创建一个元素全为0的张量
    pub fn zeros(shape: &[usize]) -> Tensor {
        Tensor {
            data: Array::zeros(IxDyn(shape)),
        }
    }

    /// 创建一个元素全为1的张量
    pub fn ones(shape: &[usize]) -> Tensor {
        Tensor {
            data: Array::ones(IxDyn(shape)),
        }
    }

    /// 创建一个不含任何元素的张量（形状为`[0]`），
    /// 用作“尚未计算”的占位值
    pub fn empty() -> Tensor {
        Tensor::zeros(&[0])
    }

    /// 在闭区间[start, end]上等距地取`n`个数，返回形状为`[n]`的张量。
    /// n必须大于等于1，否则会panic。
    pub fn linspace(start: f32, end: f32, n: usize) -> Tensor {
        assert!(
            n >= 1,
            "{}",
            TensorError::ValueMustSatisfyComparison {
                value_name: "n".to_string(),
                operator: ComparisonOperator::GreaterOrEqual,
                threshold: 1,
            }
        );
        Tensor {
            data: Array::linspace(start, end, n).into_dyn(),
        }
    }

    /// 用给定的随机数生成器创建一个随机张量，其值在[min, max]的闭区间
    pub fn uniform_with_rng<R: Rng + ?Sized>(
        min: f32,
        max: f32,
        shape: &[usize],
        rng: &mut R,
    ) -> Tensor {
        let uniform = Uniform::new_inclusive(min, max);
        let data = (0..shape.iter().product::<usize>())
            .map(|_| uniform.sample(rng))
            .collect::<Vec<_>>();
        Tensor::new(&data, shape)
    }

    /// 用给定的随机数生成器创建一个服从正态分布的随机张量（Box-Muller变换）
    pub fn normal_with_rng<R: Rng + ?Sized>(
        mean: f32,
        std_dev: f32,
        shape: &[usize],
        rng: &mut R,
    ) -> Tensor {
        let data_len = shape.iter().product::<usize>();
        let mut data = Vec::with_capacity(data_len);

        while data.len() < data_len {
            let u1: f32 = Standard.sample(rng);
            let u2: f32 = Standard.sample(rng);
            let r = (-2.0 * u1.ln()).sqrt();
            let theta = 2.0 * std::f32::consts::PI * u2;
            let z0 = mean + std_dev * r * theta.cos();
            let z1 = mean + std_dev * r * theta.sin();

            if z0.is_finite() {
                data.push(z0);
            }
            if data.len() < data_len && z1.is_finite() {
                data.push(z1);
            }
        }

        Tensor::new(&data, shape)
    }
}

impl From<ArrayD<f32>> for Tensor {
    fn from(data: ArrayD<f32>) -> Self {
        Tensor { data }
    }
}
