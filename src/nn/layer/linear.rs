/*
 * @Author       : 老董
 * @Date         : 2025-02-14
 * @Description  : Linear (全连接) 层
 */

use super::LayerForward;
use crate::errors::ModelError;
use crate::nn::Module;
use crate::tensor::Tensor;
use rand::Rng;

/// Linear (全连接) 层：`output = x @ W + b`
///
/// # 输入/输出形状
/// - 输入：[batch_size, in_features]
/// - 输出：[batch_size, out_features]
///
/// # 初始化
/// - 权重：Xavier正态分布，标准差为`gain * sqrt(2 / (in_features + out_features))`
/// - 偏置：均匀分布`U(-1/sqrt(in_features), 1/sqrt(in_features))`
#[derive(Debug, Clone, PartialEq)]
pub struct Linear {
    /// 权重参数 [in_features, out_features]
    weights: Tensor,
    /// 偏置参数 [1, out_features]
    bias: Tensor,
}

impl Linear {
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        xavier_gain: f32,
        rng: &mut R,
    ) -> Self {
        let std_dev = xavier_gain * (2.0 / (in_features + out_features) as f32).sqrt();
        let weights = Tensor::normal_with_rng(0.0, std_dev, &[in_features, out_features], rng);
        let bound = 1.0 / (in_features.max(1) as f32).sqrt();
        let bias = Tensor::uniform_with_rng(-bound, bound, &[1, out_features], rng);
        Self { weights, bias }
    }

    pub fn in_features(&self) -> usize {
        self.weights.shape()[0]
    }

    pub fn out_features(&self) -> usize {
        self.weights.shape()[1]
    }

    pub fn weights(&self) -> &Tensor {
        &self.weights
    }

    pub fn bias(&self) -> &Tensor {
        &self.bias
    }
}

impl LayerForward for Linear {
    fn forward(&self, input: &Tensor) -> Result<Tensor, ModelError> {
        Ok(input.mat_mul(&self.weights)? + &self.bias)
    }
}

impl Module for Linear {
    fn parameters(&self) -> Vec<&Tensor> {
        vec![&self.weights, &self.bias]
    }

    fn parameters_mut(&mut self) -> Vec<&mut Tensor> {
        vec![&mut self.weights, &mut self.bias]
    }
}
