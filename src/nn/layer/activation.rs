use super::LayerForward;
use crate::errors::ModelError;
use crate::nn::Module;
use crate::tensor::Tensor;
use serde::{Deserialize, Serialize};

/// 逐元素的激活函数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Activation {
    #[default]
    Tanh,
    ReLU,
    Sigmoid,
    /// 负半轴斜率为0.01
    LeakyReLU,
    Softplus,
    Sin,
    Identity,
}

impl Activation {
    pub fn apply(&self, x: f32) -> f32 {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::ReLU => x.max(0.0),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::LeakyReLU => {
                if x > 0.0 {
                    x
                } else {
                    0.01 * x
                }
            }
            // ln(1 + e^x)，大x时直接取x以免溢出
            Activation::Softplus => {
                if x > 20.0 {
                    x
                } else {
                    x.exp().ln_1p()
                }
            }
            Activation::Sin => x.sin(),
            Activation::Identity => x,
        }
    }
}

impl LayerForward for Activation {
    fn forward(&self, input: &Tensor) -> Result<Tensor, ModelError> {
        Ok(input.map(|x| self.apply(x)))
    }
}

impl Module for Activation {
    fn parameters(&self) -> Vec<&Tensor> {
        Vec::new()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Tensor> {
        Vec::new()
    }
}
