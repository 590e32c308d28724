/*
 * @Author       : 老董
 * @Date         : 2025-02-14
 * @Description  : 网络层：线性层与激活函数。
 *                 二者都以`[batch, features]`形状的张量为输入。
 */

mod activation;
mod linear;

pub use activation::Activation;
pub use linear::Linear;

use crate::errors::ModelError;
use crate::nn::Module;
use crate::tensor::Tensor;
use enum_dispatch::enum_dispatch;

#[enum_dispatch]
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Linear,
    Activation,
}

#[enum_dispatch(Layer)]
pub trait LayerForward {
    fn forward(&self, input: &Tensor) -> Result<Tensor, ModelError>;
}

impl Module for Layer {
    fn parameters(&self) -> Vec<&Tensor> {
        match self {
            Layer::Linear(linear) => linear.parameters(),
            Layer::Activation(activation) => activation.parameters(),
        }
    }

    fn parameters_mut(&mut self) -> Vec<&mut Tensor> {
        match self {
            Layer::Linear(linear) => linear.parameters_mut(),
            Layer::Activation(activation) => activation.parameters_mut(),
        }
    }
}

/// 依次通过各层
pub fn forward_layers(layers: &[Layer], input: &Tensor) -> Result<Tensor, ModelError> {
    layers
        .iter()
        .try_fold(input.clone(), |x, layer| layer.forward(&x))
}

/// 各层参数的并集（按层的顺序）
pub fn layers_parameters(layers: &[Layer]) -> Vec<&Tensor> {
    layers.iter().flat_map(|layer| layer.parameters()).collect()
}

pub fn layers_parameters_mut(layers: &mut [Layer]) -> Vec<&mut Tensor> {
    layers
        .iter_mut()
        .flat_map(|layer| layer.parameters_mut())
        .collect()
}
