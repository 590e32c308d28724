/*
 * @Author       : 老董
 * @Date         : 2025-02-14
 * @Description  : 全连接网络：逐层构建函数，以及作用在点集上的全连接模型（FCN）
 */

use super::config::{FcConfig, PerLayer};
use super::layer::{
    Activation, Layer, Linear, forward_layers, layers_parameters, layers_parameters_mut,
};
use super::{Model, Module};
use crate::errors::ModelError;
use crate::spaces::{Points, Space};
use crate::tensor::Tensor;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// 构建全连接层序列：
/// `Linear(input_dim, hidden[0]) -> act[0] -> ... -> Linear(hidden[-1], output_dim)`。
///
/// `activations`须为单个值或`hidden.len()`个，`xavier_gains`须为单个值或`hidden.len() + 1`个，
/// 否则返回`InvalidConfig`。`hidden`为空时只有一个线性层。
pub fn construct_fc_layers(
    hidden: &[usize],
    input_dim: usize,
    output_dim: usize,
    activations: &PerLayer<Activation>,
    xavier_gains: &PerLayer<f32>,
    rng: &mut StdRng,
) -> Result<Vec<Layer>, ModelError> {
    let activations = activations.resolve(hidden.len(), "激活函数")?;
    let gains = xavier_gains.resolve(hidden.len() + 1, "Xavier增益")?;

    let mut layers = Vec::with_capacity(2 * hidden.len() + 1);
    let mut in_features = input_dim;
    for ((&width, activation), &gain) in hidden.iter().zip(activations).zip(&gains) {
        layers.push(Linear::new(in_features, width, gain, rng).into());
        layers.push(activation.into());
        in_features = width;
    }
    layers.push(Linear::new(in_features, output_dim, gains[hidden.len()], rng).into());
    Ok(layers)
}

/// 按配置构建全连接层；配置了`seed`时初始化结果可复现
pub(crate) fn layers_from_config(
    config: &FcConfig,
    input_dim: usize,
    output_dim: usize,
) -> Result<Vec<Layer>, ModelError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!(
        "构建全连接网络：{input_dim} -> {:?} -> {output_dim}",
        config.hidden
    );
    construct_fc_layers(
        &config.hidden,
        input_dim,
        output_dim,
        &config.activations,
        &config.xavier_gains,
        &mut rng,
    )
}

/// 作用在点集上的全连接网络：从`input_space`的各列映射到`output_space`
#[derive(Debug, Clone, PartialEq)]
pub struct FCN {
    input_space: Space,
    output_space: Space,
    layers: Vec<Layer>,
}

impl FCN {
    pub fn new(
        input_space: Space,
        output_space: Space,
        config: &FcConfig,
    ) -> Result<Self, ModelError> {
        let layers = layers_from_config(config, input_space.dim(), output_space.dim())?;
        Ok(Self {
            input_space,
            output_space,
            layers,
        })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Model for FCN {
    fn input_space(&self) -> &Space {
        &self.input_space
    }

    fn output_space(&self) -> &Space {
        &self.output_space
    }

    fn forward(&self, points: &Points) -> Result<Points, ModelError> {
        let input = points.extract(&self.input_space)?;
        let out: Tensor = forward_layers(&self.layers, input.as_tensor())?;
        Ok(Points::new(out, self.output_space.clone())?)
    }
}

impl Module for FCN {
    fn parameters(&self) -> Vec<&Tensor> {
        layers_parameters(&self.layers)
    }

    fn parameters_mut(&mut self) -> Vec<&mut Tensor> {
        layers_parameters_mut(&mut self.layers)
    }
}
