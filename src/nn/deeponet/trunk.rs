use crate::errors::ModelError;
use crate::nn::config::FcConfig;
use crate::nn::fcn::layers_from_config;
use crate::nn::layer::{Layer, forward_layers, layers_parameters, layers_parameters_mut};
use crate::nn::Module;
use crate::spaces::{Points, Space};
use crate::tensor::Tensor;

/// DeepONet中的trunk网络：把查询点映射为`output_neurons`个潜在特征。
/// 这些神经元只在DeepONet内部使用，最终输出的维度由`output_space`决定。
pub trait TrunkNet {
    /// 查询点所在的空间
    fn input_space(&self) -> &Space;
    fn output_space(&self) -> &Space;
    fn output_neurons(&self) -> usize;
    /// 返回形状为`[点数, output_neurons]`的潜在特征
    fn forward(&self, points: &Points) -> Result<Tensor, ModelError>;
}

/// 只记录空间与神经元个数的trunk，本身不能求值（`forward`返回`NotImplemented`），
/// 具体的网络见`FCTrunkNet`
#[derive(Debug, Clone, PartialEq)]
pub struct TrunkNetBase {
    input_space: Space,
    output_space: Space,
    output_neurons: usize,
}

impl TrunkNetBase {
    pub fn new(input_space: Space, output_space: Space, output_neurons: usize) -> Self {
        Self {
            input_space,
            output_space,
            output_neurons,
        }
    }
}

impl TrunkNet for TrunkNetBase {
    fn input_space(&self) -> &Space {
        &self.input_space
    }

    fn output_space(&self) -> &Space {
        &self.output_space
    }

    fn output_neurons(&self) -> usize {
        self.output_neurons
    }

    fn forward(&self, _points: &Points) -> Result<Tensor, ModelError> {
        Err(ModelError::NotImplemented("TrunkNet::forward"))
    }
}

/// 全连接的trunk网络：`input_space.dim()` -> 隐藏层 -> `output_neurons`
#[derive(Debug, Clone, PartialEq)]
pub struct FCTrunkNet {
    base: TrunkNetBase,
    layers: Vec<Layer>,
}

impl FCTrunkNet {
    pub fn new(
        input_space: Space,
        output_space: Space,
        output_neurons: usize,
        config: &FcConfig,
    ) -> Result<Self, ModelError> {
        let layers = layers_from_config(config, input_space.dim(), output_neurons)?;
        Ok(Self {
            base: TrunkNetBase::new(input_space, output_space, output_neurons),
            layers,
        })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl TrunkNet for FCTrunkNet {
    fn input_space(&self) -> &Space {
        self.base.input_space()
    }

    fn output_space(&self) -> &Space {
        self.base.output_space()
    }

    fn output_neurons(&self) -> usize {
        self.base.output_neurons()
    }

    /// 点集中多余的变量会被忽略
    fn forward(&self, points: &Points) -> Result<Tensor, ModelError> {
        let input = points.extract(self.input_space())?;
        forward_layers(&self.layers, input.as_tensor())
    }
}

impl Module for FCTrunkNet {
    fn parameters(&self) -> Vec<&Tensor> {
        layers_parameters(&self.layers)
    }

    fn parameters_mut(&mut self) -> Vec<&mut Tensor> {
        layers_parameters_mut(&mut self.layers)
    }
}
