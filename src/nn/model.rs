/*
 * @Author       : 老董
 * @Date         : 2025-02-15
 * @Description  : 点集到点集的模型（Model），以及用于预处理的归一化层与串联容器
 */

use super::Module;
use super::deeponet::TrunkNet;
use crate::domains::Domain;
use crate::errors::{ModelError, SpaceError};
use crate::spaces::{Points, Space};
use crate::tensor::Tensor;

/// 以点集为输入、点集为输出的模型
pub trait Model: Module {
    fn input_space(&self) -> &Space;
    fn output_space(&self) -> &Space;
    /// 只使用`points`中属于`input_space`的列，结果带`output_space`标签
    fn forward(&self, points: &Points) -> Result<Points, ModelError>;
}

/// 将定义域的包围盒线性映射到[-1, 1]：`y = 2 * (x - lower) / (upper - lower) - 1`。
/// 没有可训练的参数。
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationLayer {
    space: Space,
    scale: Tensor,
    shift: Tensor,
}

impl NormalizationLayer {
    pub fn new(domain: &impl Domain) -> Self {
        let bounds = domain.bounding_box();
        let scale = bounds
            .iter()
            .map(|(lower, upper)| 2.0 / (upper - lower))
            .collect::<Vec<_>>();
        let shift = bounds
            .iter()
            .zip(&scale)
            .map(|((lower, _), s)| -lower * s - 1.0)
            .collect::<Vec<_>>();
        let dim = bounds.len();
        Self {
            space: domain.space().clone(),
            scale: Tensor::new(&scale, &[1, dim]),
            shift: Tensor::new(&shift, &[1, dim]),
        }
    }
}

impl Model for NormalizationLayer {
    fn input_space(&self) -> &Space {
        &self.space
    }

    fn output_space(&self) -> &Space {
        &self.space
    }

    fn forward(&self, points: &Points) -> Result<Points, ModelError> {
        let x = points.extract(&self.space)?;
        let y = x.as_tensor() * &self.scale + &self.shift;
        Ok(Points::new(y, self.space.clone())?)
    }
}

impl Module for NormalizationLayer {
    fn parameters(&self) -> Vec<&Tensor> {
        Vec::new()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Tensor> {
        Vec::new()
    }
}

/// 若干预处理模型与一个TrunkNet的串联，如`Sequential::new(vec![Box::new(norm)], trunk)`。
/// 相邻两级的空间须相接：前一级的输出空间须包含后一级的输入空间。
pub struct Sequential<T: TrunkNet> {
    pre: Vec<Box<dyn Model>>,
    trunk: T,
}

impl<T: TrunkNet> Sequential<T> {
    pub fn new(pre: Vec<Box<dyn Model>>, trunk: T) -> Result<Self, ModelError> {
        let inputs = pre
            .iter()
            .skip(1)
            .map(|m| m.input_space())
            .chain(std::iter::once(trunk.input_space()));
        for (stage, next_input) in pre.iter().zip(inputs) {
            if !stage.output_space().contains(next_input) {
                return Err(SpaceError::SpaceMismatch {
                    expected: next_input.to_string(),
                    got: stage.output_space().to_string(),
                }
                .into());
            }
        }
        Ok(Self { pre, trunk })
    }

    pub fn trunk(&self) -> &T {
        &self.trunk
    }

    pub fn stages(&self) -> &[Box<dyn Model>] {
        &self.pre
    }
}

impl<T: TrunkNet> TrunkNet for Sequential<T> {
    fn input_space(&self) -> &Space {
        match self.pre.first() {
            Some(first) => first.input_space(),
            None => self.trunk.input_space(),
        }
    }

    fn output_space(&self) -> &Space {
        self.trunk.output_space()
    }

    fn output_neurons(&self) -> usize {
        self.trunk.output_neurons()
    }

    fn forward(&self, points: &Points) -> Result<Tensor, ModelError> {
        let mut points = points.clone();
        for stage in &self.pre {
            points = stage.forward(&points)?;
        }
        self.trunk.forward(&points)
    }
}

impl<T: TrunkNet + Module> Module for Sequential<T> {
    fn parameters(&self) -> Vec<&Tensor> {
        self.pre
            .iter()
            .flat_map(|m| m.parameters())
            .chain(self.trunk.parameters())
            .collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Tensor> {
        self.pre
            .iter_mut()
            .flat_map(|m| m.parameters_mut())
            .chain(self.trunk.parameters_mut())
            .collect()
    }
}
