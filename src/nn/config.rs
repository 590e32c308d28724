/*
 * @Author       : 老董
 * @Date         : 2025-02-14
 * @Description  : 全连接网络的构建配置。激活函数与Xavier增益既可以是单个值（各层共用），
 *                 也可以是逐层的列表。
 */

use super::layer::Activation;
use crate::errors::ModelError;
use serde::{Deserialize, Serialize};

/// 单个值（广播到每一层）或逐层列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PerLayer<T> {
    Single(T),
    List(Vec<T>),
}

impl<T: Clone> PerLayer<T> {
    /// 展开为长度为`n`的逐层列表；列表长度不等于`n`时返回`InvalidConfig`
    pub fn resolve(&self, n: usize, what: &str) -> Result<Vec<T>, ModelError> {
        match self {
            PerLayer::Single(value) => Ok(vec![value.clone(); n]),
            PerLayer::List(values) if values.len() == n => Ok(values.clone()),
            PerLayer::List(values) => Err(ModelError::InvalidConfig(format!(
                "{what}的个数须为{n}，实际为{}",
                values.len()
            ))),
        }
    }
}

impl From<Activation> for PerLayer<Activation> {
    fn from(activation: Activation) -> Self {
        PerLayer::Single(activation)
    }
}

impl From<Vec<Activation>> for PerLayer<Activation> {
    fn from(activations: Vec<Activation>) -> Self {
        PerLayer::List(activations)
    }
}

impl From<f32> for PerLayer<f32> {
    fn from(gain: f32) -> Self {
        PerLayer::Single(gain)
    }
}

impl From<Vec<f32>> for PerLayer<f32> {
    fn from(gains: Vec<f32>) -> Self {
        PerLayer::List(gains)
    }
}

/// 全连接网络（FCN、FCTrunkNet、FCBranchNet）的隐藏层配置
///
/// # 示例
/// ```ignore
/// let config = FcConfig::from_json(r#"{"hidden": [30, 30], "activations": "Sin", "seed": 42}"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FcConfig {
    /// 各隐藏层的神经元个数
    pub hidden: Vec<usize>,
    /// 每个隐藏层之后的激活函数（`hidden.len()`个）
    pub activations: PerLayer<Activation>,
    /// 每个线性层的Xavier增益（`hidden.len() + 1`个）
    pub xavier_gains: PerLayer<f32>,
    /// 参数初始化所用的随机种子；为`None`时每次初始化都不同
    pub seed: Option<u64>,
}

impl Default for FcConfig {
    fn default() -> Self {
        Self {
            hidden: vec![20, 20, 20],
            activations: PerLayer::Single(Activation::Tanh),
            xavier_gains: PerLayer::Single(5.0 / 3.0),
            seed: None,
        }
    }
}

impl FcConfig {
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(|e| ModelError::InvalidConfig(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ModelError> {
        serde_json::to_string_pretty(self).map_err(|e| ModelError::InvalidConfig(e.to_string()))
    }

    pub fn with_hidden(mut self, hidden: &[usize]) -> Self {
        self.hidden = hidden.to_vec();
        self
    }

    pub fn with_activations(mut self, activations: impl Into<PerLayer<Activation>>) -> Self {
        self.activations = activations.into();
        self
    }

    pub fn with_xavier_gains(mut self, xavier_gains: impl Into<PerLayer<f32>>) -> Self {
        self.xavier_gains = xavier_gains.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
