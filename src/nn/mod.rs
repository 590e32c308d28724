/*
 * @Author       : 老董
 * @Date         : 2025-02-14
 * @Description  : 神经网络：网络层、全连接模型、预处理模型以及DeepONet。
 *                 只做前向计算（不含自动微分与训练）。
 */

mod config;
mod deeponet;
mod fcn;
pub mod layer;
mod model;
pub mod model_io;
mod module;

#[cfg(test)]
mod tests;

pub use config::{FcConfig, PerLayer};
pub use deeponet::{
    BranchInput, BranchNet, BranchNetBase, DeepONet, FCBranchNet, FCTrunkNet, TrunkNet,
    TrunkNetBase, function_set_key,
};
pub use fcn::{FCN, construct_fc_layers};
pub use model::{Model, NormalizationLayer, Sequential};
pub use module::Module;
