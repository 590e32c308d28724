//! # Only Physics
//!
//! `only_physics`用纯rust实现物理信息机器学习中的算子网络[DeepONet](https://arxiv.org/abs/1910.03193)，
//! 以及描述物理变量及其维度的变量空间（`Space`）代数。
//! 点集、定义域、采样器、函数集都以变量空间为标签，DeepONet的输出同样落在一个具名的输出空间中。
//!
//! 只做模型构建与前向计算，不含自动微分与训练流程。
//!

pub mod domains;
pub mod errors;
pub mod functions;
pub mod nn;
pub mod samplers;
pub mod spaces;
pub mod tensor;
pub mod utils;
