/*
 * @Author       : 老董
 * @Date         : 2025-02-16
 * @Description  : DeepONet：branch网络把输入函数编码为潜在特征，trunk网络把查询点编码为潜在特征，
 *                 二者的内积给出算子作用于该函数后在查询点上的值。
 */

mod branch;
#[allow(clippy::module_inception)]
mod deeponet;
mod trunk;

pub use branch::{BranchInput, BranchNet, BranchNetBase, FCBranchNet, function_set_key};
pub use deeponet::DeepONet;
pub use trunk::{FCTrunkNet, TrunkNet, TrunkNetBase};
