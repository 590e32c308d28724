/*
 * @Author       : 老董
 * @Date         : 2025-02-14
 * @Description  : Module trait 定义
 */

use crate::tensor::Tensor;

/// 模块 trait
///
/// # 设计原则
/// - `forward()` **不是** trait 方法（各类网络的签名各异，见`Model`、`TrunkNet`、`BranchNet`）
/// - `new()` **不是** trait 方法（参数各异）
/// - `parameters()` 返回参数张量的引用（签名一致，放入 trait）
pub trait Module {
    /// 获取所有参数
    ///
    /// 用于：
    /// - 序列化/保存模型参数
    /// - 统计参数数量
    fn parameters(&self) -> Vec<&Tensor>;

    /// 获取所有参数的可变引用（加载参数时使用）
    fn parameters_mut(&mut self) -> Vec<&mut Tensor>;

    /// 参数的元素总数
    fn num_params(&self) -> usize {
        self.parameters().iter().map(|p| p.size()).sum()
    }
}
