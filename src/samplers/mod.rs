/*
 * @Author       : 老董
 * @Date         : 2025-02-12
 * @Description  : 点采样器：在定义域上生成固定数目的点，供BranchNet离散化函数、
 *                 或供函数集求值使用。采样点数在采样器的整个生命周期内不变。
 */

mod grid;
mod random;
mod static_sampler;

#[cfg(test)]
mod tests;

pub use grid::GridSampler;
pub use random::RandomUniformSampler;
pub use static_sampler::StaticSampler;

use crate::spaces::{Points, Space};
use enum_dispatch::enum_dispatch;

#[enum_dispatch]
#[derive(Debug, Clone, PartialEq)]
pub enum Sampler {
    GridSampler,
    RandomUniformSampler,
    StaticSampler,
}

#[enum_dispatch(Sampler)]
pub trait PointSampler {
    /// 生成一批点，形状为`[len(), space().dim()]`
    fn sample_points(&mut self) -> Points;
    /// 每次采样的点数
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// 采样点所在的变量空间
    fn space(&self) -> &Space;
    /// 是否每次都返回同一批点
    fn is_static(&self) -> bool {
        false
    }
}

impl Sampler {
    /// 转为静态采样器：第一次采样后记住结果，此后每次都返回同一批点
    pub fn make_static(self) -> Sampler {
        match self {
            Sampler::StaticSampler(_) => self,
            other => StaticSampler::new(other).into(),
        }
    }
}

/// 采样点数须为正
fn assert_n_points(n_points: usize) {
    assert!(n_points > 0, "采样器：采样点数必须大于 0");
}
