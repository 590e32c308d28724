/*
 * @Author       : 老董
 * @Date         : 2025-02-12
 * @Description  : 定义域：一维区间（Interval）与轴对齐的矩形/长方体（Rectangle）。
 *                 定义域负责给出自身所在的变量空间，并在其上生成网格点或随机点。
 */

mod interval;
mod rectangle;


pub use interval::Interval;
pub use rectangle::Rectangle;

use crate::errors::SpaceError;
use crate::spaces::{Points, Space};
use enum_dispatch::enum_dispatch;
use rand::rngs::StdRng;

#[enum_dispatch]
#[derive(Debug, Clone, PartialEq)]
pub enum DomainKind {
    Interval,
    Rectangle,
}

#[enum_dispatch(DomainKind)]
pub trait Domain {
    /// 定义域所在的变量空间
    fn space(&self) -> &Space;
    fn dim(&self) -> usize {
        self.space().dim()
    }
    /// 每一维的（下界，上界），顺序同`space()`中的列
    fn bounding_box(&self) -> Vec<(f32, f32)>;
    /// 判断点集中的每个点是否落在定义域内（含边界）。
    /// 点集可以带有额外的变量，只看本定义域的变量；缺少变量时返回`UnknownVariable`
    fn contains(&self, points: &Points) -> Result<Vec<bool>, SpaceError> {
        let bounds = self.bounding_box();
        let values = points.extract(self.space())?.into_tensor().to_vec();
        Ok(values
            .chunks(bounds.len())
            .map(|row| {
                row.iter()
                    .zip(&bounds)
                    .all(|(x, (lower, upper))| lower <= x && x <= upper)
            })
            .collect())
    }
    /// 在定义域上取恰好`n`个网格点
    fn sample_grid(&self, n: usize) -> Points;
    /// 在定义域上均匀随机地取`n`个点
    fn sample_random_uniform(&self, n: usize, rng: &mut StdRng) -> Points;
}

/// 在闭区间[lower, upper]上等距地取`n`个数；`n`为1时取中点
fn axis_grid(lower: f32, upper: f32, n: usize) -> Vec<f32> {
    if n == 1 {
        vec![(lower + upper) / 2.0]
    } else {
        crate::tensor::Tensor::linspace(lower, upper, n).to_vec()
    }
}
