use super::{Domain, Rectangle, axis_grid};
use crate::errors::SpaceError;
use crate::spaces::{Points, Space};
use crate::tensor::Tensor;
use rand::rngs::StdRng;
use std::ops::Mul;

/// 一维闭区间[lower, upper]，所在空间须为一维
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    space: Space,
    lower: f32,
    upper: f32,
}

impl Interval {
    /// 空间不是一维时返回`DimensionMismatch`，`lower`不小于`upper`时返回`InvalidBounds`
    pub fn new(space: Space, lower: f32, upper: f32) -> Result<Self, SpaceError> {
        if space.dim() != 1 {
            return Err(SpaceError::DimensionMismatch {
                expected: 1,
                got: space.dim(),
            });
        }
        if !(lower < upper) {
            return Err(SpaceError::InvalidBounds { lower, upper });
        }
        Ok(Self {
            space,
            lower,
            upper,
        })
    }

    pub fn lower(&self) -> f32 {
        self.lower
    }

    pub fn upper(&self) -> f32 {
        self.upper
    }
}

impl Domain for Interval {
    fn space(&self) -> &Space {
        &self.space
    }

    fn bounding_box(&self) -> Vec<(f32, f32)> {
        vec![(self.lower, self.upper)]
    }

    fn sample_grid(&self, n: usize) -> Points {
        let data = axis_grid(self.lower, self.upper, n);
        Points::from_parts(Tensor::new(&data, &[n, 1]), self.space.clone())
    }

    fn sample_random_uniform(&self, n: usize, rng: &mut StdRng) -> Points {
        let data = Tensor::uniform_with_rng(self.lower, self.upper, &[n, 1], rng);
        Points::from_parts(data, self.space.clone())
    }
}

/// 两个区间的乘积为矩形
impl Mul for Interval {
    type Output = Rectangle;

    fn mul(self, other: Interval) -> Rectangle {
        Rectangle::from_sides(vec![self, other])
    }
}
