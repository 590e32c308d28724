use super::{Domain, Interval, axis_grid};
use crate::spaces::{Points, Space};
use crate::tensor::Tensor;
use rand::Rng;
use rand::rngs::StdRng;
use std::ops::Mul;

/// 轴对齐的矩形（或更高维的长方体），由若干变量互不相同的区间相乘得到，
/// 如`Interval(x) * Interval(y)`
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    space: Space,
    sides: Vec<Interval>,
}

impl Rectangle {
    /// # Panics
    /// `sides`为空，或各区间的变量有重名时
    pub fn from_sides(sides: Vec<Interval>) -> Self {
        assert!(!sides.is_empty(), "矩形至少须有一条边");
        let mut space = Space::default();
        for side in &sides {
            assert!(
                !space.contains(side.space()),
                "矩形各边的变量须互不相同：{}已在{}中",
                side.space(),
                space
            );
            space = space * side.space();
        }
        Self { space, sides }
    }

    pub fn sides(&self) -> &[Interval] {
        &self.sides
    }
}

impl Domain for Rectangle {
    fn space(&self) -> &Space {
        &self.space
    }

    fn bounding_box(&self) -> Vec<(f32, f32)> {
        self.sides
            .iter()
            .map(|side| (side.lower(), side.upper()))
            .collect()
    }

    /// 每一维取`k`个等距点（`k`为满足`k^d >= n`的最小整数），
    /// 按行优先组合后截取前`n`个
    fn sample_grid(&self, n: usize) -> Points {
        let d = self.sides.len();
        let mut k: usize = 1;
        while k.pow(d as u32) < n {
            k += 1;
        }
        let axes = self
            .sides
            .iter()
            .map(|side| axis_grid(side.lower(), side.upper(), k))
            .collect::<Vec<_>>();

        let mut data = Vec::with_capacity(n * d);
        for index in 0..n {
            // 将index按k进制展开，最后一维变化最快
            let mut rest = index;
            let mut row = vec![0.0; d];
            for axis in (0..d).rev() {
                row[axis] = axes[axis][rest % k];
                rest /= k;
            }
            data.extend(row);
        }
        Points::from_parts(Tensor::new(&data, &[n, d]), self.space.clone())
    }

    fn sample_random_uniform(&self, n: usize, rng: &mut StdRng) -> Points {
        let bounds = self.bounding_box();
        let data = (0..n)
            .flat_map(|_| {
                bounds
                    .iter()
                    .map(|(lower, upper)| rng.gen_range(*lower..=*upper))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        Points::from_parts(Tensor::new(&data, &[n, bounds.len()]), self.space.clone())
    }
}

impl Mul<Interval> for Rectangle {
    type Output = Rectangle;

    fn mul(self, other: Interval) -> Rectangle {
        let mut sides = self.sides;
        sides.push(other);
        Rectangle::from_sides(sides)
    }
}
