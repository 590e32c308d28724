use super::{PointSampler, Sampler, assert_n_points};
use crate::domains::{Domain, DomainKind};
use crate::spaces::{Points, Space};

/// 在定义域上取等距网格点，每次采样结果相同
#[derive(Debug, Clone, PartialEq)]
pub struct GridSampler {
    domain: DomainKind,
    n_points: usize,
}

impl GridSampler {
    /// # Panics
    /// `n_points`为0时
    pub fn new(domain: impl Into<DomainKind>, n_points: usize) -> Self {
        assert_n_points(n_points);
        Self {
            domain: domain.into(),
            n_points,
        }
    }

    pub fn make_static(self) -> Sampler {
        Sampler::from(self).make_static()
    }
}

impl PointSampler for GridSampler {
    fn sample_points(&mut self) -> Points {
        self.domain.sample_grid(self.n_points)
    }

    fn len(&self) -> usize {
        self.n_points
    }

    fn space(&self) -> &Space {
        self.domain.space()
    }
}
