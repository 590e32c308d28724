use super::{PointSampler, Sampler, assert_n_points};
use crate::domains::{Domain, DomainKind};
use crate::spaces::{Points, Space};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// 在定义域上均匀随机取点，每次采样重新抽取
#[derive(Debug, Clone)]
pub struct RandomUniformSampler {
    domain: DomainKind,
    n_points: usize,
    rng: StdRng,
}

impl RandomUniformSampler {
    /// # Panics
    /// `n_points`为0时
    pub fn new(domain: impl Into<DomainKind>, n_points: usize) -> Self {
        assert_n_points(n_points);
        Self {
            domain: domain.into(),
            n_points,
            rng: StdRng::from_entropy(),
        }
    }

    /// 使用固定种子，使采样结果可复现
    pub fn with_seed(domain: impl Into<DomainKind>, n_points: usize, seed: u64) -> Self {
        assert_n_points(n_points);
        Self {
            domain: domain.into(),
            n_points,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn make_static(self) -> Sampler {
        Sampler::from(self).make_static()
    }
}

// 随机数生成器的内部状态不参与比较
impl PartialEq for RandomUniformSampler {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain && self.n_points == other.n_points
    }
}

impl PointSampler for RandomUniformSampler {
    fn sample_points(&mut self) -> Points {
        self.domain
            .sample_random_uniform(self.n_points, &mut self.rng)
    }

    fn len(&self) -> usize {
        self.n_points
    }

    fn space(&self) -> &Space {
        self.domain.space()
    }
}
