use super::{PointSampler, Sampler};
use crate::spaces::{Points, Space};
use log::trace;

/// 记忆化的采样器：首次采样的结果被缓存，之后原样返回
#[derive(Debug, Clone, PartialEq)]
pub struct StaticSampler {
    inner: Box<Sampler>,
    cache: Option<Points>,
}

impl StaticSampler {
    pub fn new(inner: Sampler) -> Self {
        Self {
            inner: Box::new(inner),
            cache: None,
        }
    }
}

impl PointSampler for StaticSampler {
    fn sample_points(&mut self) -> Points {
        match &self.cache {
            Some(points) => points.clone(),
            None => {
                trace!("静态采样器首次采样：{}个点", self.inner.len());
                let points = self.inner.sample_points();
                self.cache = Some(points.clone());
                points
            }
        }
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn space(&self) -> &Space {
        self.inner.space()
    }

    fn is_static(&self) -> bool {
        true
    }
}
