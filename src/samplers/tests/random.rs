use crate::domains::{Domain, Interval};
use crate::samplers::{PointSampler, RandomUniformSampler};
use crate::spaces::Space;

fn interval() -> Interval {
    Interval::new(Space::r1("t"), 0., 1.).unwrap()
}

#[test]
fn test_random_sampler_resamples() {
    let mut sampler = RandomUniformSampler::with_seed(interval(), 20, 1);
    let first = sampler.sample_points();
    let second = sampler.sample_points();
    assert_eq!(first.as_tensor().shape(), &[20, 1]);
    assert_ne!(first, second);
    assert!(interval().contains(&second).unwrap().iter().all(|&inside| inside));
}

#[test]
fn test_random_sampler_with_seed_is_reproducible() {
    let mut a = RandomUniformSampler::with_seed(interval(), 20, 3);
    let mut b = RandomUniformSampler::with_seed(interval(), 20, 3);
    assert_eq!(a.sample_points(), b.sample_points());
    // 比较时不看随机数生成器的状态
    assert_eq!(a, RandomUniformSampler::new(interval(), 20));
}
