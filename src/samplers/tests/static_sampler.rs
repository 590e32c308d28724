use crate::domains::Interval;
use crate::samplers::{GridSampler, PointSampler, RandomUniformSampler, Sampler};
use crate::spaces::Space;

fn interval() -> Interval {
    Interval::new(Space::r1("t"), 0., 1.).unwrap()
}

#[test]
fn test_make_static_memoizes_first_draw() {
    let mut sampler = RandomUniformSampler::with_seed(interval(), 12, 5).make_static();
    assert!(sampler.is_static());
    assert_eq!(sampler.len(), 12);
    assert_eq!(*sampler.space(), Space::r1("t"));

    let first = sampler.sample_points();
    assert_eq!(sampler.sample_points(), first);
    assert_eq!(sampler.sample_points(), first);
}

#[test]
fn test_make_static_twice() {
    let sampler = GridSampler::new(interval(), 10).make_static();
    let again = sampler.clone().make_static();
    assert_eq!(again, sampler);
    assert!(matches!(again, Sampler::StaticSampler(_)));
}
