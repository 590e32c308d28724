use crate::assert_panic;
use crate::domains::Interval;
use crate::samplers::{GridSampler, PointSampler, Sampler};
use crate::spaces::Space;

fn interval() -> Interval {
    Interval::new(Space::r1("t"), 0., 1.).unwrap()
}

#[test]
fn test_grid_sampler() {
    let mut sampler = GridSampler::new(interval(), 10);
    assert_eq!(sampler.len(), 10);
    assert_eq!(*sampler.space(), Space::r1("t"));
    assert!(!sampler.is_static());

    let points = sampler.sample_points();
    assert_eq!(points.as_tensor().shape(), &[10, 1]);
    assert_eq!(sampler.sample_points(), points);
}

#[test]
fn test_grid_sampler_with_zero_points() {
    assert_panic!(GridSampler::new(interval(), 0));
}

#[test]
fn test_sampler_enum_dispatch() {
    let mut sampler: Sampler = GridSampler::new(interval(), 15).into();
    assert_eq!(sampler.len(), 15);
    assert_eq!(sampler.sample_points().len(), 15);
}
