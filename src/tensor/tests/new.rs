use crate::assert_panic;
use crate::tensor::Tensor;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_new() {
    let tensor = Tensor::new(&[1., 2., 3., 4.], &[2, 2]);
    assert_eq!(tensor.shape(), &[2, 2]);
    assert_eq!(tensor.to_vec(), vec![1., 2., 3., 4.]);
    // 标量
    let tensor = Tensor::new(&[1.], &[]);
    assert_eq!(tensor.dimension(), 0);
    assert_eq!(tensor.number(), Some(1.));
    // 数据长度与形状不符
    assert_panic!(Tensor::new(&[1., 2., 3.], &[2, 2]));
}

#[test]
fn test_empty() {
    let tensor = Tensor::empty();
    assert!(tensor.is_empty());
    assert_eq!(tensor.shape(), &[0]);
    assert_eq!(tensor.size(), 0);
}

#[test]
fn test_linspace() {
    let tensor = Tensor::linspace(0., 1., 5);
    assert_eq!(tensor, Tensor::new(&[0., 0.25, 0.5, 0.75, 1.], &[5]));
    assert_panic!(Tensor::linspace(0., 1., 0));
}

#[test]
fn test_uniform_with_rng() {
    let mut rng = StdRng::seed_from_u64(42);
    let tensor = Tensor::uniform_with_rng(-1., 2., &[10, 3], &mut rng);
    assert_eq!(tensor.shape(), &[10, 3]);
    assert!(tensor.to_vec().iter().all(|&x| (-1. ..=2.).contains(&x)));

    // 同一种子得到同一结果
    let mut rng_1 = StdRng::seed_from_u64(7);
    let mut rng_2 = StdRng::seed_from_u64(7);
    assert_eq!(
        Tensor::uniform_with_rng(0., 1., &[4], &mut rng_1),
        Tensor::uniform_with_rng(0., 1., &[4], &mut rng_2)
    );
}

#[test]
fn test_normal_with_rng() {
    let mut rng = StdRng::seed_from_u64(42);
    let tensor = Tensor::normal_with_rng(0., 1., &[100, 100], &mut rng);
    assert_eq!(tensor.size(), 10000);
    let mean = tensor.sum().number().unwrap() / 10000.;
    assert!(mean.abs() < 0.05, "均值偏离过大: {mean}");
    assert!(tensor.to_vec().iter().all(|x| x.is_finite()));
}
