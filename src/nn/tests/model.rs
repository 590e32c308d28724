use crate::assert_err;
use crate::domains::Interval;
use crate::errors::{ModelError, SpaceError};
use crate::nn::{
    FCN, FCTrunkNet, FcConfig, Model, Module, NormalizationLayer, Sequential, TrunkNet,
    TrunkNetBase,
};
use crate::spaces::{Points, Space};
use crate::tensor::Tensor;

#[test]
fn test_normalization_layer() {
    let norm = NormalizationLayer::new(&Interval::new(Space::r1("t"), 2., 6.).unwrap());
    assert_eq!(*norm.input_space(), Space::r1("t"));
    assert_eq!(*norm.output_space(), Space::r1("t"));
    assert_eq!(norm.num_params(), 0);

    let points = Points::new(Tensor::new(&[2., 4., 6.], &[3, 1]), Space::r1("t")).unwrap();
    let out = norm.forward(&points).unwrap();
    assert_eq!(out.as_tensor(), &Tensor::new(&[-1., 0., 1.], &[3, 1]));
}

#[test]
fn test_normalization_layer_on_rectangle() {
    let rect = Interval::new(Space::r1("x"), 0., 1.).unwrap()
        * Interval::new(Space::r1("y"), -2., 2.).unwrap();
    let norm = NormalizationLayer::new(&rect);
    let points = Points::new(
        Tensor::new(&[0., -2., 0.5, 0., 1., 2.], &[3, 2]),
        Space::r1("x") * Space::r1("y"),
    )
    .unwrap();
    let out = norm.forward(&points).unwrap();
    assert_eq!(
        out.as_tensor(),
        &Tensor::new(&[-1., -1., 0., 0., 1., 1.], &[3, 2])
    );
}

#[test]
fn test_sequential_trunk() {
    let norm = NormalizationLayer::new(&Interval::new(Space::r1("t"), 0., 10.).unwrap());
    let trunk = FCTrunkNet::new(Space::r1("t"), Space::r1("u"), 20, &FcConfig::default()).unwrap();
    let n_params = trunk.num_params();
    let seq = Sequential::new(vec![Box::new(norm)], trunk).unwrap();
    assert_eq!(*seq.input_space(), Space::r1("t"));
    assert_eq!(*seq.output_space(), Space::r1("u"));
    assert_eq!(seq.output_neurons(), 20);
    assert_eq!(seq.stages().len(), 1);
    assert_eq!(seq.num_params(), n_params);

    let points = Points::new(Tensor::new(&[0., 5., 10.], &[3, 1]), Space::r1("t")).unwrap();
    assert_eq!(seq.forward(&points).unwrap().shape(), &[3, 20]);
}

#[test]
fn test_sequential_spaces_must_chain() {
    let norm = NormalizationLayer::new(&Interval::new(Space::r1("x"), 0., 1.).unwrap());
    let trunk = TrunkNetBase::new(Space::r1("t"), Space::r1("u"), 20);
    assert_err!(
        Sequential::new(vec![Box::new(norm)], trunk),
        ModelError::Space(SpaceError::SpaceMismatch { .. })
    );

    // 中间一级的输出空间须包含下一级的输入空间
    let fcn = FCN::new(Space::r1("t"), Space::r1("s"), &FcConfig::default()).unwrap();
    let norm = NormalizationLayer::new(&Interval::new(Space::r1("t"), 0., 1.).unwrap());
    let trunk = TrunkNetBase::new(Space::r1("t"), Space::r1("u"), 20);
    assert_err!(
        Sequential::new(vec![Box::new(norm), Box::new(fcn)], trunk),
        ModelError::Space(_)
    );
}
