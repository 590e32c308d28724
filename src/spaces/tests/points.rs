use crate::assert_err;
use crate::errors::{ModelError, SpaceError};
use crate::spaces::{Points, Space};
use crate::tensor::Tensor;

fn xt_points() -> Points {
    // 空间为 {x: 2, t: 1}
    let data = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]);
    Points::new(data, Space::r2("x") * Space::r1("t")).unwrap()
}

#[test]
fn test_create_points() {
    let points = xt_points();
    assert_eq!(points.len(), 2);
    assert_eq!(points.as_tensor().shape(), &[2, 3]);
    assert_eq!(*points.space(), Space::r2("x") * Space::r1("t"));
}

#[test]
fn test_create_points_with_wrong_dimension() {
    let data = Tensor::zeros(&[4, 2]);
    assert_err!(
        Points::new(data, Space::r3("x")),
        SpaceError::DimensionMismatch {
            expected: 3,
            got: 2
        }
    );
    // 阶数须不小于2
    assert_err!(Points::new(Tensor::zeros(&[3]), Space::r3("x")));
}

#[test]
fn test_variable_columns() {
    let points = xt_points();
    assert_eq!(
        points.variable("x").unwrap(),
        Tensor::new(&[1., 2., 4., 5.], &[2, 2])
    );
    assert_eq!(points.variable("t").unwrap(), Tensor::new(&[3., 6.], &[2, 1]));
    assert_err!(points.variable("u"), SpaceError::UnknownVariable(_));
}

#[test]
fn test_extract_reorders_columns() {
    let points = xt_points();
    let tx = points.extract(&(Space::r1("t") * Space::r2("x"))).unwrap();
    assert_eq!(
        tx.as_tensor(),
        &Tensor::new(&[3., 1., 2., 6., 4., 5.], &[2, 3])
    );
    assert_eq!(tx.space().keys().collect::<Vec<_>>(), vec!["t", "x"]);

    let t = points.extract(&Space::r1("t")).unwrap();
    assert_eq!(t.as_tensor(), &Tensor::new(&[3., 6.], &[2, 1]));
}

#[test]
fn test_extract_unknown_or_mismatched_variable() {
    let points = xt_points();
    assert_err!(points.extract(&Space::r1("u")), SpaceError::UnknownVariable(_));
    assert_err!(points.extract(&Space::r1("x")), SpaceError::SpaceMismatch { .. });
}

#[test]
fn test_join_points() {
    let x = Points::new(Tensor::new(&[1., 2.], &[2, 1]), Space::r1("x")).unwrap();
    let t = Points::new(Tensor::new(&[3., 4.], &[2, 1]), Space::r1("t")).unwrap();
    let joined = x.join(&t).unwrap();
    assert_eq!(joined.as_tensor(), &Tensor::new(&[1., 3., 2., 4.], &[2, 2]));
    assert_eq!(*joined.space(), Space::r1("x") * Space::r1("t"));

    assert_err!(x.join(&x), ModelError::Space(SpaceError::SpaceMismatch { .. }));
    let short = Points::new(Tensor::new(&[5.], &[1, 1]), Space::r1("u")).unwrap();
    assert_err!(x.join(&short), ModelError::Tensor(_));
}

#[test]
fn test_repeat_and_tile_rows() {
    let x = Points::new(Tensor::new(&[1., 2.], &[2, 1]), Space::r1("x")).unwrap();
    assert_eq!(
        x.repeat_rows(2).as_tensor(),
        &Tensor::new(&[1., 1., 2., 2.], &[4, 1])
    );
    assert_eq!(
        x.tile_rows(2).as_tensor(),
        &Tensor::new(&[1., 2., 1., 2.], &[4, 1])
    );
}

#[test]
fn test_print_points_of_rank_3() {
    let points = Points::new(Tensor::new(&[1., 2., 3., 4.], &[2, 2, 1]), Space::r1("u")).unwrap();
    let printed = format!("{points}");
    assert!(printed.starts_with("Points over Space({'u': 1})\n[0, :, :] =\n"));
    assert!(printed.contains("[1, :, :] =\n[[  3.0000], \n [  4.0000]]"));
}
