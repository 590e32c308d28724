use crate::tensor::Tensor;

#[test]
fn test_print_matrix() {
    let tensor = Tensor::new(&[1., 2., 3., 4.], &[2, 2]);
    let printed = format!("{tensor}");
    assert_eq!(
        printed,
        "[[  1.0000,   2.0000], \n [  3.0000,   4.0000]]\n形状: [2, 2]\n"
    );
}

#[test]
fn test_print_rank_3_by_blocks() {
    // 形状同DeepONet的输出：[函数个数, 点数, 输出维度]
    let tensor = Tensor::new(&[1., 2., 3., 4.], &[2, 2, 1]);
    let printed = format!("{tensor}");
    assert_eq!(
        printed,
        "[0, :, :] =\n[[  1.0000], \n [  2.0000]]\n\
         [1, :, :] =\n[[  3.0000], \n [  4.0000]]\n\
         形状: [2, 2, 1]\n"
    );
}

#[test]
fn test_print_rank_4() {
    let tensor = Tensor::zeros(&[2, 3, 1, 1]);
    let printed = format!("{tensor}");
    assert_eq!(printed.matches(":, :] =").count(), 6);
    assert!(printed.contains("[1, 2, :, :] ="));
    assert!(printed.ends_with("形状: [2, 3, 1, 1]\n"));
}
