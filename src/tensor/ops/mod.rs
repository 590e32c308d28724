/*
 * @Author       : 老董
 * @Date         : 2023-08-17 17:24:24
 * @Description  : 张量的“逐元素”二元运算（加、减、乘），支持 NumPy 风格广播（broadcasting）；
 *                 以及张量与纯数之间的运算。带引用与不带引用的张量均可参与运算。
 */

use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;
use ndarray::ArrayD;

/// 两个张量逐元素运算，支持 NumPy 风格广播
///
/// # 广播规则
/// - 从右向左对齐维度
/// - 每个维度必须相等，或其中一个为 1
/// - 维度数不同时，较短的形状前面补 1
///
/// # Panics
/// 如果形状不兼容（无法广播）
fn broadcast_within_tensors(
    tensor_1: &Tensor,
    tensor_2: &Tensor,
    operator: Operator,
    op: impl Fn(&ArrayD<f32>, &ArrayD<f32>) -> ArrayD<f32>,
) -> Tensor {
    assert!(
        tensor_1.can_broadcast_with(tensor_2),
        "{}",
        TensorError::OperatorError {
            operator,
            tensor1_shape: tensor_1.shape().to_vec(),
            tensor2_shape: tensor_2.shape().to_vec(),
        }
    );
    Tensor {
        data: op(&tensor_1.data, &tensor_2.data),
    }
}

/// 为`Tensor`（及其引用）生成与另一个张量、与`f32`之间的二元运算
macro_rules! impl_tensor_binary_op {
    ($trait:ident, $method:ident, $operator:expr, $op:tt) => {
        /*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓（不）带引用的张量 与（不）带引用的张量↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
        impl std::ops::$trait for Tensor {
            type Output = Tensor;

            fn $method(self, other: Tensor) -> Tensor {
                super::broadcast_within_tensors(&self, &other, $operator, |a, b| a $op b)
            }
        }

        impl<'a> std::ops::$trait<&'a Tensor> for Tensor {
            type Output = Tensor;

            fn $method(self, other: &'a Tensor) -> Tensor {
                super::broadcast_within_tensors(&self, other, $operator, |a, b| a $op b)
            }
        }

        impl std::ops::$trait<Tensor> for &Tensor {
            type Output = Tensor;

            fn $method(self, other: Tensor) -> Tensor {
                super::broadcast_within_tensors(self, &other, $operator, |a, b| a $op b)
            }
        }

        impl<'b> std::ops::$trait<&'b Tensor> for &Tensor {
            type Output = Tensor;

            fn $method(self, other: &'b Tensor) -> Tensor {
                super::broadcast_within_tensors(self, other, $operator, |a, b| a $op b)
            }
        }
        /*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑（不）带引用的张量 与（不）带引用的张量↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

        /*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓（不）带引用的张量 与 f32↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
        impl std::ops::$trait<f32> for Tensor {
            type Output = Tensor;

            fn $method(self, scalar: f32) -> Tensor {
                Tensor {
                    data: &self.data $op scalar,
                }
            }
        }

        impl std::ops::$trait<f32> for &Tensor {
            type Output = Tensor;

            fn $method(self, scalar: f32) -> Tensor {
                Tensor {
                    data: &self.data $op scalar,
                }
            }
        }

        impl std::ops::$trait<Tensor> for f32 {
            type Output = Tensor;

            fn $method(self, tensor: Tensor) -> Tensor {
                Tensor {
                    data: self $op &tensor.data,
                }
            }
        }

        impl<'a> std::ops::$trait<&'a Tensor> for f32 {
            type Output = Tensor;

            fn $method(self, tensor: &'a Tensor) -> Tensor {
                Tensor {
                    data: self $op &tensor.data,
                }
            }
        }
        /*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑（不）带引用的张量 与 f32↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/
    };
}

mod add;
mod mat_mul;
mod mul;
mod others;
mod sub;
