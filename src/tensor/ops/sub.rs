/*
 * @Author       : 老董
 * @Date         : 2023-08-17 17:24:24
 * @Description  : 张量的减法，规则同加法
 */

use crate::tensor::Tensor;

impl_tensor_binary_op!(Sub, sub, crate::errors::Operator::Sub, -);

impl std::ops::Neg for Tensor {
    type Output = Tensor;

    fn neg(self) -> Tensor {
        Tensor { data: -self.data }
    }
}

impl std::ops::Neg for &Tensor {
    type Output = Tensor;

    fn neg(self) -> Tensor {
        Tensor {
            data: -&self.data,
        }
    }
}
