use super::Tensor;
use crate::errors::{Operator, TensorError};
use ndarray::{Axis, Slice, concatenate};
use std::ops::Range;

impl Tensor {
    /// 变形为`shape`，元素总数须保持不变
    pub fn reshape(&self, shape: &[usize]) -> Result<Self, TensorError> {
        let reshape_error = || TensorError::ReshapeError {
            from: self.shape().to_vec(),
            size: self.size(),
            to: shape.to_vec(),
        };
        if self.size() != shape.iter().product::<usize>() {
            return Err(reshape_error());
        }
        let data = self
            .data
            .as_standard_layout()
            .into_owned()
            .into_shape(shape.to_vec())
            .map_err(|_| reshape_error())?;
        Ok(Self { data })
    }

    /// 变形为`[-1, cols]`：行数由元素总数推断。
    /// 若元素总数不能被`cols`整除，则返回`RowsReshapeError`
    pub fn reshape_rows(&self, cols: usize) -> Result<Self, TensorError> {
        if cols == 0 || self.size() % cols != 0 {
            return Err(TensorError::RowsReshapeError {
                size: self.size(),
                cols,
            });
        }
        self.reshape(&[self.size() / cols, cols])
    }

    /// 张量的转置（交换前两个维度）；阶数不大于1的张量原样返回
    pub fn transpose(&self) -> Self {
        if self.dimension() <= 1 {
            self.clone()
        } else {
            let mut data = self.data.clone();
            data.swap_axes(0, 1);
            Self {
                data: data.as_standard_layout().into_owned(),
            }
        }
    }

    /// 取最后一维上`range`范围内的切片，如对形状为[n, 5]的张量取`1..3`得到[n, 2]
    pub fn narrow_last(&self, range: Range<usize>) -> Result<Self, TensorError> {
        let rank = self.dimension();
        if rank == 0 {
            return Err(TensorError::AxisOutOfRange { axis: 0, rank });
        }
        let last = rank - 1;
        if range.end > self.shape()[last] || range.start > range.end {
            return Err(TensorError::AxisOutOfRange {
                axis: range.end,
                rank: self.shape()[last],
            });
        }
        let data = self
            .data
            .slice_axis(Axis(last), Slice::from(range))
            .to_owned();
        Ok(Self { data })
    }

    /// 沿最后一维拼接多个张量，除最后一维外其余维度须一致
    pub fn concat_last(tensors: &[&Self]) -> Result<Self, TensorError> {
        let first = tensors.first().ok_or(TensorError::EmptyList)?;
        let rank = first.dimension();
        if rank == 0 {
            return Err(TensorError::AxisOutOfRange { axis: 0, rank });
        }
        for t in tensors.iter().skip(1) {
            if t.dimension() != rank || t.shape()[..rank - 1] != first.shape()[..rank - 1] {
                return Err(TensorError::OperatorError {
                    operator: Operator::Concat,
                    tensor1_shape: first.shape().to_vec(),
                    tensor2_shape: t.shape().to_vec(),
                });
            }
        }
        let views = tensors.iter().map(|t| t.data.view()).collect::<Vec<_>>();
        let data = concatenate(Axis(rank - 1), &views).map_err(|_| TensorError::InconsitentShape)?;
        Ok(Self { data })
    }

    /// 将首个维度上的每一行连续重复`n`次：[a, b] -> [a, a, b, b]
    pub fn repeat_rows(&self, n: usize) -> Self {
        let indices = (0..self.first_len())
            .flat_map(|i| std::iter::repeat(i).take(n))
            .collect::<Vec<_>>();
        Self {
            data: self.data.select(Axis(0), &indices),
        }
    }

    /// 将首个维度整体平铺`n`次：[a, b] -> [a, b, a, b]
    pub fn tile_rows(&self, n: usize) -> Self {
        let len = self.first_len();
        let indices = (0..n).flat_map(|_| 0..len).collect::<Vec<_>>();
        Self {
            data: self.data.select(Axis(0), &indices),
        }
    }

    fn first_len(&self) -> usize {
        self.shape().first().copied().unwrap_or(1)
    }
}
