use crate::tensor::Tensor;
use ndarray::{ArrayViewD, Axis};
use std::fmt;

impl Tensor {
    pub fn print(&self) {
        println!("{self}");
    }
}

fn display_recursive(
    f: &mut fmt::Formatter,
    data: &ArrayViewD<f32>,
    indices: &mut Vec<usize>,
    depth: usize,
    rank: usize,
) -> fmt::Result {
    if depth == rank {
        write!(f, "{:8.4}", data[&indices[..]])?;
    } else {
        write!(f, "[")?;
        for i in 0..data.shape()[depth] {
            indices[depth] = i;
            display_recursive(f, data, indices, depth + 1, rank)?;

            if i != data.shape()[depth] - 1 {
                write!(f, ", ")?;
                if depth == 0 {
                    write!(f, "\n ")?;
                }
            }
        }
        write!(f, "]")?;
    }
    Ok(())
}

fn display_matrix(f: &mut fmt::Formatter, data: &ArrayViewD<f32>) -> fmt::Result {
    let rank = data.ndim();
    display_recursive(f, data, &mut vec![0; rank], 0, rank)
}

/// 阶数不大于2的张量直接按矩阵展示；
/// 更高阶的张量按前`rank - 2`个维度分块，每块是一个矩阵，
/// 如DeepONet形状为`[函数个数, 点数, 输出维度]`的输出，每个函数一块
impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let shape = self.shape();
        let rank = shape.len();
        if rank <= 2 {
            display_matrix(f, &self.data.view())?;
            return writeln!(f, "\n形状: {shape:?}");
        }

        let leading = &shape[..rank - 2];
        let blocks = leading.iter().product::<usize>();
        for block in 0..blocks {
            // 将块序号按各维长度展开，最后一维变化最快
            let mut rest = block;
            let mut index = vec![0; leading.len()];
            for axis in (0..leading.len()).rev() {
                index[axis] = rest % leading[axis];
                rest /= leading[axis];
            }
            let mut view = self.data.view();
            for &i in &index {
                view = view.index_axis_move(Axis(0), i);
            }
            let header = index
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "[{header}, :, :] =")?;
            display_matrix(f, &view)?;
            writeln!(f)?;
        }
        writeln!(f, "形状: {shape:?}")
    }
}
