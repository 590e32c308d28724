use super::{BranchInput, BranchNet, TrunkNet, function_set_key};
use crate::errors::{ModelError, SpaceError};
use crate::functions::FunctionSet;
use crate::spaces::{Points, Space};
use crate::tensor::Tensor;
use log::{debug, trace};
use std::cell::RefCell;
use std::rc::Rc;

/// DeepONet：由一个trunk网络与一个branch网络组成的算子网络。
///
/// 设trunk在`P`个查询点上给出`[P, n]`的特征，branch对`F`个函数给出`[F, n]`的特征，
/// 将`n`个神经元按顺序均分为`output_space.dim()`组，每组内做内积，
/// 得到形状为`[F, P, output_space.dim()]`的输出。
///
/// trunk与branch以共享引用的方式持有，构建DeepONet的代码仍可直接访问它们
/// （如查看`branch.borrow().current_out()`）。
pub struct DeepONet<T: TrunkNet, B: BranchNet> {
    trunk: Rc<T>,
    branch: Rc<RefCell<B>>,
}

impl<T: TrunkNet, B: BranchNet> DeepONet<T, B> {
    /// trunk与branch的输出空间须相同且非空，输出神经元数须相等，且能被输出空间的维度整除
    pub fn new(trunk: Rc<T>, branch: Rc<RefCell<B>>) -> Result<Self, ModelError> {
        {
            let branch = branch.borrow();
            if trunk.output_space() != branch.output_space() {
                return Err(SpaceError::SpaceMismatch {
                    expected: trunk.output_space().to_string(),
                    got: branch.output_space().to_string(),
                }
                .into());
            }
            if trunk.output_neurons() != branch.output_neurons() {
                return Err(ModelError::NeuronsMismatch {
                    trunk: trunk.output_neurons(),
                    branch: branch.output_neurons(),
                });
            }
            let dim = trunk.output_space().dim();
            if dim == 0 {
                return Err(ModelError::EmptyOutputSpace);
            }
            if trunk.output_neurons() % dim != 0 {
                return Err(ModelError::NeuronsNotDivisible {
                    neurons: trunk.output_neurons(),
                    dim,
                });
            }
            debug!(
                "构建DeepONet：{} -> {}，共{}个输出神经元，离散化点数{}",
                trunk.input_space(),
                trunk.output_space(),
                trunk.output_neurons(),
                branch.input_dim()
            );
        }
        Ok(Self { trunk, branch })
    }

    /// 不需要在外部共享trunk与branch时的便捷构建方式
    pub fn from_nets(trunk: T, branch: B) -> Result<Self, ModelError> {
        Self::new(Rc::new(trunk), Rc::new(RefCell::new(branch)))
    }

    pub fn trunk(&self) -> &Rc<T> {
        &self.trunk
    }

    pub fn branch(&self) -> &Rc<RefCell<B>> {
        &self.branch
    }

    /// 查询点所在的空间（即trunk的输入空间）
    pub fn input_space(&self) -> &Space {
        self.trunk.input_space()
    }

    pub fn output_space(&self) -> &Space {
        self.trunk.output_space()
    }

    /// 为给定函数（或函数集）固定branch，之后的`forward`可以不再传入函数
    pub fn fix_branch_input<'a>(
        &self,
        function: impl Into<BranchInput<'a>>,
    ) -> Result<(), ModelError> {
        self.branch.borrow_mut().fix_input(function)
    }

    /// 在`points`上求值。传入`function`时先以它固定branch，否则使用branch上次固定的结果；
    /// branch从未固定过时返回`BranchNotFixed`。
    pub fn forward(
        &self,
        points: &Points,
        function: Option<BranchInput<'_>>,
    ) -> Result<Points, ModelError> {
        if let Some(function) = function {
            self.fix_branch_input(function)?;
        }
        let trunk_out = self.trunk.forward(points)?;
        let branch = self.branch.borrow();
        let branch_out = branch.current_out();
        if branch_out.is_empty() {
            return Err(ModelError::BranchNotFixed);
        }

        let dim = self.output_space().dim();
        let group = self.trunk.output_neurons() / dim;
        let (n_functions, n_points) = (branch_out.shape()[0], trunk_out.shape()[0]);
        let mut outputs = Vec::with_capacity(dim);
        for d in 0..dim {
            let neurons = d * group..(d + 1) * group;
            let trunk_d = trunk_out.narrow_last(neurons.clone())?;
            let branch_d = branch_out.narrow_last(neurons)?;
            let out_d = branch_d.mat_mul(&trunk_d.transpose())?;
            outputs.push(out_d.reshape(&[n_functions, n_points, 1])?);
        }
        let outputs = outputs.iter().collect::<Vec<_>>();
        let out = Tensor::concat_last(&outputs)?;
        Ok(Points::new(out, self.output_space().clone())?)
    }

    /// 训练时使用：同一迭代内对同一函数集重复调用不会重新采样函数参数，
    /// 而是复用该函数集在本迭代已离散化的批次，重新计算branch的输出。
    /// 同一迭代内的不同函数集（如多个损失项）各自采样、各自缓存
    pub fn forward_branch(
        &self,
        function_set: &mut dyn FunctionSet,
        iteration_num: usize,
    ) -> Result<(), ModelError> {
        let resampled = function_set.sample_params_for_iteration(iteration_num);
        let set_key = function_set_key(&*function_set);
        let mut branch = self.branch.borrow_mut();
        let cached = if resampled {
            None
        } else {
            branch.base().cached_batch(iteration_num, set_key).cloned()
        };
        let batch = match cached {
            Some(batch) => {
                trace!("迭代{iteration_num}：复用已离散化的函数批次");
                batch
            }
            None => {
                trace!("迭代{iteration_num}：离散化新采样的函数批次");
                let batch = branch.discretize_function_set(&*function_set)?;
                branch
                    .base_mut()
                    .cache_batch(iteration_num, set_key, batch.clone());
                batch
            }
        };
        branch.forward(&batch)
    }
}
