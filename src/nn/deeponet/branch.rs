use crate::errors::{ModelError, SpaceError};
use crate::functions::{FunctionSet, UserFunction};
use crate::nn::Module;
use crate::nn::config::FcConfig;
use crate::nn::fcn::layers_from_config;
use crate::nn::layer::{Layer, forward_layers, layers_parameters, layers_parameters_mut};
use crate::samplers::{PointSampler, Sampler};
use crate::spaces::{FunctionSpace, Space};
use crate::tensor::Tensor;
use log::debug;
use std::collections::HashMap;

/*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓branch的输入↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
/// `BranchNet::fix_input`可接受的输入
pub enum BranchInput<'a> {
    /// 函数集：先重新采样参数，再在离散点上求值，得到`[N, input_dim]`
    FunctionSet(&'a mut dyn FunctionSet),
    /// 单个函数：在离散点上求值，得到`[1, input_dim]`
    Function(UserFunction),
    /// 已离散化的函数批次，最后一维须为`input_dim`
    Discrete(Tensor),
    /// 其他类型，`fix_input`会返回`UnsupportedInput`
    Unsupported(&'static str),
}

impl<'a, S: FunctionSet + 'a> From<&'a mut S> for BranchInput<'a> {
    fn from(function_set: &'a mut S) -> Self {
        BranchInput::FunctionSet(function_set)
    }
}

impl From<UserFunction> for BranchInput<'_> {
    fn from(function: UserFunction) -> Self {
        BranchInput::Function(function)
    }
}

impl From<Tensor> for BranchInput<'_> {
    fn from(discrete: Tensor) -> Self {
        BranchInput::Discrete(discrete)
    }
}

macro_rules! impl_unsupported_branch_input {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BranchInput<'_> {
                fn from(_: $t) -> Self {
                    BranchInput::Unsupported(std::any::type_name::<$t>())
                }
            }
        )*
    };
}

impl_unsupported_branch_input!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, String
);

impl<'b> From<&'b str> for BranchInput<'_> {
    fn from(_: &'b str) -> Self {
        BranchInput::Unsupported("&str")
    }
}
/*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑branch的输入↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

/// 各种BranchNet共有的状态。`current_out`保存最近一次求值的结果，
/// 每次`forward`（直接调用或经由`fix_input`）都会覆盖它，DeepONet从这里读取branch的输出。
#[derive(Debug, Clone, PartialEq)]
pub struct BranchNetBase {
    function_space: FunctionSpace,
    output_space: Space,
    output_neurons: usize,
    discretization_sampler: Sampler,
    current_out: Tensor,
    /// （迭代序号，该迭代内各函数集离散化得到的函数批次）
    iteration_cache: Option<(usize, HashMap<usize, Tensor>)>,
}

impl BranchNetBase {
    /// `discretization_sampler`的点数即为网络的输入维度，
    /// 因此它每次采样的点数须保持不变
    pub fn new(
        function_space: FunctionSpace,
        output_space: Space,
        output_neurons: usize,
        discretization_sampler: impl Into<Sampler>,
    ) -> Self {
        Self {
            function_space,
            output_space,
            output_neurons,
            discretization_sampler: discretization_sampler.into(),
            current_out: Tensor::empty(),
            iteration_cache: None,
        }
    }

    pub fn set_current_out(&mut self, out: Tensor) {
        self.current_out = out;
    }

    /// 函数集`set_key`（见`function_set_key`）在第`iteration`次迭代已离散化的函数批次（若有）
    pub fn cached_batch(&self, iteration: usize, set_key: usize) -> Option<&Tensor> {
        match &self.iteration_cache {
            Some((cached, batches)) if *cached == iteration => batches.get(&set_key),
            _ => None,
        }
    }

    /// 记录函数集`set_key`在第`iteration`次迭代的函数批次。
    /// 进入新的迭代时，之前迭代的记录全部作废
    pub fn cache_batch(&mut self, iteration: usize, set_key: usize, batch: Tensor) {
        if self.iteration_cache.as_ref().map(|(cached, _)| *cached) != Some(iteration) {
            self.iteration_cache = Some((iteration, HashMap::new()));
        }
        if let Some((_, batches)) = &mut self.iteration_cache {
            batches.insert(set_key, batch);
        }
    }
}

/// 区分同一迭代内的不同函数集（按其地址）
pub fn function_set_key(function_set: &dyn FunctionSet) -> usize {
    std::ptr::from_ref(function_set).cast::<()>() as usize
}

/// DeepONet中的branch网络：把离散化的函数（每个函数`input_dim`个取值）
/// 映射为`output_neurons`个潜在特征，并保存在`current_out`中。
pub trait BranchNet {
    fn base(&self) -> &BranchNetBase;
    fn base_mut(&mut self) -> &mut BranchNetBase;

    /// 对形状为`[函数个数, input_dim]`的批次求值，结果写入`current_out`。
    /// 一般不直接调用，而是经由`fix_input`
    fn forward(&mut self, discrete_function_batch: &Tensor) -> Result<(), ModelError>;

    fn function_space(&self) -> &FunctionSpace {
        &self.base().function_space
    }

    /// 可输入的函数所在的函数空间
    fn input_space(&self) -> &FunctionSpace {
        self.function_space()
    }

    fn output_space(&self) -> &Space {
        &self.base().output_space
    }

    fn output_neurons(&self) -> usize {
        self.base().output_neurons
    }

    /// 输入维度，即离散化采样器的点数
    fn input_dim(&self) -> usize {
        self.base().discretization_sampler.len()
    }

    fn discretization_sampler(&self) -> &Sampler {
        &self.base().discretization_sampler
    }

    /// 最近一次求值的结果；尚未求值时为空张量
    fn current_out(&self) -> &Tensor {
        &self.base().current_out
    }

    /// 在采样点上求函数集当前这批函数的值，变形为`[-1, input_dim]`
    fn discretize_function_set(
        &mut self,
        function_set: &dyn FunctionSet,
    ) -> Result<Tensor, ModelError> {
        let points = self.base_mut().discretization_sampler.sample_points();
        let values = function_set.create_function_batch(&points)?;
        Ok(values.as_tensor().reshape_rows(self.input_dim())?)
    }

    /// 在采样点上求单个函数的值，变形为`[1, input_dim]`。
    /// 函数按点逐行返回（首维为`input_dim`）时先转置
    fn discretize_function(&mut self, function: &UserFunction) -> Result<Tensor, ModelError> {
        let points = self.base_mut().discretization_sampler.sample_points();
        let values = function.evaluate(&points)?;
        let input_dim = self.input_dim();
        let shape = values.shape().to_vec();
        let values = if shape.len() == 2 && shape[0] == input_dim && shape[1] != input_dim {
            values.transpose()
        } else {
            values
        };
        Ok(values.reshape_rows(input_dim)?)
    }

    /// 为给定的函数（或函数集）固定branch：求值并把结果保存在`current_out`中。
    /// 再次调用即可覆盖。
    fn fix_input<'a>(&mut self, function: impl Into<BranchInput<'a>>) -> Result<(), ModelError>
    where
        Self: Sized,
    {
        let discrete_fn = match function.into() {
            BranchInput::FunctionSet(function_set) => {
                function_set.sample_params();
                self.discretize_function_set(function_set)?
            }
            BranchInput::Function(function) => self.discretize_function(&function)?,
            BranchInput::Discrete(batch) => {
                let got = batch.shape().last().copied().unwrap_or(0);
                if batch.dimension() != 2 || got != self.input_dim() {
                    return Err(SpaceError::DimensionMismatch {
                        expected: self.input_dim(),
                        got,
                    }
                    .into());
                }
                batch
            }
            BranchInput::Unsupported(kind) => return Err(ModelError::UnsupportedInput(kind)),
        };
        debug!("固定branch输入：函数批次形状为{:?}", discrete_fn.shape());
        self.forward(&discrete_fn)
    }
}

impl BranchNet for BranchNetBase {
    fn base(&self) -> &BranchNetBase {
        self
    }

    fn base_mut(&mut self) -> &mut BranchNetBase {
        self
    }

    fn forward(&mut self, _discrete_function_batch: &Tensor) -> Result<(), ModelError> {
        Err(ModelError::NotImplemented("BranchNet::forward"))
    }
}

/// 全连接的branch网络：`input_dim` -> 隐藏层 -> `output_neurons`
#[derive(Debug, Clone, PartialEq)]
pub struct FCBranchNet {
    base: BranchNetBase,
    layers: Vec<Layer>,
}

impl FCBranchNet {
    pub fn new(
        function_space: FunctionSpace,
        output_space: Space,
        output_neurons: usize,
        discretization_sampler: impl Into<Sampler>,
        config: &FcConfig,
    ) -> Result<Self, ModelError> {
        let base = BranchNetBase::new(
            function_space,
            output_space,
            output_neurons,
            discretization_sampler,
        );
        let layers = layers_from_config(config, base.input_dim(), output_neurons)?;
        Ok(Self { base, layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl BranchNet for FCBranchNet {
    fn base(&self) -> &BranchNetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BranchNetBase {
        &mut self.base
    }

    fn forward(&mut self, discrete_function_batch: &Tensor) -> Result<(), ModelError> {
        let out = forward_layers(&self.layers, discrete_function_batch)?;
        self.base.set_current_out(out);
        Ok(())
    }
}

impl Module for FCBranchNet {
    fn parameters(&self) -> Vec<&Tensor> {
        layers_parameters(&self.layers)
    }

    fn parameters_mut(&mut self) -> Vec<&mut Tensor> {
        layers_parameters_mut(&mut self.layers)
    }
}
