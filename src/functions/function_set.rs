use super::{FunctionArgs, UserFunction};
use crate::errors::ModelError;
use crate::samplers::{PointSampler, Sampler};
use crate::spaces::{FunctionSpace, Points};

/// 由参数族描述的一组函数。每次`sample_params`抽取一批（`function_set_size`个）参数，
/// 随后`create_function_batch`给出这批函数在给定点上的取值。
pub trait FunctionSet {
    fn function_space(&self) -> &FunctionSpace;
    /// 每批函数的个数
    fn function_set_size(&self) -> usize;
    /// 重新抽取一批参数
    fn sample_params(&mut self);
    /// 最近一次`sample_params_for_iteration`所在的迭代
    fn current_iteration(&self) -> Option<usize>;
    fn set_current_iteration(&mut self, iteration: usize);

    /// 训练时按迭代抽取参数：同一迭代内只在第一次调用时重新抽取。
    /// 返回本次是否重新抽取了参数
    fn sample_params_for_iteration(&mut self, iteration: usize) -> bool {
        if self.current_iteration() == Some(iteration) {
            return false;
        }
        self.sample_params();
        self.set_current_iteration(iteration);
        true
    }
    /// 当前这批函数在`points`（`M`个点）上的取值，形状为`[N, M, out_dim]`，
    /// 其中`N`为`function_set_size()`，`out_dim`为输出空间的维度
    fn create_function_batch(&self, points: &Points) -> Result<Points, ModelError>;
}

/// 以参数采样器与闭包定义的函数集，如`f(x; k) = k * x`：
/// 参数`k`由`parameter_sampler`采样，闭包通过变量名同时取到参数与自变量。
#[derive(Debug, Clone)]
pub struct CustomFunctionSet {
    function_space: FunctionSpace,
    parameter_sampler: Sampler,
    fun: UserFunction,
    current_params: Option<Points>,
    current_iteration: Option<usize>,
}

impl CustomFunctionSet {
    pub fn new(
        function_space: FunctionSpace,
        parameter_sampler: impl Into<Sampler>,
        fun: UserFunction,
    ) -> Self {
        Self {
            function_space,
            parameter_sampler: parameter_sampler.into(),
            fun,
            current_params: None,
            current_iteration: None,
        }
    }

    /// 当前这批参数，形状为`[N, param_dim]`
    pub fn current_params(&self) -> Option<&Points> {
        self.current_params.as_ref()
    }
}

impl FunctionSet for CustomFunctionSet {
    fn function_space(&self) -> &FunctionSpace {
        &self.function_space
    }

    fn function_set_size(&self) -> usize {
        self.parameter_sampler.len()
    }

    fn sample_params(&mut self) {
        self.current_params = Some(self.parameter_sampler.sample_points());
    }

    fn current_iteration(&self) -> Option<usize> {
        self.current_iteration
    }

    fn set_current_iteration(&mut self, iteration: usize) {
        self.current_iteration = Some(iteration);
    }

    fn create_function_batch(&self, points: &Points) -> Result<Points, ModelError> {
        let params = self
            .current_params
            .as_ref()
            .ok_or(ModelError::ParamsNotSampled)?;
        let points = points.extract(self.function_space.input_space())?;
        let (n, m) = (params.len(), points.len());

        // 第i个函数在第j个点上的取值位于第i*m+j行
        let mut args = FunctionArgs::from_points(&params.repeat_rows(m))?;
        args.extend(&points.tile_rows(n))?;
        let values = self.fun.call(&args)?;

        let output_space = self.function_space.output_space();
        let values = values.reshape(&[n, m, output_space.dim()])?;
        Ok(Points::new(values, output_space.clone())?)
    }
}
