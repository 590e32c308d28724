/*
 * @Author       : 老董
 * @Date         : 2023-08-17 17:24:24
 * @Description  : 全库的错误类型：张量（TensorError）、变量空间（SpaceError）以及模型（ModelError）
 */

use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    // 数字比较用
    #[error("{value_name}须{operator}{threshold}")]
    ValueMustSatisfyComparison {
        value_name: String,
        operator: ComparisonOperator,
        threshold: usize,
    },
    // 张量二元运算
    #[error(
        "形状不一致，故无法{operator}：第一个张量的形状为{tensor1_shape:?}，第二个张量的形状为{tensor2_shape:?}"
    )]
    OperatorError {
        operator: Operator,
        tensor1_shape: Vec<usize>,
        tensor2_shape: Vec<usize>,
    },
    #[error("无法将形状为{from:?}的张量（共{size}个元素）变形为{to:?}")]
    ReshapeError {
        from: Vec<usize>,
        size: usize,
        to: Vec<usize>,
    },
    #[error("共{size}个元素的张量无法变形为每行{cols}个元素的矩阵")]
    RowsReshapeError { size: usize, cols: usize },
    #[error("维度{axis}超出范围：张量的阶数为{rank}")]
    AxisOutOfRange { axis: usize, rank: usize },

    #[error("张量列表为空")]
    EmptyList,
    #[error("张量形状不一致")]
    InconsitentShape,

    // 保存、加载
    #[error("张量序列化失败：{0}")]
    Serialization(String),
}

/// 变量空间（Space）相关的错误
#[derive(Error, Debug, PartialEq, Clone)]
pub enum SpaceError {
    #[error("变量`{0}`不在空间中")]
    UnknownVariable(String),
    #[error("变量`{0}`的维度须为正整数")]
    ZeroDimension(String),
    #[error("空间不一致：期望{expected}，实际为{got}")]
    SpaceMismatch { expected: String, got: String },
    #[error("点集的最后一维长度须等于空间维度{expected}，实际为{got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("切片步长须大于0")]
    ZeroStep,
    #[error("区间的下界须小于上界：lower={lower}，upper={upper}")]
    InvalidBounds { lower: f32, upper: f32 },
}

/// 模型构建、离散化与前向传播相关的错误
#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error(transparent)]
    Tensor(#[from] TensorError),
    #[error(transparent)]
    Space(#[from] SpaceError),

    /// 抽象基类（未具体化的TrunkNet/BranchNet等）上调用了需子类实现的方法
    #[error("`{0}`未实现：请使用其具体实现（如全连接版本）")]
    NotImplemented(&'static str),
    /// `fix_input`收到的既不是函数也不是函数集
    #[error("输入须为函数（UserFunction）、函数集（FunctionSet）或已离散化的张量，实际为`{0}`")]
    UnsupportedInput(&'static str),
    /// DeepONet在branch尚未固定任何函数时就被求值
    #[error("branch网络尚未固定输入函数，请先调用`fix_branch_input`或在求值时传入函数")]
    BranchNotFixed,
    #[error("trunk与branch的输出神经元数不一致：trunk为{trunk}，branch为{branch}")]
    NeuronsMismatch { trunk: usize, branch: usize },
    #[error("输出空间不能为空（维度为0）")]
    EmptyOutputSpace,
    #[error("输出神经元数{neurons}须能被输出空间维度{dim}整除")]
    NeuronsNotDivisible { neurons: usize, dim: usize },
    /// 函数集在调用`sample_params`之前就被求值
    #[error("函数集尚未采样参数，请先调用`sample_params`")]
    ParamsNotSampled,
    #[error("配置错误：{0}")]
    InvalidConfig(String),
}
