use crate::errors::SpaceError;
use crate::spaces::Points;
use crate::tensor::Tensor;
use std::fmt;
use std::ops::Index;
use std::rc::Rc;

/// 按变量名取列的函数参数。每个变量对应形状为`[n, dim]`的张量
#[derive(Debug, Clone, Default)]
pub struct FunctionArgs {
    columns: Vec<(String, Tensor)>,
}

impl FunctionArgs {
    /// 将点集按变量拆分为若干列
    pub fn from_points(points: &Points) -> Result<Self, SpaceError> {
        let mut args = FunctionArgs::default();
        args.extend(points)?;
        Ok(args)
    }

    /// 追加另一个点集的各个变量（同名变量以后者为准）
    pub fn extend(&mut self, points: &Points) -> Result<(), SpaceError> {
        for name in points.space().keys() {
            let column = points.variable(name)?;
            match self.columns.iter_mut().find(|(n, _)| n == name) {
                Some((_, old)) => *old = column,
                None => self.columns.push((name.to_string(), column)),
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Tensor> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, column)| column)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }
}

/// # Panics
/// 变量`name`不存在时（与`HashMap`的下标访问一致）
impl Index<&str> for FunctionArgs {
    type Output = Tensor;

    fn index(&self, name: &str) -> &Tensor {
        self.get(name)
            .unwrap_or_else(|| panic!("{}", SpaceError::UnknownVariable(name.to_string())))
    }
}

/// 用户定义的函数，如`u(x) = sin(x)`：
/// ```ignore
/// let f = UserFunction::with_args(|args| args["x"].sin(), &["x"]);
/// ```
/// 返回值的首维须为点数，形状通常为`[n, out_dim]`或`[n]`。
#[derive(Clone)]
pub struct UserFunction {
    fun: Rc<dyn Fn(&FunctionArgs) -> Tensor>,
    args: Option<Vec<String>>,
}

impl UserFunction {
    pub fn new(fun: impl Fn(&FunctionArgs) -> Tensor + 'static) -> Self {
        Self {
            fun: Rc::new(fun),
            args: None,
        }
    }

    /// 声明函数所需的变量名，求值前会检查它们是否都存在
    pub fn with_args(fun: impl Fn(&FunctionArgs) -> Tensor + 'static, args: &[&str]) -> Self {
        Self {
            fun: Rc::new(fun),
            args: Some(args.iter().map(|a| a.to_string()).collect()),
        }
    }

    pub fn args(&self) -> Option<&[String]> {
        self.args.as_deref()
    }

    /// 在点集上求值
    pub fn evaluate(&self, points: &Points) -> Result<Tensor, SpaceError> {
        self.call(&FunctionArgs::from_points(points)?)
    }

    /// 以已拆分好的参数求值
    pub fn call(&self, args: &FunctionArgs) -> Result<Tensor, SpaceError> {
        if let Some(required) = &self.args {
            if let Some(missing) = required.iter().find(|name| !args.contains(name)) {
                return Err(SpaceError::UnknownVariable(missing.clone()));
            }
        }
        Ok((self.fun)(args))
    }
}

impl fmt::Debug for UserFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserFunction")
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}
