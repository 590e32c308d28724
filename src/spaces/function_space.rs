use super::Space;
use crate::domains::{Domain, DomainKind};

/// 函数空间：从定义域`input_domain`（其变量空间即函数的输入空间）
/// 映射到`output_space`的函数全体。BranchNet以它作为自身的输入空间。
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSpace {
    input_domain: DomainKind,
    output_space: Space,
}

impl FunctionSpace {
    pub fn new(input_domain: impl Into<DomainKind>, output_space: Space) -> Self {
        Self {
            input_domain: input_domain.into(),
            output_space,
        }
    }

    pub fn input_domain(&self) -> &DomainKind {
        &self.input_domain
    }

    /// 函数的输入空间（即定义域所在的空间）
    pub fn input_space(&self) -> &Space {
        self.input_domain.space()
    }

    pub fn output_space(&self) -> &Space {
        &self.output_space
    }
}
