use super::Space;
use crate::errors::{ModelError, SpaceError};
use crate::tensor::Tensor;
use std::fmt;

/// 带变量空间标签的点集。张量最后一维的各列按`space`中变量的顺序排布，
/// 如空间为`{x: 1, y: 2}`时，第0列为`x`，第1、2列为`y`。
#[derive(Debug, Clone, PartialEq)]
pub struct Points {
    data: Tensor,
    space: Space,
}

impl Points {
    /// 张量的阶数须不小于2，且最后一维长度须等于`space.dim()`
    pub fn new(data: Tensor, space: Space) -> Result<Self, SpaceError> {
        let got = data.shape().last().copied().unwrap_or(0);
        if data.dimension() < 2 || got != space.dim() {
            return Err(SpaceError::DimensionMismatch {
                expected: space.dim(),
                got,
            });
        }
        Ok(Self { data, space })
    }

    /// 由调用方保证形状与空间一致（如定义域、模型内部构造的点集）
    pub(crate) fn from_parts(data: Tensor, space: Space) -> Self {
        debug_assert_eq!(data.shape().last().copied(), Some(space.dim()));
        Self { data, space }
    }

    pub fn as_tensor(&self) -> &Tensor {
        &self.data
    }

    pub fn into_tensor(self) -> Tensor {
        self.data
    }

    pub fn space(&self) -> &Space {
        &self.space
    }

    /// 点的个数（首个维度的长度）
    pub fn len(&self) -> usize {
        self.data.shape()[0]
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 单个变量`name`对应的列
    pub fn variable(&self, name: &str) -> Result<Tensor, SpaceError> {
        let columns = self
            .space
            .columns_of(name)
            .ok_or_else(|| SpaceError::UnknownVariable(name.to_string()))?;
        self.data
            .narrow_last(columns)
            .map_err(|_| SpaceError::UnknownVariable(name.to_string()))
    }

    /// 按`space`中变量的顺序抽取对应的列，得到新的点集。
    /// `space`中的变量须都在本点集中，且维度相同。
    pub fn extract(&self, space: &Space) -> Result<Points, SpaceError> {
        // 变量相同但顺序不同时仍需重排列
        if *space == self.space && space.keys().eq(self.space.keys()) {
            return Ok(self.clone());
        }
        let mut columns = Vec::with_capacity(space.len());
        for (name, dim) in space.iter() {
            match self.space.get(name) {
                Some(own_dim) if own_dim == dim => columns.push(self.variable(name)?),
                Some(_) => {
                    return Err(SpaceError::SpaceMismatch {
                        expected: space.to_string(),
                        got: self.space.to_string(),
                    });
                }
                None => return Err(SpaceError::UnknownVariable(name.to_string())),
            }
        }
        let columns = columns.iter().collect::<Vec<_>>();
        let data = Tensor::concat_last(&columns).map_err(|_| SpaceError::DimensionMismatch {
            expected: space.dim(),
            got: self.space.dim(),
        })?;
        Ok(Points {
            data,
            space: space.clone(),
        })
    }

    /// 沿最后一维拼接两个点集（列拼接），二者的变量不得重名，点数须一致
    pub fn join(&self, other: &Points) -> Result<Points, ModelError> {
        let shared = self.space.intersect(&other.space);
        if !shared.is_empty() {
            return Err(SpaceError::SpaceMismatch {
                expected: format!("与{}无重名变量的空间", self.space),
                got: other.space.to_string(),
            }
            .into());
        }
        let data = Tensor::concat_last(&[&self.data, &other.data])?;
        Ok(Points {
            data,
            space: &self.space * &other.space,
        })
    }

    /// 每个点连续重复`n`次：[a, b] -> [a, a, b, b]
    pub fn repeat_rows(&self, n: usize) -> Points {
        Points {
            data: self.data.repeat_rows(n),
            space: self.space.clone(),
        }
    }

    /// 整个点集平铺`n`次：[a, b] -> [a, b, a, b]
    pub fn tile_rows(&self, n: usize) -> Points {
        Points {
            data: self.data.tile_rows(n),
            space: self.space.clone(),
        }
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Points over {}", self.space)?;
        write!(f, "{}", self.data)
    }
}
