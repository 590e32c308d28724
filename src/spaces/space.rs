/*
 * @Author       : 老董
 * @Date         : 2025-02-11
 * @Description  : 变量空间（Space）：记录微分方程中出现的各个变量及其维度。
 *
 * Space 同时具有两种性质：
 * - 多重集（计数器）：乘积时同名变量的维度相加，包含关系按“子多重集”判断，相等与哈希与顺序无关；
 * - 有序映射：遍历、打印、序列化时保持变量的插入顺序，下游张量的列布局依赖于此顺序。
 */

use crate::errors::SpaceError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Mul, Range};

/// 变量空间，如`Space::r1("t")`是名为`t`的一维实数空间，
/// `Space::r1("x") * Space::r1("y")`是含`x`、`y`两个变量的二维空间。
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<(String, usize)>", into = "Vec<(String, usize)>")]
pub struct Space {
    variables: Vec<(String, usize)>,
}

impl Space {
    /// 由若干（变量名，维度）对创建空间。同名变量的维度会被累加（计数器语义），
    /// 维度为0时返回`ZeroDimension`。
    pub fn new<I, S>(variables: I) -> Result<Self, SpaceError>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let mut space = Space::default();
        for (name, dim) in variables {
            let name = name.into();
            if dim == 0 {
                return Err(SpaceError::ZeroDimension(name));
            }
            space.add(name, dim);
        }
        Ok(space)
    }

    /// 一维实数空间
    pub fn r1(name: &str) -> Self {
        Self::single(name, 1)
    }

    /// 二维实数空间
    pub fn r2(name: &str) -> Self {
        Self::single(name, 2)
    }

    /// 三维实数空间
    pub fn r3(name: &str) -> Self {
        Self::single(name, 3)
    }

    /// n维实数空间
    pub fn rn(name: &str, n: usize) -> Result<Self, SpaceError> {
        Self::new([(name, n)])
    }

    fn single(name: &str, dim: usize) -> Self {
        Space {
            variables: vec![(name.to_string(), dim)],
        }
    }

    fn add(&mut self, name: String, dim: usize) {
        match self.variables.iter_mut().find(|(n, _)| *n == name) {
            Some((_, d)) => *d += dim,
            None => self.variables.push((name, dim)),
        }
    }

    /// 乘积空间：两个空间的多重集并。同名变量的维度相加，其余变量按先后顺序拼接。
    pub fn product(&self, other: &Space) -> Space {
        let mut space = self.clone();
        for (name, dim) in &other.variables {
            space.add(name.clone(), *dim);
        }
        space
    }

    /// 多重集交：每个共有变量取两者中较小的维度，顺序同`self`
    pub fn intersect(&self, other: &Space) -> Space {
        let variables = self
            .variables
            .iter()
            .filter_map(|(name, dim)| {
                other
                    .get(name)
                    .map(|other_dim| (name.clone(), (*dim).min(other_dim)))
            })
            .collect();
        Space { variables }
    }

    /// `self`是否为`other`的子多重集：`self`中的每个变量都在`other`中，且维度不超过`other`中的维度
    pub fn is_sub_multiset(&self, other: &Space) -> bool {
        self.variables
            .iter()
            .all(|(name, dim)| other.get(name).is_some_and(|d| d >= *dim))
    }

    /// 判断变量名（`&str`/`String`）或另一个空间是否包含于本空间。
    ///
    /// # 示例
    /// ```ignore
    /// let space = Space::r1("x") * Space::r2("y");
    /// assert!(space.contains("x"));
    /// assert!(space.contains(&Space::r2("y")));
    /// assert!(!space.contains(&Space::r3("y")));
    /// ```
    pub fn contains<Q: SpaceQuery + ?Sized>(&self, query: &Q) -> bool {
        query.is_contained_in(self)
    }

    /// 按变量名列表构造子空间（顺序同列表）。列表中出现未知变量时返回`UnknownVariable`
    pub fn select(&self, names: &[&str]) -> Result<Space, SpaceError> {
        let mut space = Space::default();
        for name in names {
            let dim = self
                .get(name)
                .ok_or_else(|| SpaceError::UnknownVariable(name.to_string()))?;
            // 重复列出的变量只取一次
            if space.get(name).is_none() {
                space.variables.push((name.to_string(), dim));
            }
        }
        Ok(space)
    }

    /// 按变量的插入顺序切片构造子空间，等价于对变量名序列取`[start:stop:step]`。
    /// `start`、`stop`为变量名（`stop`不含），`None`表示从头/到尾。
    pub fn slice(
        &self,
        start: Option<&str>,
        stop: Option<&str>,
        step: usize,
    ) -> Result<Space, SpaceError> {
        if step == 0 {
            return Err(SpaceError::ZeroStep);
        }
        let start = match start {
            Some(name) => self.index_of(name)?,
            None => 0,
        };
        let stop = match stop {
            Some(name) => self.index_of(name)?,
            None => self.variables.len(),
        };
        let variables = self
            .variables
            .iter()
            .enumerate()
            .skip(start)
            .take(stop.saturating_sub(start))
            .filter(|(i, _)| (i - start) % step == 0)
            .map(|(_, pair)| pair.clone())
            .collect();
        Ok(Space { variables })
    }

    fn index_of(&self, name: &str) -> Result<usize, SpaceError> {
        self.variables
            .iter()
            .position(|(n, _)| n == name)
            .ok_or_else(|| SpaceError::UnknownVariable(name.to_string()))
    }

    /// 变量`name`的维度
    pub fn get(&self, name: &str) -> Option<usize> {
        self.variables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, dim)| *dim)
    }

    /// 变量`name`在点集最后一维（各变量按顺序拼接）上所占的列范围
    pub fn columns_of(&self, name: &str) -> Option<Range<usize>> {
        let mut offset = 0;
        for (n, dim) in &self.variables {
            if n == name {
                return Some(offset..offset + dim);
            }
            offset += dim;
        }
        None
    }

    /// 空间的维度（各变量维度之和）
    pub fn dim(&self) -> usize {
        self.variables.iter().map(|(_, dim)| dim).sum()
    }

    /// 无序（!）的变量名集合
    pub fn variables(&self) -> HashSet<&str> {
        self.variables.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// 按插入顺序遍历变量名
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(|(n, _)| n.as_str())
    }

    /// 按插入顺序遍历（变量名，维度）
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.variables.iter().map(|(n, d)| (n.as_str(), *d))
    }

    /// 变量个数
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓乘积空间↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
impl Mul for Space {
    type Output = Space;

    fn mul(self, other: Space) -> Space {
        self.product(&other)
    }
}

impl<'a> Mul<&'a Space> for Space {
    type Output = Space;

    fn mul(self, other: &'a Space) -> Space {
        self.product(other)
    }
}

impl<'b> Mul<&'b Space> for &Space {
    type Output = Space;

    fn mul(self, other: &'b Space) -> Space {
        self.product(other)
    }
}
/*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑乘积空间↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

/// 可用于`Space::contains`的查询：变量名或另一个空间
pub trait SpaceQuery {
    fn is_contained_in(&self, space: &Space) -> bool;
}

impl SpaceQuery for str {
    fn is_contained_in(&self, space: &Space) -> bool {
        space.get(self).is_some()
    }
}

impl SpaceQuery for String {
    fn is_contained_in(&self, space: &Space) -> bool {
        self.as_str().is_contained_in(space)
    }
}

impl SpaceQuery for Space {
    fn is_contained_in(&self, space: &Space) -> bool {
        space.intersect(self) == *self
    }
}

// 相等与哈希均按多重集（与插入顺序无关）
impl PartialEq for Space {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(name, dim)| other.get(name) == Some(dim))
    }
}

impl Eq for Space {}

impl Hash for Space {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut sorted = self.variables.iter().collect::<Vec<_>>();
        sorted.sort();
        sorted.hash(state);
    }
}

impl TryFrom<Vec<(String, usize)>> for Space {
    type Error = SpaceError;

    fn try_from(variables: Vec<(String, usize)>) -> Result<Self, Self::Error> {
        Space::new(variables)
    }
}

impl From<Space> for Vec<(String, usize)> {
    fn from(space: Space) -> Self {
        space.variables
    }
}

// 打印时保持插入顺序
impl fmt::Debug for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Space({{")?;
        for (i, (name, dim)) in self.variables.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{name}': {dim}")?;
        }
        write!(f, "}})")
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
