/*
 * @Author       : 老董
 * @Date         : 2025-02-11
 * @Description  : 变量空间、带空间标签的点集以及函数空间
 */

mod function_space;
mod points;
mod space;

#[cfg(test)]
mod tests;

pub use function_space::FunctionSpace;
pub use points::Points;
pub use space::{Space, SpaceQuery};
