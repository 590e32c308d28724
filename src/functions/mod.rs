/*
 * @Author       : 老董
 * @Date         : 2025-02-13
 * @Description  : 用户函数（UserFunction）与带参数的函数集（FunctionSet）。
 *                 BranchNet通过它们得到“函数在离散点上的取值”。
 */

mod function_set;
mod user_fun;


pub use function_set::{CustomFunctionSet, FunctionSet};
pub use user_fun::{FunctionArgs, UserFunction};
