mod model;
mod model_io;

use crate::domains::Interval;
use crate::functions::{CustomFunctionSet, UserFunction};
use crate::samplers::{GridSampler, Sampler};
use crate::spaces::{FunctionSpace, Space};

/// f(t; k) = k * t：定义域t∈[0, 1]，参数k在[0, 1]上取20个网格点
fn helper_fn_set() -> (FunctionSpace, CustomFunctionSet) {
    let inter = Interval::new(Space::r1("t"), 0., 1.).unwrap();
    let params = Interval::new(Space::r1("k"), 0., 1.).unwrap();
    let fn_space = FunctionSpace::new(inter, Space::r1("e"));
    let fn_set = CustomFunctionSet::new(
        fn_space.clone(),
        GridSampler::new(params, 20),
        UserFunction::new(|args| &args["k"] * &args["t"]),
    );
    (fn_space, fn_set)
}

fn static_grid(fn_space: &FunctionSpace, n: usize) -> Sampler {
    GridSampler::new(fn_space.input_domain().clone(), n).make_static()
}
