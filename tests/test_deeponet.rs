/*
 * @Author       : 老董
 * @Date         : 2025-02-17
 * @Description  : DeepONet端到端测试：学习算子 G(f)(t) 的前向流程
 *                 函数集 f(t; k) = k * t  -->  branch(离散化15点) ⊗ trunk(查询点)  -->  输出空间u
 * @LastEditors  : 老董
 * @LastEditTime : 2025-02-17
 */
use only_physics::domains::Interval;
use only_physics::errors::ModelError;
use only_physics::functions::{CustomFunctionSet, UserFunction};
use only_physics::nn::layer::Activation;
use only_physics::nn::model_io::{load_parameters, save_parameters};
use only_physics::nn::{
    BranchNet, DeepONet, FCBranchNet, FCTrunkNet, FcConfig, NormalizationLayer, Sequential,
};
use only_physics::samplers::{GridSampler, PointSampler, RandomUniformSampler};
use only_physics::spaces::{FunctionSpace, Space};
use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

/// f(t; k) = k * t，参数k在[0, 2]上均匀随机取8个
fn function_set(fn_space: &FunctionSpace) -> Result<CustomFunctionSet, ModelError> {
    let params = Interval::new(Space::r1("k"), 0., 2.)?;
    Ok(CustomFunctionSet::new(
        fn_space.clone(),
        RandomUniformSampler::with_seed(params, 8, 7),
        UserFunction::with_args(|args| &args["k"] * &args["t"], &["k", "t"]),
    ))
}

#[test]
fn test_deeponet_end_to_end() -> Result<(), ModelError> {
    let t = Space::r1("t");
    let u = Space::r1("u");
    let domain = Interval::new(t.clone(), 0., 1.)?;
    let fn_space = FunctionSpace::new(domain.clone(), Space::r1("f"));

    // ========== 网络结构 ==========
    let config = FcConfig::from_json(
        r#"{"hidden": [32, 32], "activations": "Tanh", "xavier_gains": 1.0, "seed": 42}"#,
    )?;
    let trunk = FCTrunkNet::new(t.clone(), u.clone(), 40, &config)?;
    let trunk = Sequential::new(vec![Box::new(NormalizationLayer::new(&domain))], trunk)?;
    let sampler = GridSampler::new(domain.clone(), 15).make_static();
    let branch = FCBranchNet::new(
        fn_space.clone(),
        u.clone(),
        40,
        sampler,
        &config.clone().with_activations(Activation::Sin),
    )?;
    let branch = Rc::new(RefCell::new(branch));
    let net = DeepONet::new(Rc::new(trunk), branch.clone())?;
    assert_eq!(*net.input_space(), t);
    assert_eq!(*net.output_space(), u);

    // ========== 训练流程中的branch求值 ==========
    let mut fn_set = function_set(&fn_space)?;
    let query = GridSampler::new(domain.clone(), 25).sample_points();
    for iteration in 0..3 {
        net.forward_branch(&mut fn_set, iteration)?;
        let first = net.forward(&query, None)?;
        // 同一迭代内再次求值，结果不变
        net.forward_branch(&mut fn_set, iteration)?;
        let second = net.forward(&query, None)?;
        assert_eq!(first, second);
        assert_eq!(first.as_tensor().shape(), &[8, 25, 1]);
        assert!(first.space().contains("u"));
    }

    // ========== 对单个函数求值 ==========
    let f = UserFunction::new(|args| args["t"].sin());
    let out = net.forward(&query, Some(f.into()))?;
    assert_eq!(out.as_tensor().shape(), &[1, 25, 1]);
    assert_eq!(branch.borrow().current_out().shape(), &[1, 40]);

    // 查询点带有额外变量时，只使用t
    let extra = GridSampler::new(
        domain.clone() * Interval::new(Space::r1("x"), -1., 1.)?,
        25,
    )
    .sample_points();
    assert_eq!(net.forward(&extra, None)?.as_tensor().shape(), &[1, 25, 1]);

    Ok(())
}

#[test]
fn test_deeponet_parameters_round_trip() -> Result<(), ModelError> {
    let t = Space::r1("t");
    let domain = Interval::new(t.clone(), 0., 1.)?;
    let fn_space = FunctionSpace::new(domain.clone(), Space::r1("f"));
    let sampler = GridSampler::new(domain.clone(), 10);

    let build = |seed: u64| -> Result<_, ModelError> {
        let config = FcConfig::default().with_seed(seed);
        let trunk = FCTrunkNet::new(t.clone(), Space::r1("u"), 20, &config)?;
        let branch = FCBranchNet::new(
            fn_space.clone(),
            Space::r1("u"),
            20,
            sampler.clone(),
            &config,
        )?;
        DeepONet::from_nets(trunk, branch)
    };
    let saved = build(1)?;
    let loaded = build(2)?;

    let mut buffer = Vec::new();
    save_parameters(saved.trunk().as_ref(), &mut buffer)?;
    let mut trunk = loaded.trunk().as_ref().clone();
    load_parameters(&mut trunk, &mut Cursor::new(&buffer))?;
    assert_eq!(&trunk, saved.trunk().as_ref());

    let mut buffer = Vec::new();
    save_parameters(&*saved.branch().borrow(), &mut buffer)?;
    load_parameters(&mut *loaded.branch().borrow_mut(), &mut Cursor::new(&buffer))?;
    assert_eq!(*loaded.branch().borrow(), *saved.branch().borrow());
    Ok(())
}
