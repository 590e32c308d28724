/*
 * @Author       : 老董
 * @Date         : 2025-02-16
 * @Description  : 模型参数的保存与加载：按`Module::parameters()`的顺序整体写入/读出
 */

use super::Module;
use crate::errors::{ModelError, TensorError};
use crate::tensor::Tensor;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// 将模块的全部参数写入`writer`
pub fn save_parameters<M: Module + ?Sized, W: Write>(
    module: &M,
    writer: &mut W,
) -> Result<(), ModelError> {
    let parameters = module.parameters();
    bincode::serialize_into(writer, &parameters)
        .map_err(|e| TensorError::Serialization(e.to_string()))?;
    Ok(())
}

/// 从`reader`读入参数并覆盖模块现有的参数。
/// 参数的个数与各自的形状须与模块一致，否则模块保持不变
pub fn load_parameters<M: Module + ?Sized, R: Read>(
    module: &mut M,
    reader: &mut R,
) -> Result<(), ModelError> {
    let loaded: Vec<Tensor> = bincode::deserialize_from(reader)
        .map_err(|e| TensorError::Serialization(e.to_string()))?;
    let mut parameters = module.parameters_mut();
    if loaded.len() != parameters.len() {
        return Err(ModelError::InvalidConfig(format!(
            "参数个数不一致：模块有{}个，文件中有{}个",
            parameters.len(),
            loaded.len()
        )));
    }
    if parameters
        .iter()
        .zip(&loaded)
        .any(|(p, l)| !p.is_same_shape(l))
    {
        return Err(TensorError::InconsitentShape.into());
    }
    for (p, l) in parameters.iter_mut().zip(loaded) {
        **p = l;
    }
    Ok(())
}

pub fn save_to_file<M: Module + ?Sized>(module: &M, path: impl AsRef<Path>) -> Result<(), ModelError> {
    let file = File::create(path).map_err(|e| TensorError::Serialization(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    save_parameters(module, &mut writer)?;
    writer
        .flush()
        .map_err(|e| TensorError::Serialization(e.to_string()))?;
    Ok(())
}

pub fn load_from_file<M: Module + ?Sized>(
    module: &mut M,
    path: impl AsRef<Path>,
) -> Result<(), ModelError> {
    let file = File::open(path).map_err(|e| TensorError::Serialization(e.to_string()))?;
    load_parameters(module, &mut BufReader::new(file))
}
