use std::io::{Read, Write};

use super::Tensor;
use crate::errors::TensorError;

// 保存和加载张量
impl Tensor {
    /// 将单个Tensor写入`writer`（如本地文件）
    pub fn save<W: Write>(&self, writer: &mut W) -> Result<(), TensorError> {
        bincode::serialize_into(writer, &self.data)
            .map_err(|e| TensorError::Serialization(e.to_string()))
    }

    /// 从`reader`（如本地文件）加载单个Tensor
    pub fn load<R: Read>(reader: &mut R) -> Result<Self, TensorError> {
        let data = bincode::deserialize_from(reader)
            .map_err(|e| TensorError::Serialization(e.to_string()))?;
        Ok(Self { data })
    }
}
