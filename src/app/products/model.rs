//! 产品数据模型

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 产品记录
///
/// 一个保留插入顺序的任意 JSON 字段映射。除存储层分配的 `id`
/// 字段外，其余字段由调用方自由提供，不做类型或结构校验。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product(pub Map<String, Value>);

impl Product {
    pub const ID_FIELD: &'static str = "id";

    /// 返回 `id` 字段（仅当其为 JSON 字符串时）
    pub fn id(&self) -> Option<&str> {
        self.0.get(Self::ID_FIELD).and_then(Value::as_str)
    }

    /// 浅合并：`fields` 中的键覆盖现有键，新键追加；
    /// `fields` 中的 `id` 键被忽略，原 `id` 始终保留。
    pub fn merge(&mut self, fields: Map<String, Value>) {
        for (key, value) in fields {
            if key != Self::ID_FIELD {
                self.0.insert(key, value);
            }
        }
    }
}
