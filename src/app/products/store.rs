//! 产品内存存储

use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};

use super::model::Product;
use crate::core::error::ApiError;

/// NotFound 的固定文案（线上契约的一部分）
pub const NOT_FOUND_MESSAGE: &str = "Product not found";

/// 进程内产品存储
///
/// 整个集合由单把互斥锁保护：任一操作（读或写）在锁内完成，
/// 因此每个请求相对其他请求原子生效。集合按创建顺序保存。
#[derive(Clone, Default)]
pub struct ProductStore {
    products: Arc<Mutex<Vec<Product>>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 返回全部产品（按创建顺序，可能为空）
    pub fn list(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }

    /// 按 id 查找产品
    pub fn get(&self, id: &str) -> Result<Product, ApiError> {
        let products = self.products.lock().unwrap();
        products
            .iter()
            .find(|p| p.id() == Some(id))
            .cloned()
            .ok_or_else(|| ApiError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }

    /// 创建产品
    ///
    /// 分配 id = 当前数量 + 1（字符串化），调用方提供的 `id` 键被丢弃。
    /// 已知缺陷（沿用原有行为）：发生过删除后新分配的 id 可能与存量冲突。
    pub fn create(&self, fields: Map<String, Value>) -> Product {
        let mut products = self.products.lock().unwrap();
        let id = (products.len() + 1).to_string();

        let mut record = Map::new();
        record.insert(Product::ID_FIELD.to_string(), Value::String(id));
        let mut product = Product(record);
        product.merge(fields);

        products.push(product.clone());
        product
    }

    /// 更新产品：浅合并 `fields`，`id` 不变
    pub fn update(&self, id: &str, fields: Map<String, Value>) -> Result<Product, ApiError> {
        let mut products = self.products.lock().unwrap();
        let product = products
            .iter_mut()
            .find(|p| p.id() == Some(id))
            .ok_or_else(|| ApiError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

        product.merge(fields);
        Ok(product.clone())
    }

    /// 删除匹配 id 的产品；不存在时同样视为成功
    pub fn delete(&self, id: &str) {
        let mut products = self.products.lock().unwrap();
        products.retain(|p| p.id() != Some(id));
    }

    /// 当前产品数量
    pub fn count(&self) -> usize {
        self.products.lock().unwrap().len()
    }
}
