//! 产品 HTTP 处理器
//!
//! 每个处理器都是对存储层单个操作的薄适配：
//! 取出参数、调用存储、把结果（或错误）序列化为 JSON 响应。

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Map, Value};

use super::{model::Product, store::ProductStore};
use crate::core::{error::ApiError, response::MessageResponse};

/// 获取所有产品
pub async fn list_products(State(store): State<ProductStore>) -> Json<Vec<Product>> {
    Json(store.list())
}

/// 获取特定产品
pub async fn get_product(
    State(store): State<ProductStore>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = store.get(&id)?;
    Ok(Json(product))
}

/// 创建新产品（请求体字段不做校验，原样存储）
pub async fn create_product(
    State(store): State<ProductStore>,
    Json(fields): Json<Map<String, Value>>,
) -> (StatusCode, Json<Product>) {
    let product = store.create(fields);
    (StatusCode::CREATED, Json(product))
}

/// 更新产品（浅合并，`id` 不变）
pub async fn update_product(
    State(store): State<ProductStore>,
    Path(id): Path<String>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<Json<Product>, ApiError> {
    let product = store.update(&id, fields)?;
    Ok(Json(product))
}

/// 删除产品（不存在也返回成功）
pub async fn delete_product(
    State(store): State<ProductStore>,
    Path(id): Path<String>,
) -> Json<MessageResponse> {
    store.delete(&id);
    Json(MessageResponse::new("Product deleted successfully"))
}

/// API 信息
pub async fn api_info() -> Json<Value> {
    Json(json!({
        "name": "Product API",
        "version": "0.1.0",
        "description": "内存产品 CRUD 服务",
        "endpoints": {
            "GET /products": "获取所有产品",
            "POST /products": "创建新产品",
            "GET /products/:id": "获取特定产品",
            "PUT /products/:id": "更新产品",
            "DELETE /products/:id": "删除产品",
            "GET /health": "健康检查"
        },
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// 健康检查
pub async fn health_check(State(store): State<ProductStore>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": "0.1.0",
        "store": {
            "type": "in-memory",
            "products_count": store.count()
        }
    }))
}
