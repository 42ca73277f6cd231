//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// 核心错误类型
///
/// 本服务唯一的失败形态：按 id 查找不到产品。
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
}

/// 错误响应结构（线上契约只有 message 一个字段）
#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let error_response = ErrorResponse { message };

        (status, axum::Json(error_response)).into_response()
    }
}
