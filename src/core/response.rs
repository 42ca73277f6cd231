//! 核心响应处理模块

use serde::Serialize;

/// 纯消息响应结构（例如删除成功的回执）
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
