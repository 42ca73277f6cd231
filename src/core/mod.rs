//! 核心模块：错误处理、响应结构与中间件

pub mod error;
pub mod middleware;
pub mod response;
