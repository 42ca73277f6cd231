//! 基础设施模块：配置与日志

pub mod config;
pub mod logger;
