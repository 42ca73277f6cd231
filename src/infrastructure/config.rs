//! 服务配置

use std::env;
use std::net::SocketAddr;

/// PORT 未设置时使用的默认端口
pub const DEFAULT_PORT: u16 = 4000;

/// 服务器配置
///
/// 唯一的可配置项是监听端口，来自环境变量 `PORT`。
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// 从环境变量读取配置；`PORT` 缺失或无法解析时退回默认端口
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { port }
    }

    /// 监听地址（绑定所有网卡）
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
