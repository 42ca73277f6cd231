//! 产品 CRUD API 服务器
//! 内存存储，无持久化；进程重启后集合清空

use tokio::net::TcpListener;
use tracing::{info, Level};

use product_api::app::{build_app, products::store::ProductStore};
use product_api::infrastructure::{config::ServerConfig, logger::Logger};

#[tokio::main]
async fn main() {
    // 初始化日志
    Logger::init(Level::INFO);

    let config = ServerConfig::from_env();

    // 创建共享存储并组装路由
    let store = ProductStore::new();
    let app = build_app(store);

    // 绑定地址
    let listener = TcpListener::bind(config.bind_addr())
        .await
        .expect("无法绑定到端口");

    info!("🚀 产品 API 服务器运行在 http://0.0.0.0:{}", config.port);
    info!("📖 API 端点:");
    info!("   GET    /              - API 信息");
    info!("   GET    /products      - 获取所有产品");
    info!("   POST   /products      - 创建新产品");
    info!("   GET    /products/:id  - 获取特定产品");
    info!("   PUT    /products/:id  - 更新产品");
    info!("   DELETE /products/:id  - 删除产品");
    info!("   GET    /health        - 健康检查");

    // 启动服务器
    axum::serve(listener, app).await.expect("服务器启动失败");
}
