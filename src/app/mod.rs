//! 应用模块：路由组装与各资源子模块

pub mod products;

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use self::products::{handler, store::ProductStore};

/// 组装完整应用路由
///
/// 中间件层自内向外：请求日志、HTTP 追踪、CORS（允许任意来源）。
/// 存储实例通过 axum 状态注入到每个处理器，而不是全局变量，
/// 因此测试可以为每个用例构造全新的存储。
pub fn build_app(store: ProductStore) -> Router {
    Router::new()
        .route("/", get(handler::api_info))
        .route("/health", get(handler::health_check))
        .merge(products::router())
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(store)
}
