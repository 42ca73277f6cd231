//! 产品资源模块

pub mod handler;
pub mod model;
pub mod store;

use axum::{routing::get, Router};

use self::store::ProductStore;

/// 组装产品路由
pub fn router() -> Router<ProductStore> {
    Router::new()
        .route(
            "/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/products/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
}
