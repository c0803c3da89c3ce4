//! API layer - HTTP/JSON routes

mod conversions;
pub mod dto;
mod planning;
mod products;
mod raw_materials;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, put};
use tower_http::limit::RequestBodyLimitLayer;

use crate::application::ServiceHandler;

/// 请求体上限
const MAX_BODY_BYTES: usize = 64 * 1024;

/// 业务路由
pub fn routes(handler: Arc<ServiceHandler>) -> Router {
    Router::new()
        .route("/production/suggestions", get(planning::get_suggestions))
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route(
            "/products/{id}/raw-materials",
            get(products::list_product_raw_materials).post(products::add_product_raw_material),
        )
        .route(
            "/products/{id}/raw-materials/{raw_material_id}",
            put(products::update_product_raw_material)
                .delete(products::remove_product_raw_material),
        )
        .route(
            "/raw-materials",
            get(raw_materials::list_raw_materials).post(raw_materials::create_raw_material),
        )
        .route(
            "/raw-materials/{id}",
            get(raw_materials::get_raw_material)
                .put(raw_materials::update_raw_material)
                .delete(raw_materials::delete_raw_material),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(handler)
}
