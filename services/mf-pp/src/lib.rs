//! mf-pp - 生产建议服务

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

use stockplan_bootstrap::HttpService;
use stockplan_config::AppConfig;
use tracing::info;

use application::{FieldLimits, ServiceHandler};
use infrastructure::{InMemoryInventoryStore, load_seed};

/// 组装服务：存储、业务处理器、种子数据与路由
pub async fn build_service(config: AppConfig) -> Result<HttpService, Box<dyn std::error::Error>> {
    info!("Initializing mf-pp Service...");

    let store = Arc::new(InMemoryInventoryStore::new());
    let handler = Arc::new(ServiceHandler::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        FieldLimits::from_config(&config.planning),
    ));

    if let Some(path) = &config.seed.path {
        load_seed(path, &handler).await?;
    }

    Ok(HttpService::new(api::routes(handler)).with_readiness_check(store))
}
