//! mf-pp Service - Production Planning

use mf_pp::build_service;
use stockplan_bootstrap::run_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    run_http_server("config", build_service).await
}
