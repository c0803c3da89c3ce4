//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::{Router, middleware};
use stockplan_config::AppConfig;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::health::{HealthChecker, ReadinessCheck, health_routes};
use crate::metrics::{MetricsRecorder, track_http_metrics};
use crate::runtime::{init_runtime, shutdown_signal};

/// 由业务服务构建的 HTTP 组件
pub struct HttpService {
    pub router: Router,
    pub readiness_checks: Vec<Arc<dyn ReadinessCheck>>,
}

impl HttpService {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            readiness_checks: Vec::new(),
        }
    }

    pub fn with_readiness_check(mut self, check: Arc<dyn ReadinessCheck>) -> Self {
        self.readiness_checks.push(check);
        self
    }
}

/// 组装最终路由：业务路由 + 健康检查 + metrics + 通用中间件
pub fn compose_router(
    service: HttpService,
    metrics: Option<Arc<MetricsRecorder>>,
    request_timeout: Duration,
) -> Router {
    let checker = service
        .readiness_checks
        .into_iter()
        .fold(HealthChecker::new(), HealthChecker::with_check);

    service
        .router
        .merge(health_routes(Arc::new(checker), metrics))
        .route_layer(middleware::from_fn(track_http_metrics))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// 运行 HTTP 服务
///
/// 所有服务的统一入口点：
/// 1. 加载配置
/// 2. 初始化运行时（日志）
/// 3. 安装 Prometheus 记录器
/// 4. 调用业务闭包构建路由
/// 5. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use stockplan_bootstrap::{HttpService, run_http_server};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_http_server("config", |config| async move {
///         Ok(HttpService::new(my_routes(&config)))
///     })
///     .await
/// }
/// ```
pub async fn run_http_server<F, Fut>(
    config_dir: &str,
    service_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(AppConfig) -> Fut,
    Fut: Future<Output = Result<HttpService, Box<dyn std::error::Error>>>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 初始化 Metrics 记录器
    let metrics = match MetricsRecorder::install() {
        Ok(recorder) => Some(Arc::new(recorder)),
        Err(e) => {
            warn!("Prometheus recorder unavailable, /metrics disabled: {}", e);
            None
        }
    };

    // 4. 构建业务服务
    let service = service_builder(config.clone()).await?;
    let app = compose_router(
        service,
        metrics,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    // 5. 启动服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "HTTP server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use tower::ServiceExt;

    fn slow_service() -> HttpService {
        HttpService::new(
            Router::new()
                .route("/fast", get(|| async { "ok" }))
                .route(
                    "/slow",
                    get(|| async {
                        tokio::time::sleep(Duration::from_secs(5)).await;
                        "late"
                    }),
                ),
        )
    }

    async fn status_of(router: Router, uri: &str) -> StatusCode {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_slow_request_times_out_with_408() {
        let router = compose_router(slow_service(), None, Duration::from_millis(20));
        assert_eq!(status_of(router, "/slow").await, StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn test_fast_request_passes_timeout_layer() {
        let router = compose_router(slow_service(), None, Duration::from_secs(1));
        assert_eq!(status_of(router.clone(), "/fast").await, StatusCode::OK);
        assert_eq!(status_of(router, "/health").await, StatusCode::OK);
    }
}
