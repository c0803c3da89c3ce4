//! 健康检查模块
//!
//! 提供 /health、/ready 和 /metrics 端点

use std::sync::Arc;

use async_trait::async_trait;
use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use stockplan_telemetry::HealthStatus;

use crate::metrics::MetricsRecorder;

/// 组件就绪检查
#[async_trait]
pub trait ReadinessCheck: Send + Sync {
    /// 组件名称
    fn name(&self) -> &'static str;

    /// 返回 Err 时附带不可用原因
    async fn check(&self) -> Result<Option<String>, String>;
}

/// 健康检查器
#[derive(Default)]
pub struct HealthChecker {
    checks: Vec<Arc<dyn ReadinessCheck>>,
}

impl HealthChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_check(mut self, check: Arc<dyn ReadinessCheck>) -> Self {
        self.checks.push(check);
        self
    }

    /// 执行存活检查（liveness）
    ///
    /// 只检查服务是否在运行，不检查依赖
    pub async fn liveness(&self) -> HealthStatus {
        HealthStatus::new()
    }

    /// 执行就绪检查（readiness）
    pub async fn readiness(&self) -> HealthStatus {
        let mut status = HealthStatus::new();
        for check in &self.checks {
            match check.check().await {
                Ok(message) => status.add_check(check.name(), true, message),
                Err(message) => status.add_check(check.name(), false, Some(message)),
            }
        }
        status
    }
}

#[derive(Clone)]
struct HealthState {
    checker: Arc<HealthChecker>,
    metrics: Option<Arc<MetricsRecorder>>,
}

/// 健康检查路由
pub fn health_routes(checker: Arc<HealthChecker>, metrics: Option<Arc<MetricsRecorder>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(HealthState { checker, metrics })
}

/// Liveness 端点处理器
async fn health_handler(State(state): State<HealthState>) -> impl IntoResponse {
    let status = state.checker.liveness().await;
    (StatusCode::OK, Json(status))
}

/// Readiness 端点处理器
async fn ready_handler(State(state): State<HealthState>) -> impl IntoResponse {
    let status = state.checker.readiness().await;
    let code = if status.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

/// Metrics 端点处理器
async fn metrics_handler(State(state): State<HealthState>) -> impl IntoResponse {
    match state.metrics {
        Some(metrics) => (
            StatusCode::OK,
            [("content-type", "text/plain; charset=utf-8")],
            metrics.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    struct StaticCheck(Result<Option<String>, String>);

    #[async_trait]
    impl ReadinessCheck for StaticCheck {
        fn name(&self) -> &'static str {
            "static"
        }

        async fn check(&self) -> Result<Option<String>, String> {
            self.0.clone()
        }
    }

    async fn get_status(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_ready_reports_failed_check() {
        let checker = HealthChecker::new()
            .with_check(Arc::new(StaticCheck(Ok(None))))
            .with_check(Arc::new(StaticCheck(Err("store poisoned".to_string()))));
        let router = health_routes(Arc::new(checker), None);

        let (status, body) = get_status(router, "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["healthy"], false);
        assert_eq!(body["checks"][1]["message"], "store poisoned");
    }

    #[tokio::test]
    async fn test_health_is_always_ok() {
        let checker = HealthChecker::new().with_check(Arc::new(StaticCheck(Err("down".to_string()))));
        let router = health_routes(Arc::new(checker), None);

        let (status, body) = get_status(router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["healthy"], true);
    }

    #[tokio::test]
    async fn test_metrics_without_recorder_is_not_found() {
        let router = health_routes(Arc::new(HealthChecker::new()), None);
        let response = router
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
