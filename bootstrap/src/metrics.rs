//! Metrics 模块
//!
//! 提供 Prometheus metrics 导出

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusHandle};

/// Metrics 记录器
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// 安装全局 Prometheus 记录器（每个进程只能安装一次）
    pub fn install() -> Result<Self, BuildError> {
        let handle = stockplan_telemetry::init_metrics()?;
        Ok(Self { handle })
    }

    /// 获取 Prometheus 格式的 metrics
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// 记录 HTTP 请求
pub fn record_http_request(method: &str, route: &str, status: u16, duration_ms: f64) {
    let labels = [
        ("method", method.to_string()),
        ("route", route.to_string()),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_ms", &labels).record(duration_ms);
}

/// HTTP metrics 中间件，通过 `route_layer` 挂载以获得匹配的路由模板
pub async fn track_http_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let route = match req.extensions().get::<MatchedPath>() {
        Some(path) => path.as_str().to_owned(),
        None => req.uri().path().to_owned(),
    };

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64() * 1000.0;
    record_http_request(&method, &route, response.status().as_u16(), duration);

    response
}
