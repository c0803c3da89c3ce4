//! MF-PP Metrics
//!
//! 业务指标记录

use metrics::{counter, gauge, histogram};

// ============================================================================
// 生产建议 Metrics
// ============================================================================

/// 记录一次生产建议计算
pub fn record_planning_run(duration_ms: f64, products_analyzed: usize, producible_count: usize) {
    counter!("mfpp_planning_runs_total").increment(1);
    histogram!("mfpp_planning_duration_ms").record(duration_ms);
    gauge!("mfpp_products_analyzed").set(products_analyzed as f64);
    gauge!("mfpp_producible_products").set(producible_count as f64);
}

// ============================================================================
// 主数据 Metrics
// ============================================================================

/// 记录主数据变更
pub fn record_master_data_change(entity: &'static str, action: &'static str) {
    let labels = [("entity", entity), ("action", action)];
    counter!("mfpp_master_data_changes_total", &labels).increment(1);
}
