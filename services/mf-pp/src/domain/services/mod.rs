//! 领域服务
//!
//! 可行性计算 → 分配规划 → 建议报告

pub mod allocation_planner;
pub mod feasibility;
pub mod suggestion_reporter;

pub use allocation_planner::{PlannedProduction, ProductionPlan, plan};
pub use feasibility::max_producible;
pub use suggestion_reporter::{Suggestion, SuggestionReport, to_report};
