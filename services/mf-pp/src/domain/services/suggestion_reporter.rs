//! 建议报告
//!
//! 把规划结果整理成对外返回的结构，不包含业务规则

use serde::Serialize;
use stockplan_domain_core::{Decimal, Money, RoundingStrategy, decimal_serde};

use crate::domain::services::allocation_planner::{PlannedProduction, ProductionPlan};
use crate::domain::value_objects::ProductId;

/// 生产建议报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionReport {
    pub total_production_value: Money,
    pub products_analyzed: usize,
    pub producible_count: usize,
    /// 列表位置即优先级（第一个元素优先级为 1）
    pub suggestions: Vec<Suggestion>,
}

/// 单条建议
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub priority: usize,
    pub product_id: ProductId,
    pub product_code: String,
    pub product_name: String,
    pub quantity_possible: u64,
    pub unit_value: Money,
    pub total_value: Money,
    /// 占总价值的百分比，保留一位小数
    #[serde(with = "decimal_serde")]
    pub share_of_total: Decimal,
}

/// 生成报告，保持规划结果的顺序
pub fn to_report(plan: ProductionPlan) -> SuggestionReport {
    let total = plan.total_production_value;
    let suggestions = plan
        .items
        .into_iter()
        .enumerate()
        .map(|(index, item)| to_suggestion(index + 1, item, total))
        .collect();

    SuggestionReport {
        total_production_value: total,
        products_analyzed: plan.products_analyzed,
        producible_count: plan.producible_count,
        suggestions,
    }
}

fn to_suggestion(priority: usize, item: PlannedProduction, total: Money) -> Suggestion {
    Suggestion {
        priority,
        share_of_total: share_of(item.total_value, total),
        product_id: item.product_id,
        product_code: item.product_code,
        product_name: item.product_name,
        quantity_possible: item.quantity,
        unit_value: item.unit_value,
        total_value: item.total_value,
    }
}

fn share_of(part: Money, total: Money) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    part.amount()
        .checked_div(total.amount())
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|percent| percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn money(value: &str) -> Money {
        Money::new(Decimal::from_str(value).unwrap())
    }

    fn item(code: &str, quantity: u64, unit: &str) -> PlannedProduction {
        PlannedProduction {
            product_id: ProductId::new(),
            product_code: code.to_string(),
            product_name: format!("Product {}", code),
            quantity,
            unit_value: money(unit),
            total_value: money(unit).times(quantity),
        }
    }

    #[test]
    fn test_report_preserves_order_and_assigns_priority() {
        let items = vec![item("B", 3, "10"), item("A", 1, "10")];
        let plan = ProductionPlan {
            total_production_value: money("40"),
            products_analyzed: 5,
            producible_count: 2,
            items,
        };

        let report = to_report(plan);
        assert_eq!(report.products_analyzed, 5);
        assert_eq!(report.producible_count, 2);
        assert_eq!(report.suggestions[0].product_code, "B");
        assert_eq!(report.suggestions[0].priority, 1);
        assert_eq!(report.suggestions[1].priority, 2);
        assert_eq!(report.suggestions[0].share_of_total, Decimal::from_str("75.0").unwrap());
        assert_eq!(report.suggestions[1].share_of_total, Decimal::from_str("25.0").unwrap());
    }

    #[test]
    fn test_share_is_zero_when_total_is_zero() {
        let plan = ProductionPlan {
            total_production_value: Money::zero(),
            products_analyzed: 1,
            producible_count: 1,
            items: vec![item("FREE", 2, "0")],
        };

        let report = to_report(plan);
        assert!(report.suggestions[0].share_of_total.is_zero());
    }

    #[test]
    fn test_numbers_serialize_as_json_numbers() {
        let plan = ProductionPlan {
            total_production_value: money("79.96"),
            products_analyzed: 1,
            producible_count: 1,
            items: vec![item("A", 4, "19.99")],
        };

        let json = serde_json::to_value(to_report(plan)).unwrap();
        assert!(json["total_production_value"].is_number());
        assert_eq!(json["total_production_value"].as_f64(), Some(79.96));
        let first = &json["suggestions"][0];
        assert_eq!(first["quantity_possible"], 4);
        assert_eq!(first["unit_value"].as_f64(), Some(19.99));
        assert_eq!(first["total_value"].as_f64(), Some(79.96));
        assert_eq!(first["share_of_total"], 100);
        assert!(first["product_id"].is_string());
    }

    #[test]
    fn test_empty_plan_report() {
        let json = serde_json::to_value(to_report(ProductionPlan::default())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "total_production_value": 0,
                "products_analyzed": 0,
                "producible_count": 0,
                "suggestions": []
            })
        );
    }
}
