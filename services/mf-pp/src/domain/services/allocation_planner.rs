//! 分配规划
//!
//! 对所有产品运行可行性计算，剔除不可生产的产品，按价值排序并汇总

use std::cmp::Ordering;

use stockplan_domain_core::{Entity, Money};
use tracing::debug;

use crate::domain::entities::Product;
use crate::domain::inventory::{AssociationsByProduct, StockSnapshot};
use crate::domain::services::feasibility::max_producible;
use crate::domain::value_objects::ProductId;

/// 单个产品的生产建议
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedProduction {
    pub product_id: ProductId,
    pub product_code: String,
    pub product_name: String,
    pub quantity: u64,
    pub unit_value: Money,
    pub total_value: Money,
}

/// 规划结果（按优先级排序）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductionPlan {
    pub items: Vec<PlannedProduction>,
    pub total_production_value: Money,
    pub products_analyzed: usize,
    pub producible_count: usize,
}

/// 计算生产建议
///
/// 只读取输入，不预留也不扣减库存。排序规则：总价值降序，编码升序，
/// 编码重复时再按产品 ID 升序，保证结果完全确定。
pub fn plan(
    products: &[Product],
    associations_by_product: &AssociationsByProduct,
    stock: &StockSnapshot,
) -> ProductionPlan {
    if products.is_empty() || stock.is_empty() {
        debug!(
            products = products.len(),
            raw_materials = stock.len(),
            "Nothing to plan"
        );
        return ProductionPlan {
            products_analyzed: products.len(),
            ..ProductionPlan::default()
        };
    }

    let mut items: Vec<PlannedProduction> = products
        .iter()
        .filter_map(|product| {
            let bom = associations_by_product
                .get(product.id())
                .map(Vec::as_slice)
                .unwrap_or_default();
            let quantity = max_producible(bom, stock);
            if quantity == 0 {
                return None;
            }
            Some(PlannedProduction {
                product_id: *product.id(),
                product_code: product.code().to_string(),
                product_name: product.name().to_string(),
                quantity,
                unit_value: product.unit_value(),
                total_value: product.unit_value().times(quantity),
            })
        })
        .collect();

    items.sort_by(priority_order);

    let total_production_value: Money = items.iter().map(|item| item.total_value).sum();
    let producible_count = items.len();

    debug!(
        products_analyzed = products.len(),
        producible_count,
        %total_production_value,
        "Production plan computed"
    );

    ProductionPlan {
        items,
        total_production_value,
        products_analyzed: products.len(),
        producible_count,
    }
}

fn priority_order(a: &PlannedProduction, b: &PlannedProduction) -> Ordering {
    b.total_value
        .cmp(&a.total_value)
        .then_with(|| a.product_code.cmp(&b.product_code))
        .then_with(|| a.product_id.cmp(&b.product_id))
}
