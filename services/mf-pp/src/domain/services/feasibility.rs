//! 可行性计算
//!
//! 单个产品在当前库存下最多能生产多少个完整单位

use std::collections::BTreeMap;

use stockplan_domain_core::Quantity;
use tracing::warn;

use crate::domain::entities::Association;
use crate::domain::inventory::StockSnapshot;
use crate::domain::value_objects::RawMaterialId;

/// 最大可生产数量
///
/// 对每种原材料计算 `floor(库存 / 单位用量)`，取最小值。
///
/// - 没有物料清单的产品无法评估，返回 0
/// - 快照中没有库存记录的原材料按库存 0 处理
/// - 单位用量非正的行使整个产品不可生产
/// - 同一原材料的重复行先合并用量再计算
pub fn max_producible(associations: &[Association], stock: &StockSnapshot) -> u64 {
    if associations.is_empty() {
        return 0;
    }

    let mut required: BTreeMap<RawMaterialId, Quantity> = BTreeMap::new();
    for association in associations {
        let needed = association.quantity_needed();
        if !needed.is_positive() {
            warn!(
                product_id = %association.product_id(),
                raw_material_id = %association.raw_material_id(),
                quantity_needed = %needed,
                "Ignoring product with non-positive material requirement"
            );
            return 0;
        }
        let entry = required
            .entry(*association.raw_material_id())
            .or_insert_with(Quantity::zero);
        *entry = *entry + needed;
    }

    required
        .iter()
        .map(|(raw_material_id, needed)| {
            stock
                .available(raw_material_id)
                .whole_units(*needed)
                .unwrap_or(0)
        })
        .min()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockplan_domain_core::Decimal;
    use std::str::FromStr;

    use crate::domain::value_objects::ProductId;

    fn qty(value: &str) -> Quantity {
        Quantity::new(Decimal::from_str(value).unwrap())
    }

    fn requirement(product: ProductId, material: RawMaterialId, needed: &str) -> Association {
        Association::new(product, material, qty(needed))
    }

    #[test]
    fn test_no_associations_is_not_producible() {
        let stock = StockSnapshot::new().with_stock(RawMaterialId::new(), qty("100"));
        assert_eq!(max_producible(&[], &stock), 0);
    }

    #[test]
    fn test_floor_of_single_material() {
        let product = ProductId::new();
        let material = RawMaterialId::new();
        let stock = StockSnapshot::new().with_stock(material, qty("10"));

        assert_eq!(max_producible(&[requirement(product, material, "3")], &stock), 3);
    }

    #[test]
    fn test_fractional_stock_and_requirement() {
        let product = ProductId::new();
        let material = RawMaterialId::new();
        let stock = StockSnapshot::new().with_stock(material, qty("1.5"));

        assert_eq!(max_producible(&[requirement(product, material, "0.2")], &stock), 7);
    }

    #[test]
    fn test_minimum_across_materials() {
        let product = ProductId::new();
        let wood = RawMaterialId::new();
        let screws = RawMaterialId::new();
        let stock = StockSnapshot::new()
            .with_stock(wood, qty("20"))
            .with_stock(screws, qty("18"));
        let bom = [
            requirement(product, wood, "2"),
            requirement(product, screws, "4"),
        ];

        assert_eq!(max_producible(&bom, &stock), 4);
    }

    #[test]
    fn test_missing_stock_entry_fails_closed() {
        let product = ProductId::new();
        let wood = RawMaterialId::new();
        let stock = StockSnapshot::new().with_stock(wood, qty("20"));
        let bom = [
            requirement(product, wood, "2"),
            requirement(product, RawMaterialId::new(), "1"),
        ];

        assert_eq!(max_producible(&bom, &stock), 0);
    }

    #[test]
    fn test_non_positive_requirement_fails_closed() {
        let product = ProductId::new();
        let wood = RawMaterialId::new();
        let glue = RawMaterialId::new();
        let stock = StockSnapshot::new()
            .with_stock(wood, qty("20"))
            .with_stock(glue, qty("20"));
        let bom = [
            requirement(product, wood, "2"),
            requirement(product, glue, "0"),
        ];

        assert_eq!(max_producible(&bom, &stock), 0);
        assert_eq!(
            max_producible(&[requirement(product, wood, "-1")], &stock),
            0
        );
    }

    #[test]
    fn test_duplicate_rows_are_summed() {
        let product = ProductId::new();
        let wood = RawMaterialId::new();
        let stock = StockSnapshot::new().with_stock(wood, qty("12"));
        let bom = [
            requirement(product, wood, "2"),
            requirement(product, wood, "1"),
        ];

        assert_eq!(max_producible(&bom, &stock), 4);
    }

    #[test]
    fn test_does_not_touch_stock() {
        let product = ProductId::new();
        let wood = RawMaterialId::new();
        let stock = StockSnapshot::new().with_stock(wood, qty("9"));
        let before = stock.clone();

        max_producible(&[requirement(product, wood, "2")], &stock);
        assert_eq!(stock, before);
    }
}
