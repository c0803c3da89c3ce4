//! 库存快照
//!
//! 一次计算使用的只读数据：产品、原材料和物料清单

use std::collections::HashMap;

use stockplan_domain_core::{Entity, Quantity};

use crate::domain::entities::{Association, Product, RawMaterial};
use crate::domain::value_objects::{ProductId, RawMaterialId};

/// 原材料库存快照
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockSnapshot {
    levels: HashMap<RawMaterialId, Quantity>,
}

impl StockSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stock(mut self, raw_material_id: RawMaterialId, quantity: Quantity) -> Self {
        self.levels.insert(raw_material_id, quantity);
        self
    }

    /// 可用库存，没有记录时按 0 处理
    pub fn available(&self, raw_material_id: &RawMaterialId) -> Quantity {
        self.levels
            .get(raw_material_id)
            .copied()
            .unwrap_or_else(Quantity::zero)
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }
}

impl FromIterator<(RawMaterialId, Quantity)> for StockSnapshot {
    fn from_iter<I: IntoIterator<Item = (RawMaterialId, Quantity)>>(iter: I) -> Self {
        Self {
            levels: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a RawMaterial> for StockSnapshot {
    fn from_iter<I: IntoIterator<Item = &'a RawMaterial>>(iter: I) -> Self {
        iter.into_iter()
            .map(|material| (*material.id(), material.quantity_stock()))
            .collect()
    }
}

/// 按产品分组的物料清单
pub type AssociationsByProduct = HashMap<ProductId, Vec<Association>>;

/// 库存快照
///
/// 按值传入计算，计算期间不会被修改
#[derive(Debug, Clone, Default)]
pub struct InventorySnapshot {
    pub products: Vec<Product>,
    pub raw_materials: Vec<RawMaterial>,
    pub associations: Vec<Association>,
}

impl InventorySnapshot {
    pub fn new(
        products: Vec<Product>,
        raw_materials: Vec<RawMaterial>,
        associations: Vec<Association>,
    ) -> Self {
        Self {
            products,
            raw_materials,
            associations,
        }
    }

    pub fn stock(&self) -> StockSnapshot {
        self.raw_materials.iter().collect()
    }

    pub fn associations_by_product(&self) -> AssociationsByProduct {
        let mut grouped = AssociationsByProduct::new();
        for association in &self.associations {
            grouped
                .entry(*association.product_id())
                .or_default()
                .push(association.clone());
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockplan_domain_core::{Decimal, Money};

    #[test]
    fn test_missing_stock_reads_as_zero() {
        let stock = StockSnapshot::new();
        assert!(stock.available(&RawMaterialId::new()).is_zero());
    }

    #[test]
    fn test_snapshot_groups_associations() {
        let steel = RawMaterial::new("RM-1", "Steel", Quantity::new(Decimal::from(9)));
        let chair = Product::new("P-1", "Chair", Money::new(Decimal::from(10)));
        let table = Product::new("P-2", "Table", Money::new(Decimal::from(30)));
        let associations = vec![
            Association::new(*chair.id(), *steel.id(), Quantity::new(Decimal::from(2))),
            Association::new(*table.id(), *steel.id(), Quantity::new(Decimal::from(4))),
        ];
        let snapshot = InventorySnapshot::new(vec![chair.clone(), table], vec![steel.clone()], associations);

        let grouped = snapshot.associations_by_product();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[chair.id()].len(), 1);
        assert_eq!(snapshot.stock().available(steel.id()), Quantity::new(Decimal::from(9)));
    }
}
