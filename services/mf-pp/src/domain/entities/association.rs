//! 物料清单行

use serde::{Deserialize, Serialize};
use stockplan_domain_core::{AuditInfo, Quantity};

use crate::domain::value_objects::{ProductId, RawMaterialId};

/// 产品与原材料的关联
///
/// 生产一个单位的产品需要消耗 `quantity_needed` 的原材料。
/// 每个 (产品, 原材料) 组合最多一行。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Association {
    product_id: ProductId,
    raw_material_id: RawMaterialId,
    quantity_needed: Quantity,
    audit_info: AuditInfo,
}

impl Association {
    pub fn new(product_id: ProductId, raw_material_id: RawMaterialId, quantity_needed: Quantity) -> Self {
        Self {
            product_id,
            raw_material_id,
            quantity_needed,
            audit_info: AuditInfo::new(),
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn raw_material_id(&self) -> &RawMaterialId {
        &self.raw_material_id
    }

    pub fn quantity_needed(&self) -> Quantity {
        self.quantity_needed
    }

    pub fn change_quantity_needed(&mut self, quantity_needed: Quantity) {
        self.quantity_needed = quantity_needed;
        self.audit_info.update();
    }
}
