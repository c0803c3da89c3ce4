//! 产品物料清单视图

use serde::Serialize;
use stockplan_domain_core::{Entity, Quantity};

use crate::domain::entities::{Association, RawMaterial};
use crate::domain::value_objects::RawMaterialId;

/// 物料清单行与原材料信息的联合视图
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRawMaterialView {
    pub raw_material_id: RawMaterialId,
    pub raw_material_code: String,
    pub raw_material_name: String,
    pub quantity_needed: Quantity,
    pub quantity_stock: Quantity,
}

impl ProductRawMaterialView {
    pub fn new(association: &Association, raw_material: &RawMaterial) -> Self {
        Self {
            raw_material_id: *raw_material.id(),
            raw_material_code: raw_material.code().to_string(),
            raw_material_name: raw_material.name().to_string(),
            quantity_needed: association.quantity_needed(),
            quantity_stock: raw_material.quantity_stock(),
        }
    }
}
