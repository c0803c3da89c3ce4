//! Association commands

use stockplan_domain_core::Quantity;
use stockplan_errors::{AppError, AppResult};

use crate::domain::value_objects::{ProductId, RawMaterialId};

/// 为产品添加原材料命令
#[derive(Debug, Clone)]
pub struct CreateAssociationCommand {
    pub product_id: ProductId,
    pub raw_material_id: RawMaterialId,
    pub quantity_needed: Quantity,
}

impl CreateAssociationCommand {
    pub fn validate(&self) -> AppResult<()> {
        validate_quantity_needed(self.quantity_needed)
    }
}

/// 修改单位用量命令
#[derive(Debug, Clone)]
pub struct UpdateAssociationCommand {
    pub product_id: ProductId,
    pub raw_material_id: RawMaterialId,
    pub quantity_needed: Quantity,
}

impl UpdateAssociationCommand {
    pub fn validate(&self) -> AppResult<()> {
        validate_quantity_needed(self.quantity_needed)
    }
}

/// 移除产品原材料命令
#[derive(Debug, Clone)]
pub struct DeleteAssociationCommand {
    pub product_id: ProductId,
    pub raw_material_id: RawMaterialId,
}

fn validate_quantity_needed(quantity_needed: Quantity) -> AppResult<()> {
    // 归一化到三位小数后为 0 的值同样拒绝
    if !quantity_needed.is_positive() {
        return Err(AppError::validation("quantity_needed must be greater than 0"));
    }
    Ok(())
}
