//! Raw material commands

use stockplan_domain_core::Quantity;
use stockplan_errors::{AppError, AppResult};

use super::{FieldLimits, validate_text};
use crate::domain::value_objects::RawMaterialId;

/// 创建原材料命令
#[derive(Debug, Clone)]
pub struct CreateRawMaterialCommand {
    pub code: String,
    pub name: String,
    pub quantity_stock: Quantity,
}

impl CreateRawMaterialCommand {
    pub fn validate(&self, limits: &FieldLimits) -> AppResult<()> {
        validate_raw_material_fields(&self.code, &self.name, self.quantity_stock, limits)
    }
}

/// 更新原材料命令（整体替换）
#[derive(Debug, Clone)]
pub struct UpdateRawMaterialCommand {
    pub raw_material_id: RawMaterialId,
    pub code: String,
    pub name: String,
    pub quantity_stock: Quantity,
}

impl UpdateRawMaterialCommand {
    pub fn validate(&self, limits: &FieldLimits) -> AppResult<()> {
        validate_raw_material_fields(&self.code, &self.name, self.quantity_stock, limits)
    }
}

/// 删除原材料命令
#[derive(Debug, Clone)]
pub struct DeleteRawMaterialCommand {
    pub raw_material_id: RawMaterialId,
}

fn validate_raw_material_fields(
    code: &str,
    name: &str,
    quantity_stock: Quantity,
    limits: &FieldLimits,
) -> AppResult<()> {
    validate_text("code", code, limits.max_code_length)?;
    validate_text("name", name, limits.max_name_length)?;
    if quantity_stock.is_negative() {
        return Err(AppError::validation(
            "quantity_stock must be greater than or equal to 0",
        ));
    }
    Ok(())
}
