//! Product commands

use stockplan_domain_core::Money;
use stockplan_errors::{AppError, AppResult};

use super::{FieldLimits, validate_text};
use crate::domain::value_objects::ProductId;

/// 创建产品命令
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub code: String,
    pub name: String,
    pub unit_value: Money,
}

impl CreateProductCommand {
    pub fn validate(&self, limits: &FieldLimits) -> AppResult<()> {
        validate_product_fields(&self.code, &self.name, self.unit_value, limits)
    }
}

/// 更新产品命令（整体替换）
#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub product_id: ProductId,
    pub code: String,
    pub name: String,
    pub unit_value: Money,
}

impl UpdateProductCommand {
    pub fn validate(&self, limits: &FieldLimits) -> AppResult<()> {
        validate_product_fields(&self.code, &self.name, self.unit_value, limits)
    }
}

/// 删除产品命令
#[derive(Debug, Clone)]
pub struct DeleteProductCommand {
    pub product_id: ProductId,
}

fn validate_product_fields(
    code: &str,
    name: &str,
    unit_value: Money,
    limits: &FieldLimits,
) -> AppResult<()> {
    validate_text("code", code, limits.max_code_length)?;
    validate_text("name", name, limits.max_name_length)?;
    if unit_value.is_negative() {
        return Err(AppError::validation("value must be greater than or equal to 0"));
    }
    Ok(())
}
