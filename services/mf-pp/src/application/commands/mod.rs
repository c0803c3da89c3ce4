//! Commands module

pub mod association_commands;
pub mod product_commands;
pub mod raw_material_commands;

pub use association_commands::*;
pub use product_commands::*;
pub use raw_material_commands::*;

use stockplan_config::PlanningConfig;
use stockplan_errors::{AppError, AppResult};

/// 主数据字段长度限制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    pub max_code_length: usize,
    pub max_name_length: usize,
}

impl FieldLimits {
    pub fn from_config(config: &PlanningConfig) -> Self {
        Self {
            max_code_length: config.max_code_length,
            max_name_length: config.max_name_length,
        }
    }
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self::from_config(&PlanningConfig::default())
    }
}

/// 校验必填文本字段，长度按字符计
pub(crate) fn validate_text(field: &str, value: &str, max_length: usize) -> AppResult<()> {
    // 存储的是去掉首尾空白后的值，长度按它计算
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::validation(format!("{} is required", field)));
    }
    if value.chars().count() > max_length {
        return Err(AppError::validation(format!(
            "{} must be at most {} characters",
            field, max_length
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text_counts_characters() {
        assert!(validate_text("name", "Cadeira Ônix", 12).is_ok());
        assert!(validate_text("name", "Cadeira Ônix!", 12).is_err());
    }

    #[test]
    fn test_validate_text_ignores_surrounding_whitespace() {
        assert!(validate_text("code", " P-1 ", 3).is_ok());
        assert!(validate_text("name", "  Cadeira Ônix\t", 12).is_ok());
        assert!(validate_text("code", " P-10 ", 3).is_err());
    }

    #[test]
    fn test_validate_text_rejects_blank() {
        let err = validate_text("code", "   ", 20).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: code is required");
    }
}
