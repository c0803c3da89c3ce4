//! 产品实体

use serde::{Deserialize, Serialize};
use stockplan_domain_core::{AggregateRoot, AuditInfo, Entity, Money};

use crate::domain::value_objects::ProductId;

/// 产品实体
///
/// `code` 是展示用的第二唯一键，唯一性由仓储保证
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 产品 ID
    id: ProductId,
    /// 产品编码
    code: String,
    /// 产品名称
    name: String,
    /// 单价
    unit_value: Money,
    /// 审计信息
    audit_info: AuditInfo,
}

impl Product {
    pub fn new(code: impl Into<String>, name: impl Into<String>, unit_value: Money) -> Self {
        Self {
            id: ProductId::new(),
            code: code.into(),
            name: name.into(),
            unit_value,
            audit_info: AuditInfo::new(),
        }
    }

    // ========== Getters ==========

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_value(&self) -> Money {
        self.unit_value
    }

    // ========== Setters ==========

    pub fn change_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
        self.touch();
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    pub fn change_unit_value(&mut self, unit_value: Money) {
        self.unit_value = unit_value;
        self.touch();
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}

impl AggregateRoot for Product {
    fn audit_info(&self) -> &AuditInfo {
        &self.audit_info
    }

    fn audit_info_mut(&mut self) -> &mut AuditInfo {
        &mut self.audit_info
    }
}
