//! 原材料实体

use serde::{Deserialize, Serialize};
use stockplan_domain_core::{AggregateRoot, AuditInfo, Entity, Quantity};

use crate::domain::value_objects::RawMaterialId;

/// 原材料实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterial {
    /// 原材料 ID
    id: RawMaterialId,
    /// 原材料编码
    code: String,
    /// 原材料名称
    name: String,
    /// 当前库存
    quantity_stock: Quantity,
    /// 审计信息
    audit_info: AuditInfo,
}

impl RawMaterial {
    pub fn new(code: impl Into<String>, name: impl Into<String>, quantity_stock: Quantity) -> Self {
        Self {
            id: RawMaterialId::new(),
            code: code.into(),
            name: name.into(),
            quantity_stock,
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

    pub fn quantity_stock(&self) -> Quantity {
        self.quantity_stock
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

    /// 盘点调整库存
    pub fn adjust_stock(&mut self, quantity_stock: Quantity) {
        self.quantity_stock = quantity_stock;
        self.touch();
    }
}

impl Entity for RawMaterial {
    type Id = RawMaterialId;

    fn id(&self) -> &RawMaterialId {
        &self.id
    }
}

impl AggregateRoot for RawMaterial {
    fn audit_info(&self) -> &AuditInfo {
        &self.audit_info
    }

    fn audit_info_mut(&mut self) -> &mut AuditInfo {
        &mut self.audit_info
    }
}
