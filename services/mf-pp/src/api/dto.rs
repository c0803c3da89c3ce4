//! 请求与响应结构

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stockplan_domain_core::{AggregateRoot, Entity, Money, Quantity};

use crate::domain::entities::{Product, RawMaterial};
use crate::domain::value_objects::{ProductId, RawMaterialId};

/// 列表响应
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

// ========== 产品 ==========

#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub code: String,
    pub name: String,
    #[serde(alias = "value")]
    pub unit_value: Money,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: ProductId,
    pub code: String,
    pub name: String,
    pub unit_value: Money,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let audit = product.audit_info();
        Self {
            id: *product.id(),
            code: product.code().to_string(),
            name: product.name().to_string(),
            unit_value: product.unit_value(),
            created_at: audit.created_at,
            updated_at: audit.updated_at,
        }
    }
}

// ========== 原材料 ==========

#[derive(Debug, Deserialize)]
pub struct RawMaterialRequest {
    pub code: String,
    pub name: String,
    pub quantity_stock: Quantity,
}

#[derive(Debug, Serialize)]
pub struct RawMaterialResponse {
    pub id: RawMaterialId,
    pub code: String,
    pub name: String,
    pub quantity_stock: Quantity,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RawMaterial> for RawMaterialResponse {
    fn from(raw_material: RawMaterial) -> Self {
        let audit = raw_material.audit_info();
        Self {
            id: *raw_material.id(),
            code: raw_material.code().to_string(),
            name: raw_material.name().to_string(),
            quantity_stock: raw_material.quantity_stock(),
            created_at: audit.created_at,
            updated_at: audit.updated_at,
        }
    }
}

// ========== 物料清单 ==========

#[derive(Debug, Deserialize)]
pub struct AddProductRawMaterialRequest {
    pub raw_material_id: RawMaterialId,
    pub quantity_needed: Quantity,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRawMaterialRequest {
    pub quantity_needed: Quantity,
}
