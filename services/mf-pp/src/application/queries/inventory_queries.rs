//! Inventory queries

use crate::domain::value_objects::{ProductId, RawMaterialId};

/// 获取产品查询
#[derive(Debug, Clone)]
pub struct GetProductQuery {
    pub product_id: ProductId,
}

/// 产品列表查询
#[derive(Debug, Clone, Default)]
pub struct ListProductsQuery;

/// 获取原材料查询
#[derive(Debug, Clone)]
pub struct GetRawMaterialQuery {
    pub raw_material_id: RawMaterialId,
}

/// 原材料列表查询
#[derive(Debug, Clone, Default)]
pub struct ListRawMaterialsQuery;

/// 产品物料清单查询
#[derive(Debug, Clone)]
pub struct ListProductRawMaterialsQuery {
    pub product_id: ProductId,
}
