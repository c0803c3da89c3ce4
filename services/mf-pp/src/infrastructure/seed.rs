//! 初始库存导入
//!
//! 启动时从 JSON 文件导入原材料、产品及其物料清单。
//! 所有数据都经过与 HTTP 接口相同的命令校验。

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use stockplan_domain_core::{Entity, Money, Quantity};
use stockplan_errors::{AppError, AppResult};
use tracing::info;

use crate::application::{
    CreateAssociationCommand, CreateProductCommand, CreateRawMaterialCommand, ServiceHandler,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedFile {
    #[serde(default)]
    pub raw_materials: Vec<SeedRawMaterial>,
    #[serde(default)]
    pub products: Vec<SeedProduct>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedRawMaterial {
    pub code: String,
    pub name: String,
    pub quantity_stock: Quantity,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedProduct {
    pub code: String,
    pub name: String,
    #[serde(alias = "value")]
    pub unit_value: Money,
    /// 物料清单，按原材料编码引用
    #[serde(default)]
    pub raw_materials: Vec<SeedRequirement>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedRequirement {
    pub code: String,
    pub quantity_needed: Quantity,
}

/// 导入结果统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub raw_materials: usize,
    pub products: usize,
    pub associations: usize,
}

/// 读取并导入种子文件
pub async fn load_seed(path: &Path, handler: &ServiceHandler) -> AppResult<SeedSummary> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::failed_precondition(format!("cannot read seed file {}: {}", path.display(), e))
    })?;
    let seed: SeedFile = serde_json::from_str(&content).map_err(|e| {
        AppError::validation(format!("invalid seed file {}: {}", path.display(), e))
    })?;

    let summary = apply_seed(seed, handler).await?;
    info!(
        path = %path.display(),
        raw_materials = summary.raw_materials,
        products = summary.products,
        associations = summary.associations,
        "Seed inventory loaded"
    );
    Ok(summary)
}

/// 按 原材料 → 产品 → 物料清单 的顺序导入
pub async fn apply_seed(seed: SeedFile, handler: &ServiceHandler) -> AppResult<SeedSummary> {
    let mut summary = SeedSummary::default();
    let mut raw_material_ids = HashMap::new();

    for item in seed.raw_materials {
        let raw_material = handler
            .create_raw_material(CreateRawMaterialCommand {
                code: item.code,
                name: item.name,
                quantity_stock: item.quantity_stock,
            })
            .await?;
        raw_material_ids.insert(raw_material.code().to_string(), *raw_material.id());
        summary.raw_materials += 1;
    }

    for item in seed.products {
        let product = handler
            .create_product(CreateProductCommand {
                code: item.code,
                name: item.name,
                unit_value: item.unit_value,
            })
            .await?;
        summary.products += 1;

        for requirement in item.raw_materials {
            let raw_material_id = raw_material_ids
                .get(requirement.code.trim())
                .copied()
                .ok_or_else(|| {
                    AppError::validation(format!(
                        "product {} references unknown raw material {}",
                        product.code(),
                        requirement.code
                    ))
                })?;
            handler
                .add_product_raw_material(CreateAssociationCommand {
                    product_id: *product.id(),
                    raw_material_id,
                    quantity_needed: requirement.quantity_needed,
                })
                .await?;
            summary.associations += 1;
        }
    }

    Ok(summary)
}
