//! Business logic handler

use std::sync::Arc;
use std::time::Instant;

use stockplan_domain_core::Entity;
use stockplan_errors::{AppError, AppResult};
use tracing::{debug, info, warn};

use crate::domain::entities::{Association, Product, RawMaterial};
use crate::domain::repositories::{
    AssociationRepository, InventorySnapshotSource, ProductRepository, RawMaterialRepository,
};
use crate::domain::services::{SuggestionReport, plan, to_report};
use crate::domain::value_objects::{ProductId, RawMaterialId};
use crate::domain::views::ProductRawMaterialView;
use crate::infrastructure::observability::metrics::{record_master_data_change, record_planning_run};

use super::commands::*;
use super::queries::*;

pub struct ServiceHandler {
    product_repo: Arc<dyn ProductRepository>,
    raw_material_repo: Arc<dyn RawMaterialRepository>,
    association_repo: Arc<dyn AssociationRepository>,
    snapshot_source: Arc<dyn InventorySnapshotSource>,
    limits: FieldLimits,
}

impl ServiceHandler {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        raw_material_repo: Arc<dyn RawMaterialRepository>,
        association_repo: Arc<dyn AssociationRepository>,
        snapshot_source: Arc<dyn InventorySnapshotSource>,
        limits: FieldLimits,
    ) -> Self {
        Self {
            product_repo,
            raw_material_repo,
            association_repo,
            snapshot_source,
            limits,
        }
    }

    // ========== 产品 ==========

    /// 创建产品
    pub async fn create_product(&self, cmd: CreateProductCommand) -> AppResult<Product> {
        info!("Creating product: {}", cmd.code);

        cmd.validate(&self.limits)?;
        self.ensure_product_code_free(&cmd.code, None).await?;

        let product = Product::new(cmd.code.trim(), cmd.name.trim(), cmd.unit_value);
        self.product_repo.insert(&product).await?;
        record_master_data_change("product", "create");

        info!("Product created successfully: {}", product.id());
        Ok(product)
    }

    /// 获取产品
    pub async fn get_product(&self, query: GetProductQuery) -> AppResult<Product> {
        debug!("Getting product: {}", query.product_id);
        self.load_product(&query.product_id).await
    }

    /// 产品列表（按编码排序）
    pub async fn list_products(&self, _query: ListProductsQuery) -> AppResult<Vec<Product>> {
        self.product_repo.list().await
    }

    /// 更新产品
    pub async fn update_product(&self, cmd: UpdateProductCommand) -> AppResult<Product> {
        info!("Updating product: {}", cmd.product_id);

        cmd.validate(&self.limits)?;
        let mut product = self.load_product(&cmd.product_id).await?;
        self.ensure_product_code_free(&cmd.code, Some(&cmd.product_id))
            .await?;

        product.change_code(cmd.code.trim());
        product.rename(cmd.name.trim());
        product.change_unit_value(cmd.unit_value);
        // 读取之后可能已被并发删除，update 会返回 NotFound
        self.product_repo.update(&product).await?;
        record_master_data_change("product", "update");

        Ok(product)
    }

    /// 删除产品（同时删除其物料清单）
    pub async fn delete_product(&self, cmd: DeleteProductCommand) -> AppResult<()> {
        info!("Deleting product: {}", cmd.product_id);

        if !self.product_repo.delete(&cmd.product_id).await? {
            return Err(AppError::not_found(format!(
                "product {} not found",
                cmd.product_id
            )));
        }
        record_master_data_change("product", "delete");
        Ok(())
    }

    // ========== 原材料 ==========

    /// 创建原材料
    pub async fn create_raw_material(&self, cmd: CreateRawMaterialCommand) -> AppResult<RawMaterial> {
        info!("Creating raw material: {}", cmd.code);

        cmd.validate(&self.limits)?;
        self.ensure_raw_material_code_free(&cmd.code, None).await?;

        let raw_material = RawMaterial::new(cmd.code.trim(), cmd.name.trim(), cmd.quantity_stock);
        self.raw_material_repo.insert(&raw_material).await?;
        record_master_data_change("raw_material", "create");

        info!("Raw material created successfully: {}", raw_material.id());
        Ok(raw_material)
    }

    /// 获取原材料
    pub async fn get_raw_material(&self, query: GetRawMaterialQuery) -> AppResult<RawMaterial> {
        debug!("Getting raw material: {}", query.raw_material_id);
        self.load_raw_material(&query.raw_material_id).await
    }

    /// 原材料列表（按编码排序）
    pub async fn list_raw_materials(
        &self,
        _query: ListRawMaterialsQuery,
    ) -> AppResult<Vec<RawMaterial>> {
        self.raw_material_repo.list().await
    }

    /// 更新原材料（含库存盘点）
    pub async fn update_raw_material(&self, cmd: UpdateRawMaterialCommand) -> AppResult<RawMaterial> {
        info!("Updating raw material: {}", cmd.raw_material_id);

        cmd.validate(&self.limits)?;
        let mut raw_material = self.load_raw_material(&cmd.raw_material_id).await?;
        self.ensure_raw_material_code_free(&cmd.code, Some(&cmd.raw_material_id))
            .await?;

        raw_material.change_code(cmd.code.trim());
        raw_material.rename(cmd.name.trim());
        raw_material.adjust_stock(cmd.quantity_stock);
        self.raw_material_repo.update(&raw_material).await?;
        record_master_data_change("raw_material", "update");

        Ok(raw_material)
    }

    /// 删除原材料（同时删除引用它的物料清单行）
    pub async fn delete_raw_material(&self, cmd: DeleteRawMaterialCommand) -> AppResult<()> {
        info!("Deleting raw material: {}", cmd.raw_material_id);

        if !self.raw_material_repo.delete(&cmd.raw_material_id).await? {
            return Err(AppError::not_found(format!(
                "raw material {} not found",
                cmd.raw_material_id
            )));
        }
        record_master_data_change("raw_material", "delete");
        Ok(())
    }

    // ========== 物料清单 ==========

    /// 产品的物料清单，按原材料编码排序
    pub async fn list_product_raw_materials(
        &self,
        query: ListProductRawMaterialsQuery,
    ) -> AppResult<Vec<ProductRawMaterialView>> {
        self.load_product(&query.product_id).await?;

        let associations = self.association_repo.list_by_product(&query.product_id).await?;
        let mut views = Vec::with_capacity(associations.len());
        for association in &associations {
            match self
                .raw_material_repo
                .find_by_id(association.raw_material_id())
                .await?
            {
                Some(raw_material) => {
                    views.push(ProductRawMaterialView::new(association, &raw_material))
                }
                // 读取期间原材料被并发删除
                None => warn!(
                    product_id = %query.product_id,
                    raw_material_id = %association.raw_material_id(),
                    "Skipping association to missing raw material"
                ),
            }
        }
        views.sort_by(|a, b| a.raw_material_code.cmp(&b.raw_material_code));
        Ok(views)
    }

    /// 为产品添加原材料
    pub async fn add_product_raw_material(
        &self,
        cmd: CreateAssociationCommand,
    ) -> AppResult<ProductRawMaterialView> {
        info!(
            "Adding raw material {} to product {}",
            cmd.raw_material_id, cmd.product_id
        );

        cmd.validate()?;
        self.load_product(&cmd.product_id).await?;
        let raw_material = self.load_raw_material(&cmd.raw_material_id).await?;

        // 同一对已存在时由存储在写锁内拒绝
        let association = Association::new(cmd.product_id, cmd.raw_material_id, cmd.quantity_needed);
        self.association_repo.insert(&association).await?;
        record_master_data_change("association", "create");

        Ok(ProductRawMaterialView::new(&association, &raw_material))
    }

    /// 修改单位用量
    pub async fn update_product_raw_material(
        &self,
        cmd: UpdateAssociationCommand,
    ) -> AppResult<ProductRawMaterialView> {
        info!(
            "Updating raw material {} of product {}",
            cmd.raw_material_id, cmd.product_id
        );

        cmd.validate()?;
        let mut association = self
            .association_repo
            .find(&cmd.product_id, &cmd.raw_material_id)
            .await?
            .ok_or_else(|| association_not_found(&cmd.product_id, &cmd.raw_material_id))?;
        let raw_material = self.load_raw_material(&cmd.raw_material_id).await?;

        association.change_quantity_needed(cmd.quantity_needed);
        self.association_repo.update(&association).await?;
        record_master_data_change("association", "update");

        Ok(ProductRawMaterialView::new(&association, &raw_material))
    }

    /// 移除产品原材料
    pub async fn remove_product_raw_material(&self, cmd: DeleteAssociationCommand) -> AppResult<()> {
        info!(
            "Removing raw material {} from product {}",
            cmd.raw_material_id, cmd.product_id
        );

        if !self
            .association_repo
            .delete(&cmd.product_id, &cmd.raw_material_id)
            .await?
        {
            return Err(association_not_found(&cmd.product_id, &cmd.raw_material_id));
        }
        record_master_data_change("association", "delete");
        Ok(())
    }

    // ========== 生产建议 ==========

    /// 基于当前库存快照计算生产建议
    pub async fn production_suggestions(
        &self,
        _query: GetProductionSuggestionsQuery,
    ) -> AppResult<SuggestionReport> {
        let snapshot = self.snapshot_source.snapshot().await?;

        let started = Instant::now();
        let stock = snapshot.stock();
        let associations = snapshot.associations_by_product();
        let report = to_report(plan(&snapshot.products, &associations, &stock));
        let duration_ms = started.elapsed().as_secs_f64() * 1000.0;

        record_planning_run(duration_ms, report.products_analyzed, report.producible_count);
        info!(
            products_analyzed = report.products_analyzed,
            producible_count = report.producible_count,
            total_production_value = %report.total_production_value,
            duration_ms,
            "Production suggestions computed"
        );

        Ok(report)
    }

    // ========== 内部方法 ==========

    async fn load_product(&self, id: &ProductId) -> AppResult<Product> {
        self.product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("product {} not found", id)))
    }

    async fn load_raw_material(&self, id: &RawMaterialId) -> AppResult<RawMaterial> {
        self.raw_material_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("raw material {} not found", id)))
    }

    async fn ensure_product_code_free(&self, code: &str, current: Option<&ProductId>) -> AppResult<()> {
        match self.product_repo.find_by_code(code.trim()).await? {
            Some(existing) if Some(existing.id()) != current => Err(AppError::conflict(format!(
                "product code {} already exists",
                code.trim()
            ))),
            _ => Ok(()),
        }
    }

    async fn ensure_raw_material_code_free(
        &self,
        code: &str,
        current: Option<&RawMaterialId>,
    ) -> AppResult<()> {
        match self.raw_material_repo.find_by_code(code.trim()).await? {
            Some(existing) if Some(existing.id()) != current => Err(AppError::conflict(format!(
                "raw material code {} already exists",
                code.trim()
            ))),
            _ => Ok(()),
        }
    }
}

fn association_not_found(product_id: &ProductId, raw_material_id: &RawMaterialId) -> AppError {
    AppError::not_found(format!(
        "raw material {} is not associated with product {}",
        raw_material_id, product_id
    ))
}
