//! 进程内库存存储
//!
//! 三类数据放在同一把读写锁后面：写操作（含级联删除）原子完成，
//! 快照在一次读锁内复制，不会看到写到一半的状态。

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use async_trait::async_trait;
use stockplan_bootstrap::ReadinessCheck;
use stockplan_domain_core::Entity;
use stockplan_errors::{AppError, AppResult};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Association, Product, RawMaterial};
use crate::domain::inventory::InventorySnapshot;
use crate::domain::repositories::{
    AssociationRepository, InventorySnapshotSource, ProductRepository, RawMaterialRepository,
};
use crate::domain::value_objects::{ProductId, RawMaterialId};

#[derive(Debug, Default)]
struct InventoryState {
    products: BTreeMap<ProductId, Product>,
    raw_materials: BTreeMap<RawMaterialId, RawMaterial>,
    associations: BTreeMap<(ProductId, RawMaterialId), Association>,
}

/// 进程内库存存储
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    state: RwLock<InventoryState>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sorted_by_code<T, F>(items: impl Iterator<Item = T>, code: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let mut items: Vec<T> = items.collect();
    items.sort_by(|a, b| code(a).cmp(code(b)));
    items
}

/// 编码唯一性检查，须在写锁内调用
fn ensure_product_code_free(state: &InventoryState, product: &Product) -> AppResult<()> {
    let taken = state
        .products
        .values()
        .any(|p| p.code() == product.code() && p.id() != product.id());
    if taken {
        return Err(AppError::conflict(format!(
            "product code {} already exists",
            product.code()
        )));
    }
    Ok(())
}

fn ensure_raw_material_code_free(
    state: &InventoryState,
    raw_material: &RawMaterial,
) -> AppResult<()> {
    let taken = state
        .raw_materials
        .values()
        .any(|m| m.code() == raw_material.code() && m.id() != raw_material.id());
    if taken {
        return Err(AppError::conflict(format!(
            "raw material code {} already exists",
            raw_material.code()
        )));
    }
    Ok(())
}

#[async_trait]
impl ProductRepository for InMemoryInventoryStore {
    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>> {
        Ok(self.state.read().await.products.get(id).cloned())
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Product>> {
        let state = self.state.read().await;
        Ok(state.products.values().find(|p| p.code() == code).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        let state = self.state.read().await;
        Ok(sorted_by_code(state.products.values().cloned(), |p| p.code()))
    }

    async fn insert(&self, product: &Product) -> AppResult<()> {
        let mut state = self.state.write().await;
        if state.products.contains_key(product.id()) {
            return Err(AppError::conflict(format!(
                "product {} already exists",
                product.id()
            )));
        }
        ensure_product_code_free(&state, product)?;
        state.products.insert(*product.id(), product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let mut state = self.state.write().await;
        if !state.products.contains_key(product.id()) {
            return Err(AppError::not_found(format!(
                "product {} not found",
                product.id()
            )));
        }
        ensure_product_code_free(&state, product)?;
        state.products.insert(*product.id(), product.clone());
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> AppResult<bool> {
        let mut state = self.state.write().await;
        if state.products.remove(id).is_none() {
            return Ok(false);
        }
        let before = state.associations.len();
        state.associations.retain(|(product_id, _), _| product_id != id);
        debug!(
            product_id = %id,
            removed_associations = before - state.associations.len(),
            "Product deleted"
        );
        Ok(true)
    }
}

#[async_trait]
impl RawMaterialRepository for InMemoryInventoryStore {
    async fn find_by_id(&self, id: &RawMaterialId) -> AppResult<Option<RawMaterial>> {
        Ok(self.state.read().await.raw_materials.get(id).cloned())
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<RawMaterial>> {
        let state = self.state.read().await;
        Ok(state.raw_materials.values().find(|m| m.code() == code).cloned())
    }

    async fn list(&self) -> AppResult<Vec<RawMaterial>> {
        let state = self.state.read().await;
        Ok(sorted_by_code(state.raw_materials.values().cloned(), |m| m.code()))
    }

    async fn insert(&self, raw_material: &RawMaterial) -> AppResult<()> {
        let mut state = self.state.write().await;
        if state.raw_materials.contains_key(raw_material.id()) {
            return Err(AppError::conflict(format!(
                "raw material {} already exists",
                raw_material.id()
            )));
        }
        ensure_raw_material_code_free(&state, raw_material)?;
        state
            .raw_materials
            .insert(*raw_material.id(), raw_material.clone());
        Ok(())
    }

    async fn update(&self, raw_material: &RawMaterial) -> AppResult<()> {
        let mut state = self.state.write().await;
        if !state.raw_materials.contains_key(raw_material.id()) {
            return Err(AppError::not_found(format!(
                "raw material {} not found",
                raw_material.id()
            )));
        }
        ensure_raw_material_code_free(&state, raw_material)?;
        state
            .raw_materials
            .insert(*raw_material.id(), raw_material.clone());
        Ok(())
    }

    async fn delete(&self, id: &RawMaterialId) -> AppResult<bool> {
        let mut state = self.state.write().await;
        if state.raw_materials.remove(id).is_none() {
            return Ok(false);
        }
        let before = state.associations.len();
        state
            .associations
            .retain(|(_, raw_material_id), _| raw_material_id != id);
        debug!(
            raw_material_id = %id,
            removed_associations = before - state.associations.len(),
            "Raw material deleted"
        );
        Ok(true)
    }
}

#[async_trait]
impl AssociationRepository for InMemoryInventoryStore {
    async fn find(
        &self,
        product_id: &ProductId,
        raw_material_id: &RawMaterialId,
    ) -> AppResult<Option<Association>> {
        let state = self.state.read().await;
        Ok(state
            .associations
            .get(&(*product_id, *raw_material_id))
            .cloned())
    }

    async fn list_by_product(&self, product_id: &ProductId) -> AppResult<Vec<Association>> {
        let state = self.state.read().await;
        Ok(state
            .associations
            .values()
            .filter(|a| a.product_id() == product_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, association: &Association) -> AppResult<()> {
        let mut state = self.state.write().await;
        if !state.products.contains_key(association.product_id()) {
            return Err(AppError::not_found(format!(
                "product {} not found",
                association.product_id()
            )));
        }
        if !state
            .raw_materials
            .contains_key(association.raw_material_id())
        {
            return Err(AppError::not_found(format!(
                "raw material {} not found",
                association.raw_material_id()
            )));
        }
        match state
            .associations
            .entry((*association.product_id(), *association.raw_material_id()))
        {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "raw material {} is already associated with product {}",
                association.raw_material_id(),
                association.product_id()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(association.clone());
                Ok(())
            }
        }
    }

    async fn update(&self, association: &Association) -> AppResult<()> {
        let mut state = self.state.write().await;
        match state
            .associations
            .get_mut(&(*association.product_id(), *association.raw_material_id()))
        {
            Some(row) => {
                *row = association.clone();
                Ok(())
            }
            None => Err(AppError::not_found(format!(
                "raw material {} is not associated with product {}",
                association.raw_material_id(),
                association.product_id()
            ))),
        }
    }

    async fn delete(
        &self,
        product_id: &ProductId,
        raw_material_id: &RawMaterialId,
    ) -> AppResult<bool> {
        let mut state = self.state.write().await;
        Ok(state
            .associations
            .remove(&(*product_id, *raw_material_id))
            .is_some())
    }
}

#[async_trait]
impl InventorySnapshotSource for InMemoryInventoryStore {
    async fn snapshot(&self) -> AppResult<InventorySnapshot> {
        let state = self.state.read().await;
        Ok(InventorySnapshot::new(
            state.products.values().cloned().collect(),
            state.raw_materials.values().cloned().collect(),
            state.associations.values().cloned().collect(),
        ))
    }
}

#[async_trait]
impl ReadinessCheck for InMemoryInventoryStore {
    fn name(&self) -> &'static str {
        "inventory_store"
    }

    async fn check(&self) -> Result<Option<String>, String> {
        let state = self.state.read().await;
        Ok(Some(format!(
            "{} products, {} raw materials, {} associations",
            state.products.len(),
            state.raw_materials.len(),
            state.associations.len()
        )))
    }
}
