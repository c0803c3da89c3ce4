//! 物料清单仓储接口

use async_trait::async_trait;
use stockplan_errors::AppResult;

use crate::domain::entities::Association;
use crate::domain::value_objects::{ProductId, RawMaterialId};

/// 物料清单仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssociationRepository: Send + Sync {
    /// 查找单行
    async fn find(
        &self,
        product_id: &ProductId,
        raw_material_id: &RawMaterialId,
    ) -> AppResult<Option<Association>>;

    /// 某产品的全部物料清单行
    async fn list_by_product(&self, product_id: &ProductId) -> AppResult<Vec<Association>>;

    /// 新建一行
    ///
    /// 产品或原材料不存在时返回 NotFound，同一对已存在时返回 Conflict
    async fn insert(&self, association: &Association) -> AppResult<()>;

    /// 覆盖已有行，行已不存在时返回 NotFound
    async fn update(&self, association: &Association) -> AppResult<()>;

    /// 删除单行，返回是否存在
    async fn delete(
        &self,
        product_id: &ProductId,
        raw_material_id: &RawMaterialId,
    ) -> AppResult<bool>;
}
