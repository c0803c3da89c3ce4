//! 原材料仓储接口

use async_trait::async_trait;
use stockplan_errors::AppResult;

use crate::domain::entities::RawMaterial;
use crate::domain::value_objects::RawMaterialId;

/// 原材料仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RawMaterialRepository: Send + Sync {
    /// 根据 ID 查找原材料
    async fn find_by_id(&self, id: &RawMaterialId) -> AppResult<Option<RawMaterial>>;

    /// 根据编码查找原材料
    async fn find_by_code(&self, code: &str) -> AppResult<Option<RawMaterial>>;

    /// 全部原材料，按编码排序
    async fn list(&self) -> AppResult<Vec<RawMaterial>>;

    /// 新建原材料，ID 或编码已存在时返回 Conflict
    async fn insert(&self, raw_material: &RawMaterial) -> AppResult<()>;

    /// 覆盖已有原材料
    ///
    /// 原材料已不存在时返回 NotFound，编码被其他原材料占用时返回 Conflict
    async fn update(&self, raw_material: &RawMaterial) -> AppResult<()>;

    /// 删除原材料及引用它的物料清单行，返回是否存在
    async fn delete(&self, id: &RawMaterialId) -> AppResult<bool>;
}
