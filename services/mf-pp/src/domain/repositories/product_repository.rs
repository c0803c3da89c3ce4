//! 产品仓储接口

use async_trait::async_trait;
use stockplan_errors::AppResult;

use crate::domain::entities::Product;
use crate::domain::value_objects::ProductId;

/// 产品仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 根据 ID 查找产品
    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>>;

    /// 根据编码查找产品
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Product>>;

    /// 全部产品，按编码排序
    async fn list(&self) -> AppResult<Vec<Product>>;

    /// 新建产品，ID 或编码已存在时返回 Conflict
    async fn insert(&self, product: &Product) -> AppResult<()>;

    /// 覆盖已有产品
    ///
    /// 产品已不存在时返回 NotFound，编码被其他产品占用时返回 Conflict
    async fn update(&self, product: &Product) -> AppResult<()>;

    /// 删除产品及其物料清单，返回是否存在
    async fn delete(&self, id: &ProductId) -> AppResult<bool>;
}
