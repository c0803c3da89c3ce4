//! 库存快照来源

use async_trait::async_trait;
use stockplan_errors::AppResult;

use crate::domain::inventory::InventorySnapshot;

/// 一致性库存快照
///
/// 三类数据在同一时刻读取，返回后归调用方所有，之后的写入不影响它
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventorySnapshotSource: Send + Sync {
    async fn snapshot(&self) -> AppResult<InventorySnapshot>;
}
