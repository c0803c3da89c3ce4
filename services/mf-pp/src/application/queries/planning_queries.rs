//! Planning queries

/// 生产建议查询
///
/// 每次查询基于当时的库存快照重新计算
#[derive(Debug, Clone, Default)]
pub struct GetProductionSuggestionsQuery;
