//! domain-core - 跨模块共享的领域核心类型
//!
//! 定点数量、金额、审计信息以及实体 trait

mod audit;
pub mod decimal_serde;
mod entity;
mod money;
mod quantity;

pub use audit::*;
pub use entity::*;
pub use money::*;
pub use quantity::*;

pub use rust_decimal::{Decimal, RoundingStrategy};
