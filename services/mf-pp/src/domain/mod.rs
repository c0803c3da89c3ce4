//! 领域层
//!
//! 实体、值对象、仓储接口、库存快照以及生产建议计算

pub mod entities;
pub mod inventory;
pub mod repositories;
pub mod services;
pub mod value_objects;
pub mod views;

pub use entities::*;
pub use inventory::*;
pub use repositories::*;
pub use services::*;
pub use value_objects::*;
pub use views::*;
