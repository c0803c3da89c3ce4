//! 基础设施层

pub mod observability;
pub mod persistence;
pub mod seed;

pub use persistence::InMemoryInventoryStore;
pub use seed::load_seed;
