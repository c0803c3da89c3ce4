//! 实体模块

mod association;
mod product;
mod raw_material;

pub use association::Association;
pub use product::Product;
pub use raw_material::RawMaterial;
