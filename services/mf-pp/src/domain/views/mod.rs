//! 视图模块

mod product_raw_material;

pub use product_raw_material::ProductRawMaterialView;
