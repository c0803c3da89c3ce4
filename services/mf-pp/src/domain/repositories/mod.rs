//! 仓储接口模块

mod association_repository;
mod inventory_snapshot_source;
mod product_repository;
mod raw_material_repository;

pub use association_repository::AssociationRepository;
pub use inventory_snapshot_source::InventorySnapshotSource;
pub use product_repository::ProductRepository;
pub use raw_material_repository::RawMaterialRepository;

#[cfg(test)]
pub use association_repository::MockAssociationRepository;
#[cfg(test)]
pub use inventory_snapshot_source::MockInventorySnapshotSource;
#[cfg(test)]
pub use product_repository::MockProductRepository;
#[cfg(test)]
pub use raw_material_repository::MockRawMaterialRepository;
