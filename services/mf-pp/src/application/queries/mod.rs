//! Queries module

pub mod inventory_queries;
pub mod planning_queries;

pub use inventory_queries::*;
pub use planning_queries::*;
