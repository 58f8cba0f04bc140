//! Core data models for shopbooks
//!
//! Cost and revenue records, the ingredient catalog, typed IDs and the owner
//! context every query is scoped by.

pub mod cost;
pub mod ids;
pub mod ingredient;
pub mod owner;
pub mod record;
pub mod revenue;

pub use cost::CostRecord;
pub use ids::{CostId, IngredientId, RevenueId};
pub use ingredient::{product_cost, IngredientCatalogEntry, ProductCostLine};
pub use owner::{OwnerContext, OwnerId};
pub use record::{amount_or_zero, LedgerRecord};
pub use revenue::RevenueRecord;
