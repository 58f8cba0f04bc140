//! Service layer for shopbooks
//!
//! Pure period filtering and aggregation, plus owner-scoped, validated and
//! audited operations on top of a [`RecordStore`](crate::storage::RecordStore).

pub mod aggregate;
pub mod cost;
pub mod ingredient;
pub mod input;
pub mod period;
pub mod revenue;

pub use aggregate::{line_total, profit, total_cost, total_revenue, vat_tax, Totals, DEFAULT_VAT_RATE};
pub use cost::CostService;
pub use ingredient::{parse_unit_price, IngredientService, IngredientUpdate, ProductCosting};
pub use input::{RecordInput, RecordUpdate};
pub use period::{filter_by_month, MonthFilter};
pub use revenue::RevenueService;
