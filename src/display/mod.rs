//! Display formatting for terminal output

pub mod format;
pub mod records;

pub use format::{format_date, format_quantity, CurrencyFormat};
pub use records::{format_cost_list, format_ingredient_list, format_product_costing, format_revenue_list};
