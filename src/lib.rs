//! shopbooks - cost and revenue bookkeeping for small food shops
//!
//! Records ingredient purchases and sales per owner, totals them by month
//! with VAT and profit, and exports the report as a styled Excel workbook.
//!
//! # Architecture
//!
//! - `models`: cost and revenue records, ingredient catalog, owner context
//! - `storage`: the `RecordStore` seam with JSON and in-memory backends
//! - `services`: period filter, aggregation and validated record operations
//! - `reports`: the monthly report behind the dashboard and the export
//! - `export`: spreadsheet layout and `.xlsx` rendering
//! - `audit`: append-only log of record changes
//! - `display`: currency formatting and terminal tables
//! - `cli`: command handlers for the `shopbooks` binary
//! - `config`, `error`: paths, settings and error types
//!
//! # Example
//!
//! ```rust,ignore
//! use shopbooks::models::{CostRecord, OwnerId, RevenueRecord};
//! use shopbooks::services::{filter_by_month, Totals, DEFAULT_VAT_RATE};
//!
//! let owner = OwnerId::parse("uid-1").unwrap();
//! let costs = vec![CostRecord::new(owner.clone(), "Flour", 1.0, 50000.0, "2025-05-01")];
//! let revenues = vec![RevenueRecord::new(owner, "Cake", 1.0, 200000.0, "2025-05-02")];
//!
//! let totals = Totals::compute(
//!     filter_by_month(&costs, "2025-05"),
//!     filter_by_month(&revenues, "2025-05"),
//!     DEFAULT_VAT_RATE,
//! );
//! assert_eq!(totals.profit, 130000.0);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExportError, ShopbooksError, ShopbooksResult};
