//! Reports for shopbooks
//!
//! The monthly report drives both the terminal dashboard and the exported
//! spreadsheet.

pub mod monthly;

pub use monthly::MonthlyReport;
