//! Spreadsheet export of the cost and revenue report
//!
//! The report is laid out as a [`ReportSheet`] first and then rendered to
//! `.xlsx` bytes. Writing the bytes to disk is a separate step.

pub mod layout;
pub mod xlsx;

pub use layout::{CellStyle, ReportSheet};

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::display::format::CurrencyFormat;
use crate::error::ExportError;
use crate::models::{CostRecord, RevenueRecord};
use crate::reports::MonthlyReport;
use crate::services::{MonthFilter, Totals};

/// Default file name of the exported report
pub const REPORT_FILENAME: &str = "BaoCaoDoanhThu.xlsx";

/// Content type of the exported report
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Presentation settings for an export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub currency: CurrencyFormat,
    /// strftime pattern for record dates
    pub date_format: String,
    /// Shown on the period line under the title
    pub period_label: String,
    pub filename: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            currency: CurrencyFormat::default(),
            date_format: "%d/%m/%Y".to_string(),
            period_label: MonthFilter::all().to_string(),
            filename: REPORT_FILENAME.to_string(),
        }
    }
}

impl ExportOptions {
    pub fn from_settings(settings: &Settings, period: &MonthFilter) -> Self {
        Self {
            currency: CurrencyFormat::from_settings(settings),
            date_format: settings.date_format.clone(),
            period_label: period.to_string(),
            filename: settings.report_filename.clone(),
        }
    }
}

/// Build the report workbook in memory
pub fn export_report(
    costs: &[CostRecord],
    revenues: &[RevenueRecord],
    totals: &Totals,
    options: &ExportOptions,
) -> Result<Vec<u8>, ExportError> {
    let sheet = ReportSheet::build(costs, revenues, totals, options);
    xlsx::render(&sheet)
}

/// Export a monthly report into `dir`, returning the written path
pub fn save_report(
    dir: &Path,
    report: &MonthlyReport,
    options: &ExportOptions,
) -> Result<PathBuf, ExportError> {
    let bytes = export_report(&report.costs, &report.revenues, &report.totals, options)?;

    let io_error = |path: &Path, e: std::io::Error| ExportError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;
    let path = dir.join(&options.filename);
    fs::write(&path, &bytes).map_err(|e| io_error(&path, e))?;

    log::info!(
        "exported report for {} to {} ({} bytes)",
        report.period,
        path.display(),
        bytes.len()
    );
    Ok(path)
}
