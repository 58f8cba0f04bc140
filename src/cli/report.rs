//! Report CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::CurrencyFormat;
use crate::error::ShopbooksResult;
use crate::export::{save_report, ExportOptions};
use crate::models::OwnerContext;
use crate::reports::MonthlyReport;
use crate::services::MonthFilter;
use crate::storage::RecordStore;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show cost, revenue, VAT and profit totals
    Summary {
        /// Month to summarize (YYYY-MM), defaults to the current month
        #[arg(short, long, conflicts_with = "all")]
        month: Option<String>,
        /// Summarize all records
        #[arg(short, long)]
        all: bool,
    },
    /// Export the report as an Excel workbook
    Export {
        /// Month to export (YYYY-MM), defaults to all records
        #[arg(short, long)]
        month: Option<String>,
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
}

/// Handle a report command
pub fn handle_report_command(
    store: &dyn RecordStore,
    owner: &OwnerContext,
    settings: &Settings,
    cmd: ReportCommands,
) -> ShopbooksResult<()> {
    match cmd {
        ReportCommands::Summary { month, all } => {
            let period = match (month, all) {
                (_, true) => MonthFilter::all(),
                (Some(month), false) => MonthFilter::parse(&month)?,
                (None, false) => MonthFilter::current(),
            };
            let report = MonthlyReport::generate(store, owner, period, settings.vat_rate)?;
            print!(
                "{}",
                report.format_terminal(&CurrencyFormat::from_settings(settings))
            );
        }

        ReportCommands::Export { month, out } => {
            let period = MonthFilter::parse(month.as_deref().unwrap_or(""))?;
            let options = ExportOptions::from_settings(settings, &period);
            let report = MonthlyReport::generate(store, owner, period, settings.vat_rate)?;

            if report.is_empty() {
                log::warn!("exporting a report with no records for {}", report.period);
            }

            let path = save_report(&out, &report, &options)?;
            println!("Report written to {}", path.display());
        }
    }

    Ok(())
}
