//! Revenue CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_revenue_list, CurrencyFormat};
use crate::error::ShopbooksResult;
use crate::models::{LedgerRecord, OwnerContext};
use crate::services::{MonthFilter, RecordInput, RecordUpdate, RevenueService};
use crate::storage::RecordStore;

use super::today;

/// Revenue subcommands
#[derive(Subcommand)]
pub enum RevenueCommands {
    /// Record a sale
    Add {
        /// Item sold
        item: String,
        /// Units sold
        #[arg(short, long)]
        quantity: f64,
        /// Amount received
        #[arg(short, long)]
        price: f64,
        /// Sale date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List sales, newest first
    List {
        /// Only show this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Change fields of a sale
    Edit {
        /// Revenue ID (e.g. rev-1a2b3c4d)
        id: String,
        #[arg(short, long)]
        item: Option<String>,
        #[arg(short, long)]
        quantity: Option<f64>,
        #[arg(short, long)]
        price: Option<f64>,
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a sale
    Delete {
        /// Revenue ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a revenue command
pub fn handle_revenue_command(
    store: &dyn RecordStore,
    owner: &OwnerContext,
    settings: &Settings,
    cmd: RevenueCommands,
) -> ShopbooksResult<()> {
    let service = RevenueService::new(store, owner);
    let currency = CurrencyFormat::from_settings(settings);

    match cmd {
        RevenueCommands::Add {
            item,
            quantity,
            price,
            date,
        } => {
            let revenue = service.create(&RecordInput {
                label: item,
                quantity,
                price,
                date: date.unwrap_or_else(today),
            })?;
            println!(
                "Added revenue {}: {} {}",
                revenue.id,
                revenue.item_name,
                currency.format(revenue.price_or_zero())
            );
        }

        RevenueCommands::List { month } => {
            let filter = MonthFilter::parse(month.as_deref().unwrap_or(""))?;
            let revenues = service.list_for(&filter)?;
            println!(
                "{}",
                format_revenue_list(&revenues, &currency, &settings.date_format)
            );
        }

        RevenueCommands::Edit {
            id,
            item,
            quantity,
            price,
            date,
        } => {
            let changes = RecordUpdate {
                label: item,
                quantity,
                price,
                date,
            };
            if changes.is_empty() {
                println!("Nothing to change. Pass --item, --quantity, --price or --date.");
                return Ok(());
            }
            let revenue = service.update(&id, &changes)?;
            println!("Updated revenue {}: {}", revenue.id, revenue);
        }

        RevenueCommands::Delete { id, yes } => {
            let revenue = service.find(&id)?;
            if !yes {
                println!("About to delete revenue {}: {}", revenue.id, revenue);
                println!("Use --yes to confirm deletion");
                return Ok(());
            }
            let deleted = service.delete(&id)?;
            println!("Deleted revenue {}", deleted.id);
        }
    }

    Ok(())
}
