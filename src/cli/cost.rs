//! Cost CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_cost_list, CurrencyFormat};
use crate::error::ShopbooksResult;
use crate::models::{LedgerRecord, OwnerContext};
use crate::services::{CostService, MonthFilter, RecordInput, RecordUpdate};
use crate::storage::RecordStore;

use super::today;

/// Cost subcommands
#[derive(Subcommand)]
pub enum CostCommands {
    /// Record an ingredient purchase
    Add {
        /// Ingredient name
        name: String,
        /// Quantity bought
        #[arg(short, long)]
        quantity: f64,
        /// Amount paid
        #[arg(short, long)]
        price: f64,
        /// Purchase date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List costs, newest first
    List {
        /// Only show this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Change fields of a cost
    Edit {
        /// Cost ID (e.g. cst-1a2b3c4d)
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        quantity: Option<f64>,
        #[arg(short, long)]
        price: Option<f64>,
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a cost
    Delete {
        /// Cost ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a cost command
pub fn handle_cost_command(
    store: &dyn RecordStore,
    owner: &OwnerContext,
    settings: &Settings,
    cmd: CostCommands,
) -> ShopbooksResult<()> {
    let service = CostService::new(store, owner);
    let currency = CurrencyFormat::from_settings(settings);

    match cmd {
        CostCommands::Add {
            name,
            quantity,
            price,
            date,
        } => {
            let cost = service.create(&RecordInput {
                label: name,
                quantity,
                price,
                date: date.unwrap_or_else(today),
            })?;
            println!(
                "Added cost {}: {} {}",
                cost.id,
                cost.name,
                currency.format(cost.price_or_zero())
            );
        }

        CostCommands::List { month } => {
            let filter = MonthFilter::parse(month.as_deref().unwrap_or(""))?;
            let costs = service.list_for(&filter)?;
            println!("{}", format_cost_list(&costs, &currency, &settings.date_format));
        }

        CostCommands::Edit {
            id,
            name,
            quantity,
            price,
            date,
        } => {
            let changes = RecordUpdate {
                label: name,
                quantity,
                price,
                date,
            };
            if changes.is_empty() {
                println!("Nothing to change. Pass --name, --quantity, --price or --date.");
                return Ok(());
            }
            let cost = service.update(&id, &changes)?;
            println!("Updated cost {}: {}", cost.id, cost);
        }

        CostCommands::Delete { id, yes } => {
            let cost = service.find(&id)?;
            if !yes {
                println!("About to delete cost {}: {}", cost.id, cost);
                println!("Use --yes to confirm deletion");
                return Ok(());
            }
            let deleted = service.delete(&id)?;
            println!("Deleted cost {}", deleted.id);
        }
    }

    Ok(())
}
