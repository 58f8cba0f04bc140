//! Ingredient catalog CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_ingredient_list, format_product_costing, CurrencyFormat};
use crate::error::{ShopbooksError, ShopbooksResult};
use crate::models::OwnerContext;
use crate::services::{parse_unit_price, IngredientService, IngredientUpdate};
use crate::storage::RecordStore;

/// Ingredient subcommands
#[derive(Subcommand)]
pub enum IngredientCommands {
    /// Add an ingredient to the catalog
    Add {
        /// Ingredient name
        name: String,
        /// Unit, e.g. kg or box
        #[arg(short, long)]
        unit: String,
        /// Price per unit
        #[arg(short, long)]
        price: String,
    },
    /// List the catalog
    List,
    /// Change an ingredient
    Edit {
        /// Ingredient ID or name
        ingredient: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        unit: Option<String>,
        #[arg(short, long)]
        price: Option<String>,
    },
    /// Remove an ingredient from the catalog
    Delete {
        /// Ingredient ID or name
        ingredient: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Cost a product from the ingredients it uses
    Calc {
        /// Ingredient usage as NAME=QUANTITY, e.g. flour=0.5
        #[arg(required = true)]
        usage: Vec<String>,
    },
}

/// Split `name=quantity`
fn parse_usage(raw: &str) -> ShopbooksResult<(String, f64)> {
    let (name, quantity) = raw.rsplit_once('=').ok_or_else(|| {
        ShopbooksError::Validation(format!("Expected NAME=QUANTITY, got '{}'", raw))
    })?;
    let quantity: f64 = quantity.trim().parse().map_err(|_| {
        ShopbooksError::Validation(format!("Quantity '{}' is not a number", quantity))
    })?;
    Ok((name.trim().to_string(), quantity))
}

/// Handle an ingredient command
pub fn handle_ingredient_command(
    store: &dyn RecordStore,
    owner: &OwnerContext,
    settings: &Settings,
    cmd: IngredientCommands,
) -> ShopbooksResult<()> {
    let service = IngredientService::new(store, owner);
    let currency = CurrencyFormat::from_settings(settings);

    match cmd {
        IngredientCommands::Add { name, unit, price } => {
            let entry = service.create(&name, &unit, parse_unit_price(&price)?)?;
            println!(
                "Added ingredient {}: {} ({}/{})",
                entry.id,
                entry.name,
                currency.format(entry.price_per_unit),
                entry.unit
            );
        }

        IngredientCommands::List => {
            println!("{}", format_ingredient_list(&service.list()?, &currency));
        }

        IngredientCommands::Edit {
            ingredient,
            name,
            unit,
            price,
        } => {
            let changes = IngredientUpdate {
                name,
                unit,
                price_per_unit: price.as_deref().map(parse_unit_price).transpose()?,
            };
            let entry = service.update(&ingredient, &changes)?;
            println!("Updated ingredient {}: {}", entry.id, entry.name);
        }

        IngredientCommands::Delete { ingredient, yes } => {
            let entry = service.find(&ingredient)?;
            if !yes {
                println!("About to delete ingredient {}: {}", entry.id, entry.name);
                println!("Use --yes to confirm deletion");
                return Ok(());
            }
            let deleted = service.delete(&ingredient)?;
            println!("Deleted ingredient {}", deleted.id);
        }

        IngredientCommands::Calc { usage } => {
            let usage = usage
                .iter()
                .map(|raw| parse_usage(raw))
                .collect::<ShopbooksResult<Vec<_>>>()?;
            let costing = service.cost_product(&usage)?;
            println!("{}", format_product_costing(&costing, &currency));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_usage() {
        assert_eq!(parse_usage("flour=0.5").unwrap(), ("flour".to_string(), 0.5));
        assert_eq!(parse_usage("bột mì = 2").unwrap(), ("bột mì".to_string(), 2.0));
        assert!(parse_usage("flour").unwrap_err().is_validation());
        assert!(parse_usage("flour=lots").is_err());
    }
}
