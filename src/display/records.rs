//! Record listings for terminal output

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{CostRecord, IngredientCatalogEntry, LedgerRecord, RevenueRecord};
use crate::services::{line_total, total_cost, total_revenue, ProductCosting};

use super::format::{format_date, format_quantity, CurrencyFormat};

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Qty")]
    quantity: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Qty x Price")]
    line_total: String,
}

fn record_row<R: LedgerRecord>(
    id: String,
    record: &R,
    currency: &CurrencyFormat,
    date_format: &str,
) -> RecordRow {
    RecordRow {
        id,
        date: format_date(record.date(), date_format),
        name: record.label().to_string(),
        quantity: format_quantity(record.quantity_or_zero()),
        price: currency.format(record.price_or_zero()),
        line_total: currency.format(line_total(record)),
    }
}

fn render<T: Tabled>(rows: Vec<T>, numeric_from: usize) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(numeric_from..)).with(Alignment::right()))
        .to_string()
}

/// Table of cost records, with the price total underneath
pub fn format_cost_list(costs: &[CostRecord], currency: &CurrencyFormat, date_format: &str) -> String {
    if costs.is_empty() {
        return "No costs found.".to_string();
    }

    let rows: Vec<_> = costs
        .iter()
        .map(|c| record_row(c.id.to_string(), c, currency, date_format))
        .collect();
    let total = total_cost(costs);

    format!(
        "{}\n{} entries, total cost {}",
        render(rows, 3),
        costs.len(),
        currency.format(total)
    )
}

/// Table of revenue records, with the price total underneath
pub fn format_revenue_list(
    revenues: &[RevenueRecord],
    currency: &CurrencyFormat,
    date_format: &str,
) -> String {
    if revenues.is_empty() {
        return "No revenues found.".to_string();
    }

    let rows: Vec<_> = revenues
        .iter()
        .map(|r| record_row(r.id.to_string(), r, currency, date_format))
        .collect();
    let total = total_revenue(revenues);

    format!(
        "{}\n{} entries, total revenue {}",
        render(rows, 3),
        revenues.len(),
        currency.format(total)
    )
}

#[derive(Tabled)]
struct IngredientRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Price / unit")]
    price_per_unit: String,
}

pub fn format_ingredient_list(entries: &[IngredientCatalogEntry], currency: &CurrencyFormat) -> String {
    if entries.is_empty() {
        return "No ingredients found.".to_string();
    }

    let rows: Vec<_> = entries
        .iter()
        .map(|e| IngredientRow {
            id: e.id.to_string(),
            name: e.name.clone(),
            unit: e.unit.clone(),
            price_per_unit: currency.format(e.price_per_unit),
        })
        .collect();
    render(rows, 3)
}

#[derive(Tabled)]
struct CostingRow {
    #[tabled(rename = "Ingredient")]
    name: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Price / unit")]
    price_per_unit: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

/// Breakdown of a product's ingredient cost
pub fn format_product_costing(costing: &ProductCosting, currency: &CurrencyFormat) -> String {
    let rows: Vec<_> = costing
        .lines
        .iter()
        .map(|line| CostingRow {
            name: line.ingredient.name.clone(),
            used: format!(
                "{} {}",
                format_quantity(line.quantity_used),
                line.ingredient.unit
            ),
            price_per_unit: currency.format(line.ingredient.price_per_unit),
            cost: currency.format(line.cost()),
        })
        .collect();

    format!(
        "{}\nProduct cost: {}",
        render(rows, 1),
        currency.format(costing.total)
    )
}
