//! Cost, revenue, VAT and profit totals
//!
//! Totals sum the stored `price` of each record. Quantity is not multiplied
//! in: `price` is the line amount as entered. Missing or NaN prices count as
//! zero.

use serde::Serialize;

use crate::models::LedgerRecord;

/// Flat VAT rate applied to total revenue
pub const DEFAULT_VAT_RATE: f64 = 0.10;

fn sum_prices<'a, R, I>(records: I) -> f64
where
    R: LedgerRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records.into_iter().map(LedgerRecord::price_or_zero).sum()
}

/// Sum of cost prices
pub fn total_cost<'a, R, I>(costs: I) -> f64
where
    R: LedgerRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    sum_prices(costs)
}

/// Sum of revenue prices
pub fn total_revenue<'a, R, I>(revenues: I) -> f64
where
    R: LedgerRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    sum_prices(revenues)
}

pub fn vat_tax(total_revenue: f64, rate: f64) -> f64 {
    total_revenue * rate
}

pub fn profit(total_revenue: f64, total_cost: f64, vat_tax: f64) -> f64 {
    total_revenue - total_cost - vat_tax
}

/// `quantity * price` for one record
///
/// Shown as an informational column in listings; never part of [`Totals`].
pub fn line_total<R: LedgerRecord>(record: &R) -> f64 {
    record.quantity_or_zero() * record.price_or_zero()
}

/// The four figures shown on the dashboard and in the exported report
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub total_cost: f64,
    pub total_revenue: f64,
    pub vat_rate: f64,
    pub vat_tax: f64,
    pub profit: f64,
}

impl Totals {
    pub fn compute<'a, C, R, IC, IR>(costs: IC, revenues: IR, vat_rate: f64) -> Self
    where
        C: LedgerRecord + 'a,
        R: LedgerRecord + 'a,
        IC: IntoIterator<Item = &'a C>,
        IR: IntoIterator<Item = &'a R>,
    {
        let total_cost = total_cost(costs);
        let total_revenue = total_revenue(revenues);
        let vat_tax = vat_tax(total_revenue, vat_rate);
        let totals = Self {
            total_cost,
            total_revenue,
            vat_rate,
            vat_tax,
            profit: profit(total_revenue, total_cost, vat_tax),
        };

        log::debug!("computed totals: {:?}", totals);
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostRecord, OwnerId, RevenueRecord};
    use crate::services::period::filter_by_month;

    fn owner() -> OwnerId {
        OwnerId::parse("uid-1").unwrap()
    }

    fn cost(price: Option<f64>) -> CostRecord {
        let mut record = CostRecord::new(owner(), "Flour", 1.0, 0.0, "2025-05-01");
        record.price = price;
        record
    }

    #[test]
    fn test_empty_totals_are_zero() {
        let none: Vec<CostRecord> = Vec::new();
        assert_eq!(total_cost(&none), 0.0);
        assert_eq!(total_revenue(Vec::<&RevenueRecord>::new()), 0.0);
    }

    #[test]
    fn test_total_cost_sums_prices() {
        let costs = vec![cost(Some(100.0)), cost(Some(200.0))];
        assert_eq!(total_cost(&costs), 300.0);
    }

    #[test]
    fn test_missing_price_adds_zero() {
        let costs = vec![cost(Some(100.0)), cost(None), cost(Some(f64::NAN))];
        assert_eq!(total_cost(&costs), 100.0);
    }

    #[test]
    fn test_vat_and_profit() {
        assert_eq!(vat_tax(1000.0, DEFAULT_VAT_RATE), 100.0);
        assert_eq!(profit(1000.0, 300.0, 100.0), 600.0);
        assert_eq!(profit(0.0, 500.0, 0.0), -500.0);
    }

    #[test]
    fn test_quantity_is_not_multiplied_into_totals() {
        let revenues = vec![RevenueRecord::new(owner(), "Cake", 3.0, 10.0, "2025-05-02")];
        assert_eq!(total_revenue(&revenues), 10.0);
        assert_eq!(line_total(&revenues[0]), 30.0);
    }

    #[test]
    fn test_totals_are_idempotent() {
        let costs = vec![cost(Some(12.5)), cost(Some(7.5))];
        let revenues = vec![RevenueRecord::new(owner(), "Cake", 1.0, 99.0, "2025-05-02")];

        let first = Totals::compute(&costs, &revenues, DEFAULT_VAT_RATE);
        let second = Totals::compute(&costs, &revenues, DEFAULT_VAT_RATE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_monthly_scenario() {
        let costs = vec![
            CostRecord::new(owner(), "Flour", 1.0, 50000.0, "2025-05-01"),
            CostRecord::new(owner(), "Sugar", 1.0, 90000.0, "2025-04-28"),
        ];
        let revenues = vec![RevenueRecord::new(owner(), "Cake", 1.0, 200000.0, "2025-05-02")];

        let totals = Totals::compute(
            filter_by_month(&costs, "2025-05"),
            filter_by_month(&revenues, "2025-05"),
            DEFAULT_VAT_RATE,
        );

        assert_eq!(totals.total_cost, 50000.0);
        assert_eq!(totals.total_revenue, 200000.0);
        assert_eq!(totals.vat_tax, 20000.0);
        assert_eq!(totals.profit, 130000.0);
    }
}
