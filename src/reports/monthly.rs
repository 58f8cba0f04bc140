//! Monthly cost and revenue report
//!
//! Loads the owner's records, narrows them to a month and computes the
//! totals. The dashboard prints it; the exporter turns it into a workbook.

use crate::display::format::CurrencyFormat;
use crate::error::ShopbooksResult;
use crate::models::{CostRecord, OwnerContext, RevenueRecord};
use crate::services::{MonthFilter, Totals};
use crate::storage::RecordStore;

/// Records and totals for one period
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub period: MonthFilter,
    /// Costs in the period, newest first
    pub costs: Vec<CostRecord>,
    /// Revenues in the period, newest first
    pub revenues: Vec<RevenueRecord>,
    pub totals: Totals,
}

impl MonthlyReport {
    /// Build the report for `owner` over `period`
    pub fn generate(
        store: &dyn RecordStore,
        owner: &OwnerContext,
        period: MonthFilter,
        vat_rate: f64,
    ) -> ShopbooksResult<Self> {
        let all_costs = store.fetch_costs(owner.owner_id())?;
        let all_revenues = store.fetch_revenues(owner.owner_id())?;

        let costs: Vec<CostRecord> = period.apply(&all_costs).into_iter().cloned().collect();
        let revenues: Vec<RevenueRecord> =
            period.apply(&all_revenues).into_iter().cloned().collect();

        let totals = Totals::compute(&costs, &revenues, vat_rate);

        log::debug!(
            "monthly report for {} ({}): {} costs, {} revenues",
            owner.owner_id(),
            period,
            costs.len(),
            revenues.len()
        );

        Ok(Self {
            period,
            costs,
            revenues,
            totals,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty() && self.revenues.is_empty()
    }

    /// Format the dashboard summary for terminal display
    pub fn format_terminal(&self, currency: &CurrencyFormat) -> String {
        let mut output = String::new();

        output.push_str(&format!("Report for {}\n", self.period));
        output.push_str(&"=".repeat(40));
        output.push('\n');

        let vat_label = format!("VAT ({}%):", format_rate(self.totals.vat_rate));
        let rows = [
            ("Total cost:", self.totals.total_cost),
            ("Total revenue:", self.totals.total_revenue),
            (vat_label.as_str(), self.totals.vat_tax),
        ];
        for (label, amount) in rows {
            output.push_str(&format!("{:<16}{:>24}\n", label, currency.format(amount)));
        }

        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<16}{:>24}\n",
            "Profit:",
            currency.format(self.totals.profit)
        ));
        output.push_str(&format!(
            "\n{} cost entries, {} revenue entries\n",
            self.costs.len(),
            self.revenues.len()
        ));

        output
    }
}

/// `0.1` -> `10`, `0.085` -> `8.5`
pub(crate) fn format_rate(rate: f64) -> String {
    let percent = (rate * 1000.0).round() / 10.0;
    if percent.fract() == 0.0 {
        format!("{:.0}", percent)
    } else {
        format!("{}", percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OwnerId;
    use crate::services::{CostService, RecordInput, RevenueService, DEFAULT_VAT_RATE};
    use crate::storage::MemoryStore;

    fn input(label: &str, price: f64, date: &str) -> RecordInput {
        RecordInput {
            label: label.to_string(),
            quantity: 1.0,
            price,
            date: date.to_string(),
        }
    }

    fn seeded_store(owner: &OwnerContext) -> MemoryStore {
        let store = MemoryStore::new();
        let costs = CostService::new(&store, owner);
        costs.create(&input("Flour", 50000.0, "2025-05-01")).unwrap();
        costs.create(&input("Sugar", 90000.0, "2025-04-30")).unwrap();
        RevenueService::new(&store, owner)
            .create(&input("Cake", 200000.0, "2025-05-02"))
            .unwrap();
        store
    }

    #[test]
    fn test_generate_for_month() {
        let owner = OwnerContext::new(OwnerId::parse("uid-1").unwrap());
        let store = seeded_store(&owner);

        let report = MonthlyReport::generate(
            &store,
            &owner,
            MonthFilter::parse("2025-05").unwrap(),
            DEFAULT_VAT_RATE,
        )
        .unwrap();

        assert_eq!(report.costs.len(), 1);
        assert_eq!(report.revenues.len(), 1);
        assert_eq!(report.totals.total_cost, 50000.0);
        assert_eq!(report.totals.total_revenue, 200000.0);
        assert_eq!(report.totals.vat_tax, 20000.0);
        assert_eq!(report.totals.profit, 130000.0);
    }

    #[test]
    fn test_all_time_and_other_owner() {
        let owner = OwnerContext::new(OwnerId::parse("uid-1").unwrap());
        let store = seeded_store(&owner);

        let all = MonthlyReport::generate(&store, &owner, MonthFilter::all(), DEFAULT_VAT_RATE).unwrap();
        assert_eq!(all.totals.total_cost, 140000.0);

        let stranger = OwnerContext::new(OwnerId::parse("uid-2").unwrap());
        let empty =
            MonthlyReport::generate(&store, &stranger, MonthFilter::all(), DEFAULT_VAT_RATE).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.totals.profit, 0.0);
    }

    #[test]
    fn test_format_terminal() {
        let owner = OwnerContext::new(OwnerId::parse("uid-1").unwrap());
        let store = seeded_store(&owner);
        let report = MonthlyReport::generate(
            &store,
            &owner,
            MonthFilter::parse("2025-05").unwrap(),
            DEFAULT_VAT_RATE,
        )
        .unwrap();

        let output = report.format_terminal(&CurrencyFormat::default());
        assert!(output.contains("Report for 05/2025"));
        assert!(output.contains("VAT (10%):"));
        assert!(output.contains("200.000 đ"));
        assert!(output.contains("130.000 đ"));
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(0.10), "10");
        assert_eq!(format_rate(0.085), "8.5");
        assert_eq!(format_rate(0.0), "0");
    }
}
