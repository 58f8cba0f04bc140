//! Sales revenue record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RevenueId;
use super::owner::OwnerId;
use super::record::LedgerRecord;

/// A sale of a finished item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRecord {
    /// Unique identifier
    pub id: RevenueId,

    /// Owner of the record
    pub owner_id: OwnerId,

    /// Name of the item sold
    #[serde(default)]
    pub item_name: String,

    /// Units sold
    #[serde(default)]
    pub quantity: Option<f64>,

    /// Amount received
    #[serde(default)]
    pub price: Option<f64>,

    /// Sale date (`YYYY-MM-DD`)
    #[serde(default)]
    pub date: Option<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl RevenueRecord {
    /// Create a new revenue record with a fresh ID
    pub fn new(
        owner_id: OwnerId,
        item_name: impl Into<String>,
        quantity: f64,
        price: f64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: RevenueId::new(),
            owner_id,
            item_name: item_name.into(),
            quantity: Some(quantity),
            price: Some(price),
            date: Some(date.into()),
            created_at: Utc::now(),
        }
    }
}

impl LedgerRecord for RevenueRecord {
    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    fn price(&self) -> Option<f64> {
        self.price
    }

    fn quantity(&self) -> Option<f64> {
        self.quantity
    }

    fn label(&self) -> &str {
        &self.item_name
    }
}

impl fmt::Display for RevenueRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.as_deref().unwrap_or("-"),
            self.item_name,
            self.price_or_zero()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_revenue() {
        let owner = OwnerId::parse("uid-1").unwrap();
        let rev = RevenueRecord::new(owner, "Cake", 4.0, 200000.0, "2025-05-02");
        assert_eq!(rev.label(), "Cake");
        assert_eq!(rev.quantity_or_zero(), 4.0);
        assert_eq!(rev.month(), Some("2025-05"));
    }

    #[test]
    fn test_serialization() {
        let owner = OwnerId::parse("uid-1").unwrap();
        let rev = RevenueRecord::new(owner, "Cake", 1.0, 200000.0, "2025-05-02");
        let json = serde_json::to_string(&rev).unwrap();
        let back: RevenueRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(rev, back);
    }
}
