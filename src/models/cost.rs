//! Ingredient cost record
//!
//! One purchase of an ingredient. Quantity and price are kept optional so
//! records written by older clients with missing fields still load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CostId;
use super::owner::OwnerId;
use super::record::LedgerRecord;

/// An ingredient cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    /// Unique identifier
    pub id: CostId,

    /// Owner of the record
    pub owner_id: OwnerId,

    /// Ingredient label
    #[serde(default)]
    pub name: String,

    /// Purchased quantity
    #[serde(default)]
    pub quantity: Option<f64>,

    /// Amount paid
    #[serde(default)]
    pub price: Option<f64>,

    /// Purchase date (`YYYY-MM-DD`)
    #[serde(default)]
    pub date: Option<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl CostRecord {
    /// Create a new cost record with a fresh ID
    pub fn new(
        owner_id: OwnerId,
        name: impl Into<String>,
        quantity: f64,
        price: f64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: CostId::new(),
            owner_id,
            name: name.into(),
            quantity: Some(quantity),
            price: Some(price),
            date: Some(date.into()),
            created_at: Utc::now(),
        }
    }
}

impl LedgerRecord for CostRecord {
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
        &self.name
    }
}

impl fmt::Display for CostRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.as_deref().unwrap_or("-"),
            self.name,
            self.price_or_zero()
        )
    }
}
