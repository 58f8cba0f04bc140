//! Common view over dated, priced ledger records
//!
//! Cost and revenue records share the fields the period filter and the
//! aggregator need. Numeric fields are optional in storage; readers go
//! through the zero-defaulting accessors.

/// Coalesce a stored amount: missing or NaN reads as zero
pub fn amount_or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}

/// A record with an optional ISO date and optional price/quantity
pub trait LedgerRecord {
    /// ISO `YYYY-MM-DD` date, if the record has one
    fn date(&self) -> Option<&str>;

    /// Raw stored price
    fn price(&self) -> Option<f64>;

    /// Raw stored quantity
    fn quantity(&self) -> Option<f64>;

    /// Label shown in listings and reports
    fn label(&self) -> &str;

    fn price_or_zero(&self) -> f64 {
        amount_or_zero(self.price())
    }

    fn quantity_or_zero(&self) -> f64 {
        amount_or_zero(self.quantity())
    }

    /// `YYYY-MM` prefix of the date (first 7 characters)
    fn month(&self) -> Option<&str> {
        self.date().map(first_seven_chars)
    }
}

fn first_seven_chars(s: &str) -> &str {
    match s.char_indices().nth(7) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
