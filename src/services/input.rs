//! Record input and field validation shared by the cost and revenue services

use chrono::NaiveDate;

use crate::error::{ShopbooksError, ShopbooksResult};
use crate::storage::Stored;

/// Fields entered for a new cost or revenue record
#[derive(Debug, Clone, PartialEq)]
pub struct RecordInput {
    /// Ingredient name for costs, item name for revenues
    pub label: String,
    pub quantity: f64,
    pub price: f64,
    /// `YYYY-MM-DD`
    pub date: String,
}

/// Changes to an existing record; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordUpdate {
    pub label: Option<String>,
    pub quantity: Option<f64>,
    pub price: Option<f64>,
    pub date: Option<String>,
}

impl RecordUpdate {
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.quantity.is_none() && self.price.is_none() && self.date.is_none()
    }
}

/// Which amounts a record kind accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AmountRule {
    /// Zero allowed
    NonNegative,
    /// Must be greater than zero
    Positive,
}

pub(crate) fn require_text(field: &str, value: &str) -> ShopbooksResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ShopbooksError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Accept only a 10-character calendar date `YYYY-MM-DD`
pub(crate) fn require_date(value: &str) -> ShopbooksResult<String> {
    let trimmed = value.trim();
    if trimmed.len() != 10 || NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_err() {
        return Err(ShopbooksError::Validation(format!(
            "Invalid date '{}': expected YYYY-MM-DD",
            value
        )));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn require_amount(field: &str, value: f64, rule: AmountRule) -> ShopbooksResult<f64> {
    if !value.is_finite() {
        return Err(ShopbooksError::Validation(format!("{} must be a number", field)));
    }
    match rule {
        AmountRule::NonNegative if value < 0.0 => Err(ShopbooksError::Validation(format!(
            "{} cannot be negative",
            field
        ))),
        AmountRule::Positive if value <= 0.0 => Err(ShopbooksError::Validation(format!(
            "{} must be greater than zero",
            field
        ))),
        _ => Ok(value),
    }
}

/// Validate a full input and return it normalized
pub(crate) fn validate_input(
    input: &RecordInput,
    label_field: &str,
    rule: AmountRule,
) -> ShopbooksResult<RecordInput> {
    Ok(RecordInput {
        label: require_text(label_field, &input.label)?,
        quantity: require_amount("Quantity", input.quantity, rule)?,
        price: require_amount("Price", input.price, rule)?,
        date: require_date(&input.date)?,
    })
}

/// Reduce reference matches to exactly one record
pub(crate) fn single_match<T: Stored>(
    mut matches: Vec<T>,
    reference: &str,
    not_found: fn(String) -> ShopbooksError,
) -> ShopbooksResult<T> {
    match matches.len() {
        0 => Err(not_found(reference.to_string())),
        1 => Ok(matches.remove(0)),
        n => Err(ShopbooksError::Validation(format!(
            "'{}' matches {} {} records; use a longer ID",
            reference,
            n,
            T::ENTITY.to_lowercase()
        ))),
    }
}
