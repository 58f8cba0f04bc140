//! Month-granularity period filter
//!
//! A record belongs to month `YYYY-MM` when the first seven characters of its
//! date equal that string. The comparison is textual; no calendar parsing
//! happens on stored dates.

use chrono::{Local, NaiveDate};
use std::fmt;

use crate::error::{ShopbooksError, ShopbooksResult};
use crate::models::LedgerRecord;

/// Keep the records dated in `month`
///
/// An empty `month` disables filtering and every record is returned in input
/// order, undated ones included. Any other value is compared as given, so
/// undated records are dropped.
pub fn filter_by_month<'a, R: LedgerRecord>(records: &'a [R], month: &str) -> Vec<&'a R> {
    if month.is_empty() {
        return records.iter().collect();
    }

    let kept: Vec<&R> = records
        .iter()
        .filter(|r| r.month() == Some(month))
        .collect();

    log::debug!(
        "month filter {}: kept {} of {} records",
        month,
        kept.len(),
        records.len()
    );
    kept
}

/// A validated month selection, or "all time"
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthFilter {
    month: Option<String>,
}

impl MonthFilter {
    /// No filtering
    pub fn all() -> Self {
        Self { month: None }
    }

    /// The current local month, used by the dashboard
    pub fn current() -> Self {
        Self {
            month: Some(Local::now().format("%Y-%m").to_string()),
        }
    }

    /// Parse `YYYY-MM`; an empty string means "all"
    pub fn parse(input: &str) -> ShopbooksResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Self::all());
        }

        let valid = input.len() == 7
            && NaiveDate::parse_from_str(&format!("{}-01", input), "%Y-%m-%d").is_ok();
        if !valid {
            return Err(ShopbooksError::Validation(format!(
                "Invalid month '{}': expected YYYY-MM",
                input
            )));
        }

        Ok(Self {
            month: Some(input.to_string()),
        })
    }

    /// `YYYY-MM`, or `""` when unfiltered
    pub fn as_str(&self) -> &str {
        self.month.as_deref().unwrap_or("")
    }

    pub fn is_all(&self) -> bool {
        self.month.is_none()
    }

    pub fn apply<'a, R: LedgerRecord>(&self, records: &'a [R]) -> Vec<&'a R> {
        filter_by_month(records, self.as_str())
    }
}

impl fmt::Display for MonthFilter {
    /// `MM/YYYY` for a month, `Tất cả` for everything
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month.as_deref().and_then(|m| m.split_once('-')) {
            Some((year, month)) => write!(f, "{}/{}", month, year),
            None => write!(f, "Tất cả"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostRecord, OwnerId};

    fn cost(name: &str, date: Option<&str>) -> CostRecord {
        let mut record = CostRecord::new(OwnerId::parse("uid-1").unwrap(), name, 1.0, 100.0, "");
        record.date = date.map(str::to_string);
        record
    }

    fn names(records: &[&CostRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_filter_keeps_matching_month() {
        let records = vec![
            cost("May", Some("2025-05-01")),
            cost("June", Some("2025-06-01")),
            cost("Late May", Some("2025-05-31")),
        ];

        let kept = filter_by_month(&records, "2025-05");
        assert_eq!(names(&kept), vec!["May", "Late May"]);
    }

    #[test]
    fn test_empty_month_returns_everything_in_order() {
        let records = vec![
            cost("a", Some("2025-05-01")),
            cost("b", None),
            cost("c", Some("2024-01-09")),
        ];

        assert_eq!(names(&filter_by_month(&records, "")), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_whitespace_month_is_an_active_filter() {
        let records = vec![cost("a", Some("2025-05-01")), cost("b", None)];
        assert!(filter_by_month(&records, "   ").is_empty());
        assert!(filter_by_month(&records, " 2025-05").is_empty());
    }

    #[test]
    fn test_undated_record_excluded_only_under_filter() {
        let records = vec![cost("undated", None)];
        assert!(filter_by_month(&records, "2025-05").is_empty());
        assert_eq!(filter_by_month(&records, "").len(), 1);
    }

    #[test]
    fn test_comparison_is_textual_prefix() {
        let records = vec![
            cost("timestamp", Some("2025-05-02T08:00:00Z")),
            cost("short", Some("2025-5-2")),
        ];

        assert_eq!(names(&filter_by_month(&records, "2025-05")), vec!["timestamp"]);
    }

    #[test]
    fn test_filter_with_no_match() {
        let records = vec![cost("a", Some("2025-05-01"))];
        assert!(filter_by_month(&records, "1999-12").is_empty());
    }

    #[test]
    fn test_month_filter_parse() {
        assert_eq!(MonthFilter::parse("2025-05").unwrap().as_str(), "2025-05");
        assert!(MonthFilter::parse("").unwrap().is_all());
        assert!(MonthFilter::parse("2025-13").is_err());
        assert!(MonthFilter::parse("2025-5").is_err());
        assert!(MonthFilter::parse("May 2025").is_err());
    }

    #[test]
    fn test_month_filter_current_is_valid() {
        let current = MonthFilter::current();
        assert!(MonthFilter::parse(current.as_str()).is_ok());
        assert!(!current.is_all());
    }

    #[test]
    fn test_month_filter_display() {
        assert_eq!(MonthFilter::parse("2025-05").unwrap().to_string(), "05/2025");
        assert_eq!(MonthFilter::all().to_string(), "Tất cả");
    }
}
