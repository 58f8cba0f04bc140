//! Amount and date formatting for reports and listings
//!
//! Amounts are whole Vietnamese đồng: rounded to no decimals, digits grouped
//! in threes with `.`, and a ` đ` suffix. Both the separator and the suffix
//! come from [`Settings`].

use chrono::NaiveDate;

use crate::config::Settings;

/// Number formatting preferences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub thousands_separator: String,
    pub suffix: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            thousands_separator: ".".to_string(),
            suffix: " đ".to_string(),
        }
    }
}

impl CurrencyFormat {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            thousands_separator: settings.thousands_separator.clone(),
            suffix: settings.currency_suffix.clone(),
        }
    }

    /// `1234567.6` -> `1.234.568 đ`
    pub fn format(&self, amount: f64) -> String {
        format!("{}{}", self.format_number(amount), self.suffix)
    }

    /// Grouped digits without the suffix
    pub fn format_number(&self, amount: f64) -> String {
        let amount = if amount.is_finite() { amount.round() } else { 0.0 };
        let digits = format!("{:.0}", amount.abs());

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.thousands_separator);
            }
            grouped.push(ch);
        }

        if amount < 0.0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }
}

/// Reformat an ISO `YYYY-MM-DD` date with a strftime pattern
///
/// Anything that does not parse is returned unchanged; a missing date is
/// empty.
pub fn format_date(date: Option<&str>, pattern: &str) -> String {
    match date {
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(parsed) => parsed.format(pattern).to_string(),
            Err(_) => {
                log::warn!("unparseable record date '{}', shown as stored", raw);
                raw.to_string()
            }
        },
        None => String::new(),
    }
}

/// Quantities print without a trailing `.0`
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{:.0}", quantity)
    } else {
        quantity.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(0.0), "0 đ");
        assert_eq!(fmt.format(999.0), "999 đ");
        assert_eq!(fmt.format(50000.0), "50.000 đ");
        assert_eq!(fmt.format(1234567.6), "1.234.568 đ");
        assert_eq!(fmt.format(-130000.0), "-130.000 đ");
    }

    #[test]
    fn test_custom_separator_and_suffix() {
        let fmt = CurrencyFormat {
            thousands_separator: ",".to_string(),
            suffix: " VND".to_string(),
        };
        assert_eq!(fmt.format(200000.0), "200,000 VND");
        assert_eq!(fmt.format_number(1000000.0), "1,000,000");
    }

    #[test]
    fn test_non_finite_formats_as_zero() {
        assert_eq!(CurrencyFormat::default().format(f64::NAN), "0 đ");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2025-05-01"), "%d/%m/%Y"), "01/05/2025");
        assert_eq!(format_date(Some("not a date"), "%d/%m/%Y"), "not a date");
        assert_eq!(format_date(None, "%d/%m/%Y"), "");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(format_quantity(0.5), "0.5");
    }
}
