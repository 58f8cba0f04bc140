//! User settings for shopbooks
//!
//! Holds the tax rate, report formatting preferences and the default owner
//! used when no `--owner` is given on the command line.

use serde::{Deserialize, Serialize};

use super::paths::ShopbooksPaths;
use crate::error::ShopbooksError;
use crate::services::aggregate::DEFAULT_VAT_RATE;

/// User settings for shopbooks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// VAT rate applied to total revenue (0.10 = 10%)
    #[serde(default = "default_vat_rate")]
    pub vat_rate: f64,

    /// Suffix appended to formatted amounts (e.g. " đ")
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,

    /// Digit group separator for formatted amounts
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,

    /// Date format for report rows (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// File name of the exported report
    #[serde(default = "default_report_filename")]
    pub report_filename: String,

    /// Owner used when none is passed explicitly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_owner: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_vat_rate() -> f64 {
    DEFAULT_VAT_RATE
}

fn default_currency_suffix() -> String {
    " đ".to_string()
}

fn default_thousands_separator() -> String {
    ".".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_report_filename() -> String {
    crate::export::REPORT_FILENAME.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            vat_rate: default_vat_rate(),
            currency_suffix: default_currency_suffix(),
            thousands_separator: default_thousands_separator(),
            date_format: default_date_format(),
            report_filename: default_report_filename(),
            default_owner: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ShopbooksPaths) -> Result<Self, ShopbooksError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ShopbooksError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ShopbooksError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ShopbooksPaths) -> Result<(), ShopbooksError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ShopbooksError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            ShopbooksError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject values the report pipeline cannot work with
    pub fn validate(&self) -> Result<(), ShopbooksError> {
        if !self.vat_rate.is_finite() || self.vat_rate < 0.0 {
            return Err(ShopbooksError::Config(format!(
                "vat_rate must be a non-negative number, got {}",
                self.vat_rate
            )));
        }
        if self.report_filename.trim().is_empty() {
            return Err(ShopbooksError::Config("report_filename cannot be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.vat_rate, 0.10);
        assert_eq!(settings.currency_suffix, " đ");
        assert_eq!(settings.report_filename, "BaoCaoDoanhThu.xlsx");
        assert!(settings.default_owner.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShopbooksPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.vat_rate = 0.08;
        settings.default_owner = Some("owner-1".into());

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.vat_rate, 0.08);
        assert_eq!(loaded.default_owner.as_deref(), Some("owner-1"));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShopbooksPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"vat_rate": 0.05}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.vat_rate, 0.05);
        assert_eq!(loaded.date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_negative_rate_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShopbooksPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"vat_rate": -1.0}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ShopbooksError::Config(_)));
    }
}
