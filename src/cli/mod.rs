//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Every handler runs
//! against a [`RecordStore`](crate::storage::RecordStore) on behalf of an
//! explicit [`OwnerContext`](crate::models::OwnerContext).

pub mod cost;
pub mod ingredient;
pub mod report;
pub mod revenue;

pub use cost::{handle_cost_command, CostCommands};
pub use ingredient::{handle_ingredient_command, IngredientCommands};
pub use report::{handle_report_command, ReportCommands};
pub use revenue::{handle_revenue_command, RevenueCommands};

use crate::config::Settings;
use crate::error::{ShopbooksError, ShopbooksResult};
use crate::models::OwnerContext;

/// Environment variable naming the owner
pub const OWNER_ENV: &str = "SHOPBOOKS_OWNER";

/// Resolve the owner from `--owner` (or its env var), then settings
pub fn resolve_owner(flag: Option<&str>, settings: &Settings) -> ShopbooksResult<OwnerContext> {
    OwnerContext::resolve([flag, settings.default_owner.as_deref()]).ok_or_else(|| {
        ShopbooksError::Config(format!(
            "No owner given. Pass --owner, set {}, or set default_owner in config.json",
            OWNER_ENV
        ))
    })
}

/// Today's local date as `YYYY-MM-DD`
pub(crate) fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_owner_prefers_flag() {
        let settings = Settings {
            default_owner: Some("configured".to_string()),
            ..Settings::default()
        };
        let owner = resolve_owner(Some("flag"), &settings).unwrap();
        assert_eq!(owner.owner_id().as_str(), "flag");

        let owner = resolve_owner(Some("  "), &settings).unwrap();
        assert_eq!(owner.owner_id().as_str(), "configured");
    }

    #[test]
    fn test_missing_owner_is_config_error() {
        let err = resolve_owner(None, &Settings::default()).unwrap_err();
        assert!(matches!(err, ShopbooksError::Config(_)));
    }

    #[test]
    fn test_today_is_iso_date() {
        assert_eq!(today().len(), 10);
    }
}
