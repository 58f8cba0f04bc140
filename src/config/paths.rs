//! Path management for shopbooks
//!
//! ## Path Resolution Order
//!
//! 1. `SHOPBOOKS_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/shopbooks` on Linux, `%APPDATA%\shopbooks` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ShopbooksError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SHOPBOOKS_DATA_DIR";

/// Manages all paths used by shopbooks
#[derive(Debug, Clone)]
pub struct ShopbooksPaths {
    /// Base directory for all shopbooks data
    base_dir: PathBuf,
}

impl ShopbooksPaths {
    /// Create a new ShopbooksPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined.
    pub fn new() -> Result<Self, ShopbooksError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ShopbooksPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to costs.json
    pub fn costs_file(&self) -> PathBuf {
        self.data_dir().join("costs.json")
    }

    /// Get the path to revenues.json
    pub fn revenues_file(&self) -> PathBuf {
        self.data_dir().join("revenues.json")
    }

    /// Get the path to ingredients.json
    pub fn ingredients_file(&self) -> PathBuf {
        self.data_dir().join("ingredients.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ShopbooksError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ShopbooksError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ShopbooksError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if shopbooks has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, ShopbooksError> {
    ProjectDirs::from("", "", "shopbooks")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ShopbooksError::Config("Could not determine a config directory".into()))
}
