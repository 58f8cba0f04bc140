//! Custom error types for shopbooks
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Report export has its own error type so
//! callers can tell a failed workbook apart from a failed lookup.

use thiserror::Error;

/// The main error type for shopbooks operations
#[derive(Error, Debug)]
pub enum ShopbooksError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for record input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found (or owned by someone else)
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// Failure while building or writing the spreadsheet report
#[derive(Error, Debug)]
pub enum ExportError {
    /// The workbook library rejected a cell, format or the final serialization
    #[error("workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// The finished report could not be written out
    #[error("failed to write {path}: {message}")]
    Io { path: String, message: String },
}

impl ShopbooksError {
    /// Create a "not found" error for cost records
    pub fn cost_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Cost",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for revenue records
    pub fn revenue_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Revenue",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for ingredients
    pub fn ingredient_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Ingredient",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a report export error
    pub fn is_export(&self) -> bool {
        matches!(self, Self::Export(_))
    }
}

impl From<std::io::Error> for ShopbooksError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ShopbooksError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for shopbooks operations
pub type ShopbooksResult<T> = Result<T, ShopbooksError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShopbooksError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = ShopbooksError::cost_not_found("cst-1234abcd");
        assert_eq!(err.to_string(), "Cost not found: cst-1234abcd");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_export_error_is_distinguishable() {
        let err: ShopbooksError = ExportError::Io {
            path: "BaoCaoDoanhThu.xlsx".into(),
            message: "disk full".into(),
        }
        .into();
        assert!(err.is_export());
        assert_eq!(
            err.to_string(),
            "Export error: failed to write BaoCaoDoanhThu.xlsx: disk full"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ShopbooksError = io_err.into();
        assert!(matches!(err, ShopbooksError::Io(_)));
    }
}
