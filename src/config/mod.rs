//! Configuration module for shopbooks
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence (tax rate, report formatting, default owner)

pub mod paths;
pub mod settings;

pub use paths::ShopbooksPaths;
pub use settings::Settings;
