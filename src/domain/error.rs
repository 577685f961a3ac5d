//! Error types for the storefront crate.
//!
//! This module defines the centralized error type [`ShopfrontError`] and a type alias
//! [`Result`] for convenient error handling. Catalog operations themselves are total
//! and never fail; these errors come from the surrounding layers (configuration
//! loading, driver I/O and snapshot serialization).

use thiserror::Error;

/// The main error type for storefront operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]` for
/// automatic conversion.
///
/// # Examples
///
/// ```
/// use shopfront::ShopfrontError;
///
/// fn validate_config() -> Result<(), ShopfrontError> {
///     Err(ShopfrontError::Config("unknown filter_refresh value".to_string()))
/// }
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ShopfrontError {
    /// Configuration is invalid or missing.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML configuration file could not be parsed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A snapshot or view model could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for storefront operations.
pub type Result<T> = std::result::Result<T, ShopfrontError>;
