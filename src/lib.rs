//! Shopfront: view-state store for a single-screen storefront.
//!
//! Shopfront provides:
//! - A product catalog with wishlist and cart toggles
//! - Mutually exclusive home, wishlist, cart and search views
//! - Free-text and category-tag search over the full catalog
//! - One immutable snapshot published per event for any number of readers
//! - Display-ready view models for a presentation layer

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Line driver (main.rs)                              │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event reducer                                    │
//! │  - CatalogStore snapshot publication                │
//! │  - Search panel draft                               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Search (      │   │ Catalog       │
//! │ (ui/)         │   │ search/)      │   │ (catalog/)    │
//! │ - View models │   │ - Text filter │   │ - Seed data   │
//! │               │   │ - Tag table   │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): Product, Category, errors        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: View state, events, reducer and store
//! - [`catalog`]: Static seed catalog
//! - [`domain`]: Core domain types (Product, Category, errors)
//! - [`search`]: Text and category-tag filtering
//! - [`ui`]: View models for a presentation layer
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! ```toml
//! # shopfront.toml
//! trace_level = "debug"
//! filter_refresh = "matching-view"
//! ```
//!
//! # Example
//!
//! ```rust
//! use shopfront::{initialize, Config};
//!
//! let mut store = initialize(&Config::default());
//! let mut updates = store.subscribe();
//!
//! store.perform_search("", ["2"]);
//! let state = updates.borrow_and_update();
//! assert!(state.is_search_view());
//! assert_eq!(state.displayed_products().len(), 2);
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod search;
pub mod ui;

pub mod observability;

pub use app::{handle_event, CatalogStore, Event, FilterRefresh, SearchPanel, ViewMode, ViewState};
pub use domain::{Product, ProductId, Result, ShopfrontError};
pub use ui::HomeViewModel;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::Path;

/// Environment variable naming a TOML configuration file.
pub const CONFIG_ENV_VAR: &str = "SHOPFRONT_CONFIG";

/// Store and logging configuration.
///
/// # Example
///
/// ```toml
/// trace_level = "debug"
/// filter_refresh = "always"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// When the filtered list is recomputed after a toggle.
    ///
    /// Options: `always` (default), `matching-view`.
    pub filter_refresh: FilterRefresh,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `trace_level`: String → `Option<String>`
    /// - `filter_refresh`: `always` | `matching-view` (falls back to the default
    ///   on unknown values)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use shopfront::{Config, FilterRefresh};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("filter_refresh".to_string(), "matching-view".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.filter_refresh, FilterRefresh::MatchingView);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let filter_refresh = config
            .get("filter_refresh")
            .and_then(|value| {
                value
                    .parse::<FilterRefresh>()
                    .map_err(|e| tracing::debug!(error = %e, "using default filter refresh"))
                    .ok()
            })
            .unwrap_or_default();

        Self {
            trace_level: config.get("trace_level").cloned(),
            filter_refresh,
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for this
    /// structure (including unknown `filter_refresh` values).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading configuration file");

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        tracing::debug!(config = ?config, "configuration loaded");
        Ok(config)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], or the defaults if it is unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set but empty, or names a file that
    /// cannot be loaded.
    pub fn from_env() -> Result<Self> {
        Self::from_path_var(std::env::var_os(CONFIG_ENV_VAR))
    }

    fn from_path_var(value: Option<OsString>) -> Result<Self> {
        match value {
            Some(path) if path.is_empty() => Err(ShopfrontError::Config(format!(
                "{CONFIG_ENV_VAR} is set but empty"
            ))),
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Creates a store over the seed catalog.
///
/// # Example
///
/// ```rust
/// use shopfront::{initialize, Config};
///
/// let store = initialize(&Config::default());
/// assert_eq!(store.snapshot().products.len(), 7);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> CatalogStore {
    tracing::debug!(filter_refresh = ?config.filter_refresh, "initializing catalog store");
    CatalogStore::new(catalog::seed_products(), config.filter_refresh)
}
