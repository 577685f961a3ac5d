//! Domain layer for the storefront.
//!
//! Core value types with no dependency on the store, the search engine or any
//! presentation concern.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`product`]: Product record and its stable identifier
//! - [`category`]: Browsing categories and search filter chips

pub mod category;
pub mod error;
pub mod product;

pub use category::{Category, FilterChip};
pub use error::{Result, ShopfrontError};
pub use product::{Product, ProductId, StarBreakdown, MAX_STARS};
