//! Catalog data source.
//!
//! The storefront has no persistence or network source; the catalog is a static
//! seed built in memory when the store is created.

pub mod seed;

pub use seed::{categories, filter_chips, seed_products};
