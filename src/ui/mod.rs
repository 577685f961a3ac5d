//! Presentation-facing projections.
//!
//! The storefront does no rendering of its own. This layer turns snapshots into
//! display-ready view models that any presentation layer can draw.
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types computed from a `ViewState`

pub mod viewmodel;

pub use viewmodel::{
    CategoryItem, EmptyState, HeaderInfo, HomeViewModel, ProductCard, MAX_VISIBLE_CATEGORIES,
};
