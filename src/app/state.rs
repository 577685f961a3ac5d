//! Immutable view-state snapshot.
//!
//! This module defines [`ViewState`], the single snapshot the store publishes after
//! every event. A snapshot is never mutated once published; the reducer in
//! [`crate::app::handler`] builds the next one from the previous.
//!
//! # State Components
//!
//! - **Products**: The full catalog, in seed order
//! - **Filtered Products**: The list for the current non-home view; absent at home
//! - **Counts**: Wishlisted and in-cart totals over the full catalog
//! - **View Mode**: Home, wishlist, cart or search
//! - **Loading**: Present for presentation layers; never set by the store
//!
//! # Example
//!
//! ```rust
//! use shopfront::app::ViewState;
//! use shopfront::catalog::seed_products;
//!
//! let state = ViewState::new(seed_products());
//! assert!(state.is_home_view());
//! assert_eq!(state.wishlist_count, 3);
//! assert!(state.filtered_products.is_none());
//! ```

use super::modes::ViewMode;
use crate::domain::{Product, ProductId};
use serde::Serialize;

/// One immutable snapshot of the storefront view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    /// Full catalog. Replaced wholesale on every toggle.
    pub products: Vec<Product>,

    /// Products shown in the wishlist, cart or search view; `None` at home.
    pub filtered_products: Option<Vec<Product>>,

    /// Number of wishlisted products in `products`.
    pub wishlist_count: usize,

    /// Number of in-cart products in `products`.
    pub cart_count: usize,

    /// Current view.
    pub view_mode: ViewMode,

    /// Always `false`: the catalog has no asynchronous source.
    pub is_loading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ViewState {
    /// Creates a home-view snapshot over the given catalog.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let (wishlist_count, cart_count) = count_flags(&products);
        Self {
            products,
            filtered_products: None,
            wishlist_count,
            cart_count,
            view_mode: ViewMode::Home,
            is_loading: false,
        }
    }

    #[must_use]
    pub const fn is_home_view(&self) -> bool {
        self.view_mode.is_home()
    }

    #[must_use]
    pub const fn is_wishlist_view(&self) -> bool {
        matches!(self.view_mode, ViewMode::Wishlist)
    }

    #[must_use]
    pub const fn is_cart_view(&self) -> bool {
        matches!(self.view_mode, ViewMode::Cart)
    }

    #[must_use]
    pub const fn is_search_view(&self) -> bool {
        matches!(self.view_mode, ViewMode::Search(_))
    }

    /// Returns the list a presentation layer should render: the filtered list in
    /// any non-home view, the full catalog at home.
    #[must_use]
    pub fn displayed_products(&self) -> &[Product] {
        match (&self.view_mode, &self.filtered_products) {
            (ViewMode::Home, _) | (_, None) => &self.products,
            (_, Some(filtered)) => filtered,
        }
    }

    /// Looks up a product by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up the first product with exactly this display name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Computes the filtered list for a view over the current catalog.
    ///
    /// Returns `None` for the home view.
    #[must_use]
    pub fn filter_for(&self, mode: &ViewMode) -> Option<Vec<Product>> {
        match mode {
            ViewMode::Home => None,
            ViewMode::Wishlist => Some(self.collect_where(|p| p.is_wishlisted)),
            ViewMode::Cart => Some(self.collect_where(|p| p.is_in_cart)),
            ViewMode::Search(query) => Some(query.apply(&self.products)),
        }
    }

    /// Returns a copy with the catalog replaced and both counts recomputed.
    ///
    /// The view mode and filtered list are carried over unchanged.
    #[must_use]
    pub(crate) fn with_products(&self, products: Vec<Product>) -> Self {
        let (wishlist_count, cart_count) = count_flags(&products);
        Self {
            products,
            filtered_products: self.filtered_products.clone(),
            wishlist_count,
            cart_count,
            view_mode: self.view_mode.clone(),
            is_loading: self.is_loading,
        }
    }

    /// Returns a copy switched to `mode`, with the filtered list computed for it.
    #[must_use]
    pub(crate) fn entering(&self, mode: ViewMode) -> Self {
        Self {
            filtered_products: self.filter_for(&mode),
            view_mode: mode,
            ..self.clone()
        }
    }

    fn collect_where(&self, predicate: impl Fn(&Product) -> bool) -> Vec<Product> {
        self.products.iter().filter(|p| predicate(p)).cloned().collect()
    }
}

fn count_flags(products: &[Product]) -> (usize, usize) {
    products.iter().fold((0, 0), |(wished, carted), p| {
        (
            wished + usize::from(p.is_wishlisted),
            carted + usize::from(p.is_in_cart),
        )
    })
}
