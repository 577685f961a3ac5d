//! Catalog store: the owned single source of truth for the current view.
//!
//! [`CatalogStore`] holds the latest [`ViewState`] inside a `tokio::sync::watch`
//! channel. Dispatching an event runs the reducer to completion and publishes the
//! complete next snapshot in one step, so readers never observe a partial update.
//!
//! # Concurrency
//!
//! Dispatch takes `&mut self`: there is exactly one writer. Any number of readers
//! may hold a [`watch::Receiver`] from [`CatalogStore::subscribe`], on this thread
//! or others. A receiver always sees the latest snapshot; if several events are
//! dispatched before it looks, it observes only the last one.
//!
//! # Example
//!
//! ```rust
//! use shopfront::app::{CatalogStore, FilterRefresh};
//! use shopfront::catalog::seed_products;
//!
//! let mut store = CatalogStore::new(seed_products(), FilterRefresh::Always);
//! let mut updates = store.subscribe();
//!
//! let id = store.product_id("Luxury Serum").unwrap();
//! store.toggle_wishlist(id);
//!
//! assert!(updates.has_changed().unwrap());
//! assert_eq!(updates.borrow_and_update().wishlist_count, 4);
//! ```

use super::handler::{handle_event, Event};
use super::modes::FilterRefresh;
use super::state::ViewState;
use crate::domain::{Product, ProductId};
use crate::search::SearchQuery;
use std::sync::Arc;
use tokio::sync::watch;

/// Owned store publishing one immutable snapshot per event.
#[derive(Debug)]
pub struct CatalogStore {
    snapshots: watch::Sender<Arc<ViewState>>,
    refresh: FilterRefresh,
}

impl CatalogStore {
    /// Creates a store in home view over the given catalog.
    #[must_use]
    pub fn new(products: Vec<Product>, refresh: FilterRefresh) -> Self {
        let initial = ViewState::new(products);
        tracing::debug!(
            product_count = initial.products.len(),
            wishlist_count = initial.wishlist_count,
            cart_count = initial.cart_count,
            refresh = ?refresh,
            "catalog store created"
        );

        let (snapshots, _) = watch::channel(Arc::new(initial));
        Self { snapshots, refresh }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<ViewState> {
        Arc::clone(&self.snapshots.borrow())
    }

    /// Returns a receiver that is notified after every dispatched event.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<ViewState>> {
        self.snapshots.subscribe()
    }

    /// Returns the filtered-list refresh policy this store was built with.
    #[must_use]
    pub const fn refresh_policy(&self) -> FilterRefresh {
        self.refresh
    }

    /// Resolves a display name to a product id (exact match, first wins).
    #[must_use]
    pub fn product_id(&self, name: &str) -> Option<ProductId> {
        self.snapshots.borrow().find_by_name(name).map(|p| p.id)
    }

    /// Applies an event and publishes the resulting snapshot.
    ///
    /// A snapshot is published even when the event changed nothing.
    pub fn dispatch(&mut self, event: &Event) -> Arc<ViewState> {
        let _span = tracing::debug_span!("store_dispatch", event = ?event).entered();

        let current = self.snapshot();
        let next = Arc::new(handle_event(&current, event, self.refresh));
        self.snapshots.send_replace(Arc::clone(&next));

        tracing::debug!(
            receivers = self.snapshots.receiver_count(),
            view_mode = ?next.view_mode,
            "snapshot published"
        );
        next
    }

    pub fn toggle_wishlist(&mut self, id: ProductId) -> Arc<ViewState> {
        self.dispatch(&Event::ToggleWishlist(id))
    }

    pub fn toggle_cart(&mut self, id: ProductId) -> Arc<ViewState> {
        self.dispatch(&Event::ToggleCart(id))
    }

    pub fn show_wishlist(&mut self) -> Arc<ViewState> {
        self.dispatch(&Event::ShowWishlist)
    }

    pub fn show_cart(&mut self) -> Arc<ViewState> {
        self.dispatch(&Event::ShowCart)
    }

    pub fn show_home(&mut self) -> Arc<ViewState> {
        self.dispatch(&Event::ShowHome)
    }

    /// Runs a search over the full catalog.
    ///
    /// Blank text with no tags returns to home view instead.
    pub fn perform_search<I, S>(&mut self, query: &str, tag_ids: I) -> Arc<ViewState>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dispatch(&Event::Search(SearchQuery::new(query, tag_ids)))
    }
}

impl Default for CatalogStore {
    /// A store over the seed catalog with the default refresh policy.
    fn default() -> Self {
        Self::new(crate::catalog::seed_products(), FilterRefresh::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dispatch_publishes_once() {
        let mut store = CatalogStore::default();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap_or(true));

        store.show_cart();
        assert!(rx.has_changed().unwrap_or(false));
        assert!(rx.borrow_and_update().is_cart_view());
        assert!(!rx.has_changed().unwrap_or(true));

        // No-op events still publish a snapshot.
        store.toggle_cart(ProductId(999));
        assert!(rx.has_changed().unwrap_or(false));
    }

    #[test]
    fn snapshot_matches_dispatch_result() {
        let mut store = CatalogStore::default();
        let published = store.show_wishlist();
        assert!(Arc::ptr_eq(&published, &store.snapshot()));
    }

    #[test]
    fn earlier_snapshots_are_untouched() {
        let mut store = CatalogStore::default();
        let before = store.snapshot();
        store.toggle_wishlist(ProductId(0));
        assert!(before.products[0].is_wishlisted);
        assert!(!store.snapshot().products[0].is_wishlisted);
    }

    #[test]
    fn dispatch_without_receivers_still_updates() {
        let mut store = CatalogStore::default();
        store.show_cart();
        assert!(store.snapshot().is_cart_view());
    }

    #[test]
    fn name_lookup() {
        let store = CatalogStore::default();
        assert_eq!(store.product_id("Exfoliating Scrub"), Some(ProductId(6)));
        assert_eq!(store.product_id("Nope"), None);
    }
}
