//! Event handling and state transition logic.
//!
//! This module implements the reducer that turns one [`ViewState`] and one
//! [`Event`] into the next `ViewState`. It is a pure function: no I/O, no shared
//! state, and it never fails. Unknown product ids leave the catalog untouched.
//!
//! # Event Types
//!
//! - **Toggles**: `ToggleWishlist`, `ToggleCart`
//! - **View switching**: `ShowWishlist`, `ShowCart`, `ShowHome`
//! - **Search**: `Search` with a [`SearchQuery`]
//!
//! # Example
//!
//! ```rust
//! use shopfront::app::{handle_event, Event, FilterRefresh, ViewState};
//! use shopfront::catalog::seed_products;
//!
//! let state = ViewState::new(seed_products());
//! let next = handle_event(&state, &Event::ShowWishlist, FilterRefresh::Always);
//! assert!(next.is_wishlist_view());
//! assert_eq!(next.displayed_products().len(), 3);
//! ```

use super::modes::{FilterRefresh, ViewMode};
use super::state::ViewState;
use crate::domain::{Product, ProductId};
use crate::search::SearchQuery;
use serde::{Deserialize, Serialize};

/// Inbound events from a presentation layer.
///
/// Each event is processed to completion and yields exactly one next snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// Flips the wishlist flag of one product.
    ToggleWishlist(ProductId),
    /// Flips the cart flag of one product.
    ToggleCart(ProductId),
    /// Enters wishlist view, or returns home if already there.
    ShowWishlist,
    /// Enters cart view, or returns home if already there.
    ShowCart,
    /// Clears the filtered list and all view flags.
    ShowHome,
    /// Filters the full catalog; a blank query behaves like `ShowHome`.
    Search(SearchQuery),
}

/// Processes an event and returns the next snapshot.
///
/// # Parameters
///
/// * `state` - Current snapshot
/// * `event` - Event to apply
/// * `refresh` - Policy for recomputing the filtered list after toggles
///
/// # Tracing
///
/// Each call creates a debug-level span with the event.
#[must_use]
pub fn handle_event(state: &ViewState, event: &Event, refresh: FilterRefresh) -> ViewState {
    let _span = tracing::debug_span!("handle_event", event = ?event).entered();

    match event {
        Event::ToggleWishlist(id) => toggle(
            state,
            *id,
            Product::with_wishlist_toggled,
            ViewState::is_wishlist_view,
            refresh,
        ),
        Event::ToggleCart(id) => toggle(
            state,
            *id,
            Product::with_cart_toggled,
            ViewState::is_cart_view,
            refresh,
        ),
        Event::ShowWishlist => {
            if state.is_wishlist_view() {
                tracing::debug!("leaving wishlist view");
                show_home(state)
            } else {
                state.entering(ViewMode::Wishlist)
            }
        }
        Event::ShowCart => {
            if state.is_cart_view() {
                tracing::debug!("leaving cart view");
                show_home(state)
            } else {
                state.entering(ViewMode::Cart)
            }
        }
        Event::ShowHome => show_home(state),
        Event::Search(query) => {
            if query.is_blank() {
                tracing::debug!("blank search, returning home");
                return show_home(state);
            }

            let next = state.entering(ViewMode::Search(query.clone()));
            tracing::debug!(
                result_count = next.displayed_products().len(),
                "search view entered"
            );
            next
        }
    }
}

fn show_home(state: &ViewState) -> ViewState {
    ViewState {
        filtered_products: None,
        view_mode: ViewMode::Home,
        ..state.clone()
    }
}

/// Flips one flag on the product with `id` and recomputes derived state.
///
/// `in_matching_view` tells whether the current view lists products by the flag
/// being toggled; under [`FilterRefresh::MatchingView`] only that view is refreshed.
fn toggle(
    state: &ViewState,
    id: ProductId,
    flip: fn(&Product) -> Product,
    in_matching_view: fn(&ViewState) -> bool,
    refresh: FilterRefresh,
) -> ViewState {
    if state.product(id).is_none() {
        tracing::debug!(product_id = %id, "toggle for unknown product ignored");
        return state.clone();
    }

    let products = state
        .products
        .iter()
        .map(|p| if p.id == id { flip(p) } else { p.clone() })
        .collect();

    let mut next = state.with_products(products);

    let should_refresh = match refresh {
        FilterRefresh::Always => true,
        FilterRefresh::MatchingView => in_matching_view(&next),
    };
    if should_refresh {
        next.filtered_products = next.filter_for(&next.view_mode);
    }

    tracing::debug!(
        product_id = %id,
        wishlist_count = next.wishlist_count,
        cart_count = next.cart_count,
        refreshed = should_refresh,
        "product toggled"
    );
    next
}
