//! View model types representing renderable storefront state.
//!
//! This module defines display-ready projections computed from a [`ViewState`]
//! snapshot. View models carry no business logic; they pre-compute the labels,
//! badges and section visibility a presentation layer needs.
//!
//! # Architecture
//!
//! ```text
//! ViewState → HomeViewModel::from_state → HomeViewModel → presentation layer
//! ```
//!
//! # Example
//!
//! ```rust
//! use shopfront::app::ViewState;
//! use shopfront::catalog::{categories, seed_products};
//! use shopfront::ui::HomeViewModel;
//!
//! let vm = HomeViewModel::from_state(&ViewState::new(seed_products()), &categories());
//! assert_eq!(vm.section_title, "New Products");
//! assert_eq!(vm.cards.len(), 7);
//! ```

use crate::app::{ViewMode, ViewState};
use crate::domain::{Category, Product, ProductId, StarBreakdown};
use serde::Serialize;

/// Maximum number of categories shown in the home carousel.
pub const MAX_VISIBLE_CATEGORIES: usize = 10;

/// Badge counts above this value are shown as `"99+"`.
const BADGE_CAP: usize = 99;

/// Complete view model for the storefront screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeViewModel {
    /// Header with title and badges.
    pub header: HeaderInfo,

    /// Title above the product list.
    pub section_title: String,

    /// Whether the "See All" link is shown next to the section title.
    pub show_see_all: bool,

    /// Whether the promotional banner is shown.
    pub show_promo_banner: bool,

    /// Whether the category carousel is shown.
    pub show_categories: bool,

    /// Whether the search panel may be opened from this view.
    pub search_available: bool,

    /// Categories for the carousel; empty when hidden.
    pub categories: Vec<CategoryItem>,

    /// Product cards for the displayed list.
    pub cards: Vec<ProductCard>,

    /// Message shown instead of cards when the displayed list is empty.
    pub empty_state: Option<EmptyState>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderInfo {
    pub title: String,

    /// Wishlist badge label; `None` hides the badge.
    pub wishlist_badge: Option<String>,

    /// Cart badge label; `None` hides the badge.
    pub cart_badge: Option<String>,
}

/// One category tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryItem {
    pub id: String,
    pub name: String,
    pub image: String,
}

/// Display information for a single product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub description: String,
    pub bold_points: String,
    pub price: String,
    pub strikethrough_price: Option<String>,
    pub stars: StarBreakdown,
    pub review_count: String,
    pub is_best_seller: bool,
    pub is_in_stock: bool,
    pub is_wishlisted: bool,
    pub is_in_cart: bool,
}

/// Empty list message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: Option<String>,
}

impl HomeViewModel {
    /// Projects a snapshot into a view model.
    ///
    /// Home-only sections (banner, categories, "See All") are hidden in every
    /// other view; the search panel is unavailable in wishlist and cart views.
    #[must_use]
    pub fn from_state(state: &ViewState, categories: &[Category]) -> Self {
        let is_home = state.is_home_view();

        let categories = if is_home {
            categories
                .iter()
                .take(MAX_VISIBLE_CATEGORIES)
                .map(CategoryItem::from)
                .collect()
        } else {
            Vec::new()
        };

        let displayed = state.displayed_products();
        let empty_state = displayed
            .is_empty()
            .then(|| EmptyState::for_mode(&state.view_mode));

        Self {
            header: HeaderInfo {
                title: "Shop".to_string(),
                wishlist_badge: badge_label(state.wishlist_count),
                cart_badge: badge_label(state.cart_count),
            },
            section_title: section_title(&state.view_mode).to_string(),
            show_see_all: is_home,
            show_promo_banner: is_home,
            show_categories: is_home,
            search_available: !(state.is_wishlist_view() || state.is_cart_view()),
            categories,
            cards: displayed.iter().map(ProductCard::from).collect(),
            empty_state,
        }
    }
}

impl EmptyState {
    fn for_mode(mode: &ViewMode) -> Self {
        let (message, subtitle) = match mode {
            ViewMode::Wishlist => (
                "No items in wishlist",
                Some("Add products to your wishlist to see them here"),
            ),
            ViewMode::Cart => (
                "No items in cart",
                Some("Add products to your cart to see them here"),
            ),
            ViewMode::Search(_) => ("No products found", Some("Try adjusting your search criteria")),
            ViewMode::Home => ("No products available", None),
        };

        Self {
            message: message.to_string(),
            subtitle: subtitle.map(str::to_string),
        }
    }
}

impl From<&Category> for CategoryItem {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            image: category.image.clone(),
        }
    }
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            description: product.short_description.clone(),
            bold_points: product.bold_points.clone(),
            price: product.present_price.clone(),
            strikethrough_price: product.strikethrough_price.clone(),
            stars: product.star_breakdown(),
            review_count: product.review_count.clone(),
            is_best_seller: product.is_best_seller,
            is_in_stock: product.is_in_stock,
            is_wishlisted: product.is_wishlisted,
            is_in_cart: product.is_in_cart,
        }
    }
}

const fn section_title(mode: &ViewMode) -> &'static str {
    match mode {
        ViewMode::Wishlist => "Wishlist",
        ViewMode::Cart => "Cart",
        ViewMode::Search(_) => "Search Results",
        ViewMode::Home => "New Products",
    }
}

/// Formats a header badge: hidden at zero, capped at `"99+"`.
fn badge_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        n if n > BADGE_CAP => Some(format!("{BADGE_CAP}+")),
        n => Some(n.to_string()),
    }
}
