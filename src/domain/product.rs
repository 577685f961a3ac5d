//! Product domain model.
//!
//! A [`Product`] is a value record describing one catalog entry. Products are
//! identified by a [`ProductId`] assigned when the catalog is seeded; the name is a
//! display field only, so two products may share a name and still toggle
//! independently.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest value a star rating can take.
pub const MAX_STARS: u8 = 5;

/// Stable identifier of a product within a catalog.
///
/// Assigned from the product's position in the seed list and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single catalog entry.
///
/// # Fields
///
/// - `id`: Stable identity used by toggle operations
/// - `name`: Display name shown on the product card
/// - `image`: Reference to the product image asset
/// - `short_description`: One-line description
/// - `bold_points`: Freeform feature tags, e.g. `"Anti-aging • Moisturizing"`
/// - `present_price` / `strikethrough_price`: Price labels (the latter may be absent)
/// - `star_rating`: Average rating between 0.0 and 5.0
/// - `review_count`: Review label such as `"205 reviews"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub short_description: String,
    pub bold_points: String,
    pub present_price: String,
    pub strikethrough_price: Option<String>,
    pub star_rating: f32,
    pub review_count: String,
    pub is_wishlisted: bool,
    pub is_in_cart: bool,
    pub is_in_stock: bool,
    pub is_best_seller: bool,
}

impl Product {
    /// Returns a copy of this product with the wishlist flag flipped.
    #[must_use]
    pub fn with_wishlist_toggled(&self) -> Self {
        Self {
            is_wishlisted: !self.is_wishlisted,
            ..self.clone()
        }
    }

    /// Returns a copy of this product with the cart flag flipped.
    #[must_use]
    pub fn with_cart_toggled(&self) -> Self {
        Self {
            is_in_cart: !self.is_in_cart,
            ..self.clone()
        }
    }

    /// Splits the star rating into full, half and empty stars.
    ///
    /// Any fractional part counts as one half star. The three counts always sum to
    /// [`MAX_STARS`]; ratings outside 0.0..=5.0 are clamped first.
    ///
    /// ```
    /// use shopfront::domain::StarBreakdown;
    /// # use shopfront::catalog::seed_products;
    /// let cream = &seed_products()[0]; // rated 4.2
    /// assert_eq!(cream.star_breakdown(), StarBreakdown { full: 4, half: 1, empty: 0 });
    /// ```
    #[must_use]
    pub fn star_breakdown(&self) -> StarBreakdown {
        let rating = self.star_rating.clamp(0.0, f32::from(MAX_STARS));

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let full = rating.trunc() as u8;
        let half = u8::from(rating.fract() != 0.0);

        StarBreakdown {
            full,
            half,
            empty: MAX_STARS - full - half,
        }
    }
}

/// Star rating split for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(rating: f32) -> Product {
        Product {
            id: ProductId(0),
            name: "Test".into(),
            image: "product".into(),
            short_description: String::new(),
            bold_points: String::new(),
            present_price: "Rs. 1".into(),
            strikethrough_price: None,
            star_rating: rating,
            review_count: "0 reviews".into(),
            is_wishlisted: false,
            is_in_cart: false,
            is_in_stock: true,
            is_best_seller: false,
        }
    }

    #[test]
    fn whole_rating_has_no_half_star() {
        assert_eq!(
            product(4.0).star_breakdown(),
            StarBreakdown { full: 4, half: 0, empty: 1 }
        );
    }

    #[test]
    fn fractional_rating_rounds_to_half_star() {
        assert_eq!(
            product(3.7).star_breakdown(),
            StarBreakdown { full: 3, half: 1, empty: 1 }
        );
    }

    #[test]
    fn out_of_range_rating_is_clamped() {
        assert_eq!(
            product(7.5).star_breakdown(),
            StarBreakdown { full: 5, half: 0, empty: 0 }
        );
        assert_eq!(
            product(-1.0).star_breakdown(),
            StarBreakdown { full: 0, half: 0, empty: 5 }
        );
    }

    #[test]
    fn toggles_only_touch_their_flag() {
        let p = product(4.0);
        let wished = p.with_wishlist_toggled();
        assert!(wished.is_wishlisted);
        assert!(!wished.is_in_cart);

        let carted = p.with_cart_toggled();
        assert!(carted.is_in_cart);
        assert!(!carted.is_wishlisted);
        assert_eq!(carted.with_cart_toggled(), p);
    }
}
