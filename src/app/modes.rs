//! View mode and filtered-list refresh policy.
//!
//! The storefront shows one of four mutually exclusive views. Representing them
//! as a single enum makes "at most one view flag set" hold by construction; the
//! boolean accessors on [`crate::app::ViewState`] are derived from it.
//!
//! # Example
//!
//! ```rust
//! use shopfront::app::ViewMode;
//! use shopfront::search::SearchQuery;
//!
//! let mode = ViewMode::Search(SearchQuery::new("cream", Vec::<String>::new()));
//! assert!(!mode.is_home());
//! ```

use crate::search::SearchQuery;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which list the storefront is currently displaying.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Full catalog; no filtered list.
    #[default]
    Home,

    /// Wishlisted products only.
    Wishlist,

    /// Products in the cart only.
    Cart,

    /// Results of the contained query, run against the full catalog.
    Search(SearchQuery),
}

impl ViewMode {
    #[must_use]
    pub const fn is_home(&self) -> bool {
        matches!(self, Self::Home)
    }
}

/// When the filtered list is recomputed after a wishlist or cart toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterRefresh {
    /// Recompute the filtered list from the current view after every toggle.
    ///
    /// A search view re-runs its stored query, so results never go stale.
    #[default]
    Always,

    /// Refresh only when the toggle matches the current view (wishlist toggle in
    /// wishlist view, cart toggle in cart view). In any other view the filtered
    /// list is left as it was, even if it no longer reflects the catalog.
    MatchingView,
}

impl FromStr for FilterRefresh {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "matching-view" | "matching_view" => Ok(Self::MatchingView),
            other => Err(format!("unknown filter refresh policy: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policy_names() {
        assert_eq!("always".parse::<FilterRefresh>(), Ok(FilterRefresh::Always));
        assert_eq!(" Matching-View ".parse::<FilterRefresh>(), Ok(FilterRefresh::MatchingView));
        assert_eq!("matching_view".parse::<FilterRefresh>(), Ok(FilterRefresh::MatchingView));
        assert!("sometimes".parse::<FilterRefresh>().is_err());
    }
}
