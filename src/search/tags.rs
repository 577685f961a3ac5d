//! Fixed category-tag predicate table.
//!
//! Each filter chip id maps to a [`CategoryTag`] with a short keyword list. A
//! product carries a tag when its name or bold points contain any keyword,
//! ignoring case. Ids outside the table map to no tag and never match.

use super::contains_ignore_case;
use crate::domain::Product;
use serde::{Deserialize, Serialize};

/// Category tags selectable from the search panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryTag {
    Beauty,
    Skincare,
    Makeup,
    Fragrance,
    HairCare,
    BodyCare,
    AntiAging,
    Moisturizer,
}

impl CategoryTag {
    /// Every tag, in chip order.
    pub const ALL: [Self; 8] = [
        Self::Beauty,
        Self::Skincare,
        Self::Makeup,
        Self::Fragrance,
        Self::HairCare,
        Self::BodyCare,
        Self::AntiAging,
        Self::Moisturizer,
    ];

    /// Resolves a chip id (`"1"` through `"8"`) to its tag.
    ///
    /// ```
    /// use shopfront::search::CategoryTag;
    ///
    /// assert_eq!(CategoryTag::from_id("2"), Some(CategoryTag::Skincare));
    /// assert_eq!(CategoryTag::from_id("9"), None);
    /// ```
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.id() == id)
    }

    /// Returns the chip id for this tag.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Beauty => "1",
            Self::Skincare => "2",
            Self::Makeup => "3",
            Self::Fragrance => "4",
            Self::HairCare => "5",
            Self::BodyCare => "6",
            Self::AntiAging => "7",
            Self::Moisturizer => "8",
        }
    }

    /// Keywords searched for in the product name and bold points.
    ///
    /// `Moisturiz` is a stem so that both "Moisturizer" and "Moisturizing" match.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Beauty => &["Beauty"],
            Self::Skincare => &["Skincare", "Cream", "Serum"],
            Self::Makeup => &["Makeup"],
            Self::Fragrance => &["Fragrance"],
            Self::HairCare => &["Hair"],
            Self::BodyCare => &["Body"],
            Self::AntiAging => &["Anti-aging"],
            Self::Moisturizer => &["Moisturiz"],
        }
    }

    /// Returns `true` if the product's name or bold points contain any keyword.
    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        self.keywords().iter().any(|keyword| {
            contains_ignore_case(&product.name, keyword)
                || contains_ignore_case(&product.bold_points, keyword)
        })
    }
}
