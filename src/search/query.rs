//! Free-text plus tag search over the product list.

use super::{contains_ignore_case, CategoryTag};
use crate::domain::Product;
use serde::{Deserialize, Serialize};

/// A submitted search: free text and the selected chip ids.
///
/// The text predicate and the tag predicate are combined with AND; the tags among
/// themselves are combined with OR. Either half is skipped when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Raw query text. Matched as a case-insensitive substring, untrimmed.
    pub text: String,

    /// Selected chip ids. Ids outside the tag table are kept and never match.
    #[serde(default)]
    pub tag_ids: Vec<String>,
}

impl SearchQuery {
    pub fn new<I, S>(text: impl Into<String>, tag_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            tag_ids: tag_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if the text is empty or whitespace.
    #[must_use]
    pub fn has_blank_text(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Returns `true` if neither text nor tags would narrow the list.
    ///
    /// A blank query does not enter search view; it resets to home.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.has_blank_text() && self.tag_ids.is_empty()
    }

    /// Returns `true` if the product's name, description or bold points contain
    /// the query text. Always `true` for blank text.
    #[must_use]
    pub fn matches_text(&self, product: &Product) -> bool {
        if self.has_blank_text() {
            return true;
        }

        contains_ignore_case(&product.name, &self.text)
            || contains_ignore_case(&product.short_description, &self.text)
            || contains_ignore_case(&product.bold_points, &self.text)
    }

    /// Returns `true` if any selected tag matches the product. Always `true` when
    /// no tags are selected.
    #[must_use]
    pub fn matches_tags(&self, product: &Product) -> bool {
        if self.tag_ids.is_empty() {
            return true;
        }

        self.tag_ids
            .iter()
            .filter_map(|id| CategoryTag::from_id(id))
            .any(|tag| tag.matches(product))
    }

    /// Returns `true` if the product passes both predicates.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_text(product) && self.matches_tags(product)
    }

    /// Filters the full product list in a single pass, preserving order.
    #[must_use]
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let _span = tracing::debug_span!("search_apply",
            total_products = products.len(),
            query_len = self.text.len(),
            tag_count = self.tag_ids.len()
        )
        .entered();

        let results: Vec<Product> = products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect();

        tracing::debug!(result_count = results.len(), "search filter applied");
        results
    }
}
