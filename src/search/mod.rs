//! Search and filter engine.
//!
//! Narrows the product list by a free-text query and a set of selected category
//! tags. There is no ranking and no pagination; filtering is one synchronous pass
//! over the full catalog that preserves catalog order.
//!
//! # Modules
//!
//! - [`query`]: [`SearchQuery`] combining text and tag predicates
//! - [`tags`]: [`CategoryTag`] chip-id to keyword table

pub mod query;
pub mod tags;

pub use query::SearchQuery;
pub use tags::CategoryTag;

/// Case-insensitive substring test.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::contains_ignore_case;

    #[test]
    fn ignores_case_on_both_sides() {
        assert!(contains_ignore_case("Premium Face Cream", "CREAM"));
        assert!(contains_ignore_case("anti-aging", "Anti-Aging"));
        assert!(!contains_ignore_case("Sunscreen", "cream"));
        assert!(contains_ignore_case("anything", ""));
    }
}
