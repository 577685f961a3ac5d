//! Browsing categories and search filter chips.
//!
//! Categories are display-only tiles on the home view. Filter chips are the
//! selectable tags offered by the search panel; their ids map onto the search
//! predicate table in [`crate::search::CategoryTag`].

use serde::{Deserialize, Serialize};

/// A browsing category shown on the home view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Slug derived from the name, e.g. `"day_wear"`.
    pub id: String,
    pub name: String,
    pub image: String,
}

impl Category {
    /// Creates a category, deriving its slug id from the name.
    ///
    /// ```
    /// use shopfront::domain::Category;
    ///
    /// let category = Category::new("Face Cream", "category");
    /// assert_eq!(category.id, "face_cream");
    /// ```
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.to_lowercase().replace(' ', "_"),
            name,
            image: image.into(),
        }
    }
}

/// A selectable search filter chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChip {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub is_selected: bool,
}

impl FilterChip {
    /// Creates an unselected chip.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            is_selected: false,
        }
    }
}
