//! Draft state of the search panel.
//!
//! The panel collects a query and a chip selection before anything reaches the
//! store. Nothing here changes the catalog view until [`SearchPanel::submit`]
//! produces an [`Event::Search`].

use super::handler::Event;
use crate::domain::FilterChip;
use crate::search::SearchQuery;
use serde::Serialize;

/// Query text, chip selection and visibility of the search panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPanel {
    pub query: String,
    pub chips: Vec<FilterChip>,
    pub visible: bool,
}

impl SearchPanel {
    /// Creates a hidden panel with an empty query and the given chips.
    #[must_use]
    pub fn new(chips: Vec<FilterChip>) -> Self {
        Self {
            query: String::new(),
            chips,
            visible: false,
        }
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        tracing::trace!(query = %self.query, "search draft updated");
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    /// Flips the selection of the chip with `id`. Unknown ids are ignored.
    pub fn toggle_chip(&mut self, id: &str) {
        match self.chips.iter_mut().find(|chip| chip.id == id) {
            Some(chip) => chip.is_selected = !chip.is_selected,
            None => tracing::debug!(chip_id = %id, "unknown filter chip ignored"),
        }
    }

    /// Ids of the selected chips, in chip order.
    #[must_use]
    pub fn selected_chip_ids(&self) -> Vec<String> {
        self.chips
            .iter()
            .filter(|chip| chip.is_selected)
            .map(|chip| chip.id.clone())
            .collect()
    }

    /// Builds the search event from the draft and hides the panel.
    ///
    /// The draft query and chip selection are kept so the panel reopens as it was.
    #[must_use]
    pub fn submit(&mut self) -> Event {
        self.visible = false;
        Event::Search(SearchQuery::new(self.query.clone(), self.selected_chip_ids()))
    }
}

impl Default for SearchPanel {
    fn default() -> Self {
        Self::new(crate::catalog::filter_chips())
    }
}
