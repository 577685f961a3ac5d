//! Application layer: view state, events and the catalog store.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! ```text
//! UI input → Event → CatalogStore::dispatch → handle_event → ViewState → watch::Receiver
//!                                                                  ↓
//!                                                           HomeViewModel
//! ```
//!
//! # Modules
//!
//! - [`handler`]: Pure reducer from `(ViewState, Event)` to the next `ViewState`
//! - [`modes`]: View mode enum and filtered-list refresh policy
//! - [`search_panel`]: Draft query and chip selection before a search is submitted
//! - [`state`]: The immutable snapshot type
//! - [`store`]: Owned store publishing snapshots
//!
//! # Example
//!
//! ```rust
//! use shopfront::app::CatalogStore;
//!
//! let mut store = CatalogStore::default();
//! let state = store.perform_search("cream", Vec::<String>::new());
//! assert!(state.is_search_view());
//! ```

pub mod handler;
pub mod modes;
pub mod search_panel;
pub mod state;
pub mod store;

pub use handler::{handle_event, Event};
pub use modes::{FilterRefresh, ViewMode};
pub use search_panel::SearchPanel;
pub use state::ViewState;
pub use store::CatalogStore;
