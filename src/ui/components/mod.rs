//! Filter bar input widgets.
//!
//! Each widget keeps only its own transient state (typed text, open menu) and
//! turns user input into [`Event`](crate::app::Event)s for the provider to
//! dispatch. Current selections are always read back from the store, so every
//! widget reflects popstate and "Clear All" without extra wiring.
//!
//! # Components
//!
//! - [`search`]: Debounced search box
//! - [`dropdown`]: Topic (multi) and location (single) dropdowns
//! - [`sort`]: Sort order select
//! - [`active_filters`]: Removable chips and "Clear All"
//! - [`view_mode`]: Grid/compact/gallery links
//!
//! # Example
//!
//! ```rust
//! use events_filter::ui::components::{use_events_filter, SearchInput};
//!
//! assert!(use_events_filter(None, "SearchInput").is_err());
//! assert!(SearchInput::new(None).is_err());
//! ```

pub mod active_filters;
pub mod dropdown;
pub mod search;
pub mod sort;
pub mod view_mode;

pub use active_filters::ActiveFilters;
pub use dropdown::FilterDropdown;
pub use search::{SearchInput, SEARCH_DEBOUNCE_MS};
pub use sort::SortSelect;
pub use view_mode::ViewModeSelector;

use crate::app::FilterStore;
use crate::domain::error::{FilterError, Result};

/// Resolves the store a widget reads from.
///
/// # Errors
///
/// Returns [`FilterError::MissingProvider`] naming `widget` when the widget is
/// used outside an [`EventFilterProvider`](crate::provider::EventFilterProvider).
pub fn use_events_filter<'a>(store: Option<&'a FilterStore>, widget: &'static str) -> Result<&'a FilterStore> {
    store.ok_or(FilterError::MissingProvider { widget })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_provider_names_widget() {
        let err = use_events_filter(None, "SortSelect").unwrap_err();
        assert_eq!(err.to_string(), "SortSelect must be used within EventFilterProvider");
    }
}
