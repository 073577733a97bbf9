//! Event handling and state transition logic.
//!
//! [`handle_event`] is the one place criteria change. It pattern-matches the
//! event, calls the matching [`FilterStore`] operation, and returns the side
//! effects to run.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mounted`
//! - **Mutations**: `UpdateFilter`, `ClearFilter`, `ClearAllFilters`, `RemoveFilterValue`
//! - **Navigation**: `PopState` with the history entry's stored payload
//!
//! # Example
//!
//! ```rust
//! use events_filter::app::{handle_event, Action, Event, FilterStore};
//! use events_filter::{AvailableFilters, FilterCriteria, FilterUpdate, SortOption};
//!
//! let mut store = FilterStore::new(Vec::new(), AvailableFilters::default(), SortOption::defaults(), FilterCriteria::default());
//! let (changed, actions) = handle_event(&mut store, Event::UpdateFilter(FilterUpdate::Search("go".into())))?;
//! assert!(changed);
//! assert_eq!(actions, vec![Action::NotifyFiltersChanged]);
//! # Ok::<(), events_filter::FilterError>(())
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::app::{Action, FilterStore};
use crate::domain::error::Result;
use crate::domain::{ActiveFilter, FilterCriteria, FilterField, FilterUpdate, SortOrder};

/// Events raised by widgets, the page lifecycle, or browser navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The initial mount has settled; later changes are written to the URL.
    Mounted,
    /// `updateFilter`: sets or toggles one field.
    UpdateFilter(FilterUpdate),
    /// `clearFilter`: resets one field.
    ClearFilter(FilterField),
    /// `clearAllFilters`: resets every field.
    ClearAllFilters,
    /// `removeFilterValue`: removes one active-filter chip.
    RemoveFilterValue(ActiveFilter),
    /// Back/forward navigation landed on an entry with this state payload.
    PopState(Option<Value>),
}

impl Event {
    const fn name(&self) -> &'static str {
        match self {
            Self::Mounted => "Mounted",
            Self::UpdateFilter(_) => "UpdateFilter",
            Self::ClearFilter(_) => "ClearFilter",
            Self::ClearAllFilters => "ClearAllFilters",
            Self::RemoveFilterValue(_) => "RemoveFilterValue",
            Self::PopState(_) => "PopState",
        }
    }
}

/// History entry state as written by the provider.
///
/// Every key is required and nothing else is allowed, so state left by other
/// scripts (routers, scroll restoration) never passes for criteria.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HistoryState {
    search: String,
    topics: Vec<String>,
    location: String,
    sort: SortOrder,
}

impl From<HistoryState> for FilterCriteria {
    fn from(state: HistoryState) -> Self {
        Self {
            search: state.search,
            topics: state.topics,
            location: state.location,
            sort: state.sort,
        }
    }
}

/// Processes an event, mutates the store, and returns actions to execute.
///
/// # Returns
///
/// `(changed, actions)`: whether the criteria changed, and the side effects to
/// run in order. Unchanged criteria produce no actions. Mutations after mount
/// produce a history push; mutations before it and popstate replacements do not.
///
/// # Errors
///
/// Returns [`FilterError::Json`](crate::FilterError::Json) when a popstate
/// payload is present but is not a complete criteria object with no extra keys.
/// The store is left untouched.
pub fn handle_event(state: &mut FilterStore, event: Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    let changed = match event {
        Event::Mounted => {
            tracing::debug!("initial mount settled, enabling URL sync");
            state.mark_mounted();
            return Ok((false, vec![]));
        }
        Event::PopState(None) => {
            tracing::debug!("popstate without stored filters, ignoring");
            return Ok((false, vec![]));
        }
        Event::PopState(Some(payload)) => {
            let criteria: FilterCriteria = serde_json::from_value::<HistoryState>(payload)?.into();
            tracing::debug!(criteria = ?criteria, "restoring filters from history");
            let changed = state.replace_criteria(criteria);
            return Ok((changed, if changed { vec![Action::NotifyFiltersChanged] } else { vec![] }));
        }
        Event::UpdateFilter(update) => {
            tracing::trace!(update = ?update, "updating filter");
            state.update_filter(update)
        }
        Event::ClearFilter(field) => state.clear_filter(field),
        Event::ClearAllFilters => state.clear_all_filters(),
        Event::RemoveFilterValue(chip) => state.remove_filter_value(&chip),
    };

    if !changed {
        tracing::debug!("filters unchanged, skipping notify and URL update");
        return Ok((false, vec![]));
    }

    tracing::debug!(
        filtered_count = state.filtered_items().len(),
        mounted = state.is_mounted(),
        "filters changed"
    );

    let mut actions = vec![Action::NotifyFiltersChanged];
    if state.is_mounted() {
        actions.push(Action::PushHistory(state.criteria().clone()));
    }
    Ok((true, actions))
}
