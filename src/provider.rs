//! Provider wiring the filter store to the page.
//!
//! [`EventFilterProvider`] owns the [`FilterStore`], a browser capability (`B`)
//! for reading the address and pushing history, and the observers that receive
//! every `(criteria, filtered items)` recomputation. It resolves the initial
//! criteria on construction, translates widget calls into [`Event`]s, runs them
//! through [`handle_event`], and executes the resulting [`Action`]s.
//!
//! # Lifecycle
//!
//! 1. **Construct**: explicit initial filters win; otherwise the query string is
//!    parsed in a browser context; otherwise defaults apply
//! 2. **Observe**: register the presentation bridge or any other observer
//! 3. **Mount**: observers receive the initial output; nothing is written to the
//!    URL so externally supplied query parameters survive
//! 4. **Interact**: every change notifies observers and pushes a history entry
//! 5. **Navigate**: `popstate` restores stored criteria without a URL write
//!
//! # Example
//!
//! ```rust
//! use events_filter::infrastructure::MemoryHistory;
//! use events_filter::provider::{EventFilterProvider, ProviderProps};
//! use events_filter::{FilterUpdate, FilterableItem};
//!
//! let props = ProviderProps::new(vec![
//!     FilterableItem::new("1", "Intro to Go", "2024-01-01").with_topics(["go"]),
//! ]);
//! let history = MemoryHistory::new("https://example.com/events?view=grid");
//! let mut provider = EventFilterProvider::new(props, history).mount();
//!
//! provider.update_filter(FilterUpdate::ToggleTopic("go".into()));
//! assert_eq!(
//!     provider.browser().current().url,
//!     "https://example.com/events?view=grid&topics=go"
//! );
//! ```

use crate::app::{handle_event, Action, Event, FilterStore};
use crate::domain::error::Result;
use crate::domain::{
    ActiveFilter, AvailableFilters, FilterCriteria, FilterField, FilterUpdate, FilterableItem,
    SortOption,
};
use crate::infrastructure::{HistoryBackend, LocationProvider};
use crate::query;

/// Receives the output of every recomputation.
pub trait FiltersObserver {
    fn filters_changed(&mut self, criteria: &FilterCriteria, items: &[FilterableItem]);
}

impl<F> FiltersObserver for F
where
    F: FnMut(&FilterCriteria, &[FilterableItem]),
{
    fn filters_changed(&mut self, criteria: &FilterCriteria, items: &[FilterableItem]) {
        self(criteria, items);
    }
}

/// Construction inputs for the provider.
#[derive(Debug, Clone, Default)]
pub struct ProviderProps {
    pub items: Vec<FilterableItem>,
    pub available_filters: AvailableFilters,
    pub sort_options: Vec<SortOption>,
    /// When set, used as-is instead of reading the URL.
    pub initial_filters: Option<FilterCriteria>,
}

impl ProviderProps {
    /// Props with default sort options and no selectable filter values.
    #[must_use]
    pub fn new(items: Vec<FilterableItem>) -> Self {
        Self {
            items,
            available_filters: AvailableFilters::default(),
            sort_options: SortOption::defaults(),
            initial_filters: None,
        }
    }

    #[must_use]
    pub fn with_available_filters(mut self, available_filters: AvailableFilters) -> Self {
        self.available_filters = available_filters;
        self
    }

    #[must_use]
    pub fn with_initial_filters(mut self, initial_filters: FilterCriteria) -> Self {
        self.initial_filters = Some(initial_filters);
        self
    }
}

/// Owns the store and executes its side effects against the page.
pub struct EventFilterProvider<B> {
    store: FilterStore,
    browser: B,
    observers: Vec<Box<dyn FiltersObserver>>,
}

impl<B> std::fmt::Debug for EventFilterProvider<B>
where
    B: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventFilterProvider")
            .field("store", &self.store)
            .field("browser", &self.browser)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<B> EventFilterProvider<B>
where
    B: LocationProvider + HistoryBackend,
{
    /// Resolves the initial criteria and builds the store.
    #[must_use]
    pub fn new(props: ProviderProps, browser: B) -> Self {
        let criteria = Self::initial_criteria(props.initial_filters, &browser);

        Self {
            store: FilterStore::new(props.items, props.available_filters, props.sort_options, criteria),
            browser,
            observers: Vec::new(),
        }
    }

    fn initial_criteria(initial_filters: Option<FilterCriteria>, browser: &B) -> FilterCriteria {
        if let Some(criteria) = initial_filters {
            tracing::debug!(criteria = ?criteria, "using explicit initial filters");
            return criteria;
        }

        let Some(href) = browser.href() else {
            tracing::debug!("no browser context, using default filters");
            return FilterCriteria::default();
        };

        match query::parse_url(&href) {
            Ok(criteria) => {
                tracing::debug!(href = %href, criteria = ?criteria, "parsed filters from URL");
                criteria
            }
            Err(e) => {
                tracing::warn!(href = %href, error = %e, "unparseable location, using default filters");
                FilterCriteria::default()
            }
        }
    }

    /// Registers an observer for every subsequent recomputation.
    #[must_use]
    pub fn with_observer(mut self, observer: impl FiltersObserver + 'static) -> Self {
        self.subscribe(observer);
        self
    }

    pub fn subscribe(&mut self, observer: impl FiltersObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Delivers the initial output and enables URL sync for later changes.
    #[must_use]
    pub fn mount(mut self) -> Self {
        self.notify();
        self.dispatch(Event::Mounted);
        self
    }

    #[must_use]
    pub const fn store(&self) -> &FilterStore {
        &self.store
    }

    #[must_use]
    pub const fn browser(&self) -> &B {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut B {
        &mut self.browser
    }

    /// Runs one event through the handler and executes its actions.
    ///
    /// Returns whether the criteria changed. Handler and action errors are
    /// logged and leave the store as it was.
    pub fn dispatch(&mut self, event: Event) -> bool {
        match handle_event(&mut self.store, event) {
            Ok((changed, actions)) => {
                tracing::debug!(action_count = actions.len(), changed, "event handled successfully");
                for action in actions {
                    if let Err(e) = self.execute_action(action) {
                        tracing::warn!(error = %e, "failed to execute action");
                    }
                }
                changed
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    pub fn update_filter(&mut self, update: FilterUpdate) -> bool {
        self.dispatch(Event::UpdateFilter(update))
    }

    pub fn clear_filter(&mut self, field: FilterField) -> bool {
        self.dispatch(Event::ClearFilter(field))
    }

    pub fn clear_all_filters(&mut self) -> bool {
        self.dispatch(Event::ClearAllFilters)
    }

    pub fn remove_filter_value(&mut self, chip: ActiveFilter) -> bool {
        self.dispatch(Event::RemoveFilterValue(chip))
    }

    /// Handles back/forward navigation with the entry's stored state.
    pub fn popstate(&mut self, state: Option<serde_json::Value>) -> bool {
        self.dispatch(Event::PopState(state))
    }

    fn execute_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::NotifyFiltersChanged => {
                self.notify();
                Ok(())
            }
            Action::PushHistory(criteria) => self.push_history(&criteria),
        }
    }

    fn notify(&mut self) {
        let criteria = self.store.criteria();
        let items = self.store.filtered_items();
        for observer in &mut self.observers {
            observer.filters_changed(criteria, items);
        }
    }

    fn push_history(&mut self, criteria: &FilterCriteria) -> Result<()> {
        let Some(href) = self.browser.href() else {
            return Ok(());
        };
        let url = query::build_url(&href, criteria)?;
        let state = serde_json::to_value(criteria)?;
        tracing::debug!(from = %href, to = %url, "pushing history entry");
        self.browser.push_state(state, &url);
        Ok(())
    }
}
