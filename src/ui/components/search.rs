//! Debounced search input.
//!
//! Keystrokes update the local value immediately and arm a commit deadline;
//! only the value still present when the deadline passes is committed to the
//! store. Time is passed in by the host so the debounce can be driven without a
//! timer runtime.

use std::time::{Duration, Instant};

use crate::app::{Event, FilterStore};
use crate::domain::error::Result;
use crate::domain::{FilterCriteria, FilterField, FilterUpdate};
use crate::ui::components::use_events_filter;
use crate::ui::viewmodel::SearchBarInfo;
use crate::Config;

/// Delay between the last keystroke and the search commit.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

pub const SEARCH_PLACEHOLDER: &str = "Search events...";
pub const CLEAR_SEARCH_LABEL: &str = "Clear search";

/// Search text box state.
#[derive(Debug, Clone)]
pub struct SearchInput {
    value: String,
    /// Last committed search seen from the store.
    synced: String,
    debounce: Duration,
    deadline: Option<Instant>,
}

impl SearchInput {
    /// Creates the input showing the store's current search.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::MissingProvider`](crate::FilterError::MissingProvider)
    /// when no store is available.
    pub fn new(store: Option<&FilterStore>) -> Result<Self> {
        let store = use_events_filter(store, "SearchInput")?;
        let search = store.criteria().search.clone();
        Ok(Self {
            value: search.clone(),
            synced: search,
            debounce: Duration::from_millis(SEARCH_DEBOUNCE_MS),
            deadline: None,
        })
    }

    /// Creates the input with the configured debounce.
    ///
    /// # Errors
    ///
    /// Same as [`SearchInput::new`].
    pub fn from_config(store: Option<&FilterStore>, config: &Config) -> Result<Self> {
        Ok(Self::new(store)?.with_debounce(config.debounce()))
    }

    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Local (possibly uncommitted) text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Records a keystroke, restarting the debounce window.
    pub fn on_input(&mut self, value: impl Into<String>, now: Instant) {
        self.value = value.into();
        self.deadline = Some(now + self.debounce);
    }

    /// When the pending commit is due, if any.
    #[must_use]
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns the commit event once the debounce window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<Event> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                tracing::debug!(search = %self.value, "search debounce elapsed");
                Some(Event::UpdateFilter(FilterUpdate::Search(self.value.clone())))
            }
            _ => None,
        }
    }

    /// Clears the box and cancels any pending commit.
    pub fn on_clear(&mut self) -> Event {
        self.value.clear();
        self.deadline = None;
        Event::ClearFilter(FilterField::Search)
    }

    /// Mirrors a store-side search change (history navigation, "Clear All").
    ///
    /// Local typing is left alone while the committed search is unchanged.
    pub fn sync_from_store(&mut self, criteria: &FilterCriteria) {
        if criteria.search != self.synced {
            self.synced.clone_from(&criteria.search);
            self.value.clone_from(&criteria.search);
        }
    }

    /// Drops the pending commit when the input goes away.
    pub fn teardown(&mut self) {
        if self.deadline.take().is_some() {
            tracing::trace!("pending search commit cancelled");
        }
    }

    #[must_use]
    pub fn show_clear_button(&self) -> bool {
        !self.value.is_empty()
    }

    #[must_use]
    pub fn view(&self) -> SearchBarInfo {
        SearchBarInfo {
            query: self.value.clone(),
            placeholder: SEARCH_PLACEHOLDER,
            clear_label: CLEAR_SEARCH_LABEL,
            show_clear: self.show_clear_button(),
        }
    }
}
