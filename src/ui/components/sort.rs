//! Sort order select.

use crate::app::{Event, FilterStore};
use crate::domain::error::Result;
use crate::domain::{FilterCriteria, FilterUpdate, SortOption, SortOrder};
use crate::ui::components::use_events_filter;
use crate::ui::viewmodel::{SortOptionInfo, SortSelectInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSelect {
    options: Vec<SortOption>,
}

impl SortSelect {
    /// # Errors
    ///
    /// Returns [`FilterError::MissingProvider`](crate::FilterError::MissingProvider)
    /// when no store is available.
    pub fn new(store: Option<&FilterStore>) -> Result<Self> {
        let store = use_events_filter(store, "SortSelect")?;
        Ok(Self::for_store(store))
    }

    pub(crate) fn for_store(store: &FilterStore) -> Self {
        Self {
            options: store.sort_options().to_vec(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &[SortOption] {
        &self.options
    }

    /// The select's value changed. Unknown values fall back to the default order.
    #[must_use]
    pub fn select(&self, value: &str) -> Event {
        Event::UpdateFilter(FilterUpdate::Sort(SortOrder::parse_or_default(value)))
    }

    #[must_use]
    pub fn view(&self, criteria: &FilterCriteria) -> SortSelectInfo {
        SortSelectInfo {
            selected: criteria.sort,
            options: self
                .options
                .iter()
                .map(|option| SortOptionInfo {
                    value: option.value.as_str(),
                    label: option.label.clone(),
                })
                .collect(),
        }
    }
}
