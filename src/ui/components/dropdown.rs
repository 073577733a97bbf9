//! Topic and location filter dropdowns.
//!
//! Topics are multi-select: each checkbox toggles one topic and the menu stays
//! open. Location is single-select: choosing a radio sets the location and
//! closes the menu. Both close on a click outside and offer "Clear" once
//! something is selected.

use crate::app::{DropdownKind, Event, FilterStore};
use crate::domain::error::Result;
use crate::domain::{FilterCriteria, FilterUpdate};
use crate::ui::components::use_events_filter;
use crate::ui::viewmodel::{DropdownInfo, OptionInfo};

/// One dropdown's state. Options are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDropdown {
    kind: DropdownKind,
    options: Vec<String>,
    open: bool,
}

impl FilterDropdown {
    /// # Errors
    ///
    /// Returns [`FilterError::MissingProvider`](crate::FilterError::MissingProvider)
    /// when no store is available.
    pub fn new(kind: DropdownKind, store: Option<&FilterStore>) -> Result<Self> {
        let store = use_events_filter(store, "FilterDropdown")?;
        Ok(Self::for_store(kind, store))
    }

    pub(crate) fn for_store(kind: DropdownKind, store: &FilterStore) -> Self {
        let available = store.available_filters();
        let options = match kind {
            DropdownKind::Topics => available.topics.clone(),
            DropdownKind::Location => available.locations.clone(),
        };
        Self {
            kind,
            options,
            open: false,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> DropdownKind {
        self.kind
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Pointer down anywhere outside the dropdown.
    pub fn on_click_outside(&mut self) {
        if self.open {
            tracing::trace!(dropdown = self.kind.label(), "closing on outside click");
            self.open = false;
        }
    }

    /// Values of this dropdown currently selected in `criteria`.
    #[must_use]
    pub fn selected<'a>(&self, criteria: &'a FilterCriteria) -> Vec<&'a str> {
        match self.kind {
            DropdownKind::Topics => criteria.topics.iter().map(String::as_str).collect(),
            DropdownKind::Location if criteria.location.is_empty() => Vec::new(),
            DropdownKind::Location => vec![criteria.location.as_str()],
        }
    }

    #[must_use]
    pub fn badge(&self, criteria: &FilterCriteria) -> usize {
        self.selected(criteria).len()
    }

    /// An option's checkbox or radio changed to `checked`.
    pub fn choose(&mut self, option: &str, checked: bool) -> Event {
        let update = match self.kind {
            DropdownKind::Topics => FilterUpdate::ToggleTopic(option.to_string()),
            DropdownKind::Location => {
                if checked {
                    self.open = false;
                    FilterUpdate::Location(option.to_string())
                } else {
                    FilterUpdate::Location(String::new())
                }
            }
        };
        Event::UpdateFilter(update)
    }

    /// The "Clear" entry.
    #[must_use]
    pub const fn clear(&self) -> Event {
        Event::ClearFilter(self.kind.field())
    }

    #[must_use]
    pub fn view(&self, criteria: &FilterCriteria) -> DropdownInfo {
        let selected = self.selected(criteria);
        DropdownInfo {
            label: self.kind.label(),
            multiple: self.kind.is_multiple(),
            options: self
                .options
                .iter()
                .map(|option| OptionInfo {
                    value: option.clone(),
                    checked: selected.contains(&option.as_str()),
                })
                .collect(),
            badge: selected.len(),
            show_clear: !selected.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AvailableFilters, FilterField, SortOption};

    fn store() -> FilterStore {
        FilterStore::new(
            Vec::new(),
            AvailableFilters {
                topics: vec!["go".into(), "rust".into()],
                locations: vec!["Osaka".into(), "Tokyo".into()],
            },
            SortOption::defaults(),
            FilterCriteria::default(),
        )
    }

    #[test]
    fn test_topics_toggle_and_stay_open() {
        let mut dropdown = FilterDropdown::new(DropdownKind::Topics, Some(&store())).unwrap();
        dropdown.open();
        assert_eq!(
            dropdown.choose("rust", true),
            Event::UpdateFilter(FilterUpdate::ToggleTopic("rust".into()))
        );
        assert!(dropdown.is_open());
    }

    #[test]
    fn test_location_check_closes_and_uncheck_clears() {
        let mut dropdown = FilterDropdown::new(DropdownKind::Location, Some(&store())).unwrap();
        dropdown.open();
        assert_eq!(
            dropdown.choose("Tokyo", true),
            Event::UpdateFilter(FilterUpdate::Location("Tokyo".into()))
        );
        assert!(!dropdown.is_open());
        assert_eq!(
            dropdown.choose("Tokyo", false),
            Event::UpdateFilter(FilterUpdate::Location(String::new()))
        );
    }

    #[test]
    fn test_view_marks_selection() {
        let dropdown = FilterDropdown::new(DropdownKind::Topics, Some(&store())).unwrap();
        let criteria = FilterCriteria {
            topics: vec!["rust".into()],
            ..FilterCriteria::default()
        };
        let view = dropdown.view(&criteria);
        assert_eq!(view.badge, 1);
        assert!(view.show_clear);
        assert!(!view.options[0].checked);
        assert!(view.options[1].checked);
        assert_eq!(dropdown.clear(), Event::ClearFilter(FilterField::Topics));
    }

    #[test]
    fn test_click_outside_closes() {
        let mut dropdown = FilterDropdown::new(DropdownKind::Location, Some(&store())).unwrap();
        dropdown.toggle();
        dropdown.on_click_outside();
        assert!(!dropdown.is_open());
    }
}
