//! View model types representing the renderable filter bar.
//!
//! View models are immutable snapshots computed from the [`FilterStore`]
//! (`FilterStore::compute_viewmodel`) and consumed by whatever renders the
//! filter bar. They contain no business logic, only display-ready data:
//! labels, checked flags, hrefs and visibility.
//!
//! # Example
//!
//! ```rust
//! use events_filter::app::{FilterStore, ViewMode};
//! use events_filter::{AvailableFilters, FilterCriteria, SortOption};
//!
//! let store = FilterStore::new(Vec::new(), AvailableFilters::default(), SortOption::defaults(), FilterCriteria::default());
//! let vm = store.compute_viewmodel(ViewMode::Grid, "/events");
//! assert!(vm.topics.is_none());
//! assert!(!vm.active_filters.visible);
//! ```
//!
//! [`FilterStore`]: crate::app::FilterStore

use crate::app::ViewMode;
use crate::domain::{ActiveFilter, SortOrder};

/// Complete filter bar view model.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBarViewModel {
    pub search: SearchBarInfo,

    /// Topics dropdown, absent when there are no topics to choose from.
    pub topics: Option<DropdownInfo>,

    /// Location dropdown, absent when there are no locations to choose from.
    pub location: Option<DropdownInfo>,

    pub sort: SortSelectInfo,

    pub view_modes: Vec<ViewModeLink>,

    pub active_filters: ActiveFiltersInfo,

    /// Number of items currently passing the filters.
    pub result_count: usize,
}

/// Search input display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Committed search text.
    pub query: String,
    pub placeholder: &'static str,
    pub clear_label: &'static str,
    /// Whether the clear button is shown (non-empty value).
    pub show_clear: bool,
}

/// One filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownInfo {
    pub label: &'static str,
    /// Checkboxes when `true`, radios otherwise.
    pub multiple: bool,
    pub options: Vec<OptionInfo>,
    /// Selection count shown next to the label; zero hides the badge.
    pub badge: usize,
    /// Whether the "Clear" entry is shown.
    pub show_clear: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionInfo {
    pub value: String,
    pub checked: bool,
}

/// Sort select display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSelectInfo {
    pub selected: SortOrder,
    pub options: Vec<SortOptionInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptionInfo {
    pub value: &'static str,
    pub label: String,
}

/// Link to one of the listing views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModeLink {
    pub view: ViewMode,
    pub label: &'static str,
    /// Route plus the current filter query string.
    pub href: String,
    pub is_current: bool,
}

/// Active filter chips row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFiltersInfo {
    /// Hidden when nothing differs from the default listing.
    pub visible: bool,
    pub chips: Vec<ChipInfo>,
    pub clear_all_label: &'static str,
}

/// One removable chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipInfo {
    /// `"{kind}: {value}"`.
    pub label: String,
    /// Accessible name of the remove button.
    pub remove_label: String,
    /// What removing this chip removes.
    pub filter: ActiveFilter,
}
