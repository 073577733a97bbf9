//! Filter state store.
//!
//! This module defines [`FilterStore`], the single source of truth for the
//! current [`FilterCriteria`], the immutable item list, and the filtered output
//! derived from them.
//!
//! # State Components
//!
//! - **Items**: The fully-loaded list, shared and never mutated
//! - **Criteria**: The current search/topics/location/sort selection
//! - **Filtered Items**: Output of the match engine for the current criteria
//! - **Search Index**: Lowercased field text, built on the first non-empty search
//!   and kept until the item list is swapped for a different one
//! - **Mounted**: Whether the initial mount has settled (URL writes start after it)
//!
//! # Example
//!
//! ```rust
//! use events_filter::app::FilterStore;
//! use events_filter::{AvailableFilters, FilterCriteria, FilterUpdate, FilterableItem, SortOption};
//!
//! let items = vec![FilterableItem::new("1", "Intro to Go", "2024-01-01").with_topics(["go"])];
//! let mut store = FilterStore::new(items, AvailableFilters::default(), SortOption::defaults(), FilterCriteria::default());
//! assert!(store.update_filter(FilterUpdate::ToggleTopic("rust".into())));
//! assert!(store.filtered_items().is_empty());
//! ```

use std::cell::OnceCell;
use std::sync::Arc;

use crate::domain::{
    ActiveFilter, AvailableFilters, FilterCriteria, FilterField, FilterUpdate, FilterableItem,
    SortOption,
};
use crate::app::{DropdownKind, ViewMode};
use crate::engine::{filter_items, SearchIndex};
use crate::ui::components::search::{CLEAR_SEARCH_LABEL, SEARCH_PLACEHOLDER};
use crate::ui::components::{ActiveFilters, FilterDropdown, SortSelect, ViewModeSelector};
use crate::ui::viewmodel::{FilterBarViewModel, SearchBarInfo};

/// Central filter state container.
///
/// Mutated only through the named operations below; each returns whether the
/// criteria changed and recomputes the filtered output when they did.
#[derive(Debug, Clone)]
pub struct FilterStore {
    items: Arc<[FilterableItem]>,
    available_filters: AvailableFilters,
    sort_options: Vec<SortOption>,
    criteria: FilterCriteria,
    filtered_items: Vec<FilterableItem>,
    search_index: OnceCell<SearchIndex>,
    mounted: bool,
}

impl FilterStore {
    /// Creates a store and computes the initial filtered output.
    #[must_use]
    pub fn new(
        items: impl Into<Arc<[FilterableItem]>>,
        available_filters: AvailableFilters,
        sort_options: Vec<SortOption>,
        criteria: FilterCriteria,
    ) -> Self {
        let mut store = Self {
            items: items.into(),
            available_filters,
            sort_options,
            criteria,
            filtered_items: Vec::new(),
            search_index: OnceCell::new(),
            mounted: false,
        };
        store.recompute();
        store
    }

    #[must_use]
    pub fn items(&self) -> &[FilterableItem] {
        &self.items
    }

    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn filtered_items(&self) -> &[FilterableItem] {
        &self.filtered_items
    }

    #[must_use]
    pub const fn available_filters(&self) -> &AvailableFilters {
        &self.available_filters
    }

    #[must_use]
    pub fn sort_options(&self) -> &[SortOption] {
        &self.sort_options
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns `true` once a search has forced the index to be built.
    #[must_use]
    pub fn is_index_built(&self) -> bool {
        self.search_index.get().is_some()
    }

    pub(crate) fn mark_mounted(&mut self) {
        self.mounted = true;
    }

    /// Applies one field update (`updateFilter`).
    pub fn update_filter(&mut self, update: FilterUpdate) -> bool {
        let changed = self.criteria.apply(update);
        self.finish_mutation(changed)
    }

    /// Resets one field to its default (`clearFilter`).
    pub fn clear_filter(&mut self, field: FilterField) -> bool {
        let changed = self.criteria.clear(field);
        self.finish_mutation(changed)
    }

    /// Resets every field (`clearAllFilters`).
    pub fn clear_all_filters(&mut self) -> bool {
        let changed = self.criteria.clear_all();
        self.finish_mutation(changed)
    }

    /// Removes one active-filter chip value (`removeFilterValue`).
    pub fn remove_filter_value(&mut self, chip: &ActiveFilter) -> bool {
        let changed = self.criteria.remove(chip);
        self.finish_mutation(changed)
    }

    /// Replaces the whole criteria atomically (back/forward navigation).
    pub fn replace_criteria(&mut self, criteria: FilterCriteria) -> bool {
        if self.criteria == criteria {
            return false;
        }
        self.criteria = criteria;
        self.finish_mutation(true)
    }

    /// Swaps the backing item list.
    ///
    /// The search index is dropped only when the new list is a different
    /// allocation; handing back the same `Arc` keeps it.
    pub fn replace_items(&mut self, items: Arc<[FilterableItem]>) {
        if !Arc::ptr_eq(&self.items, &items) {
            tracing::debug!(count = items.len(), "item list replaced, invalidating search index");
            self.items = items;
            self.search_index = OnceCell::new();
        }
        self.recompute();
    }

    fn finish_mutation(&mut self, changed: bool) -> bool {
        if changed {
            self.recompute();
        } else {
            tracing::trace!("criteria unchanged, skipping recompute");
        }
        changed
    }

    /// Re-runs the match engine for the current criteria.
    pub fn recompute(&mut self) {
        let filtered: Vec<FilterableItem> = filter_items(&self.items, &self.criteria, || {
            self.search_index.get_or_init(|| SearchIndex::build(&self.items))
        })
        .into_iter()
        .cloned()
        .collect();
        self.filtered_items = filtered;
    }

    /// Computes the filter bar view model for `current_view`.
    ///
    /// Dropdowns are omitted when there is nothing to choose from. View links
    /// are rooted at `base_path`.
    #[must_use]
    pub fn compute_viewmodel(&self, current_view: ViewMode, base_path: &str) -> FilterBarViewModel {
        let dropdown = |kind: DropdownKind| {
            let dropdown = FilterDropdown::for_store(kind, self);
            (!dropdown.options().is_empty()).then(|| dropdown.view(&self.criteria))
        };

        FilterBarViewModel {
            search: SearchBarInfo {
                query: self.criteria.search.clone(),
                placeholder: SEARCH_PLACEHOLDER,
                clear_label: CLEAR_SEARCH_LABEL,
                show_clear: !self.criteria.search.is_empty(),
            },
            topics: dropdown(DropdownKind::Topics),
            location: dropdown(DropdownKind::Location),
            sort: SortSelect::for_store(self).view(&self.criteria),
            view_modes: ViewModeSelector::new(current_view, base_path).links(&self.criteria),
            active_filters: ActiveFilters::view(&self.criteria),
            result_count: self.filtered_items.len(),
        }
    }
}
