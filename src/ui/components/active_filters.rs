//! Active filter chips with per-chip removal and "Clear All".

use crate::app::Event;
use crate::domain::{ActiveFilter, FilterCriteria};
use crate::ui::helpers::{chip_label, chip_remove_label};
use crate::ui::viewmodel::{ActiveFiltersInfo, ChipInfo};

pub const CLEAR_ALL_LABEL: &str = "Clear All";

/// Stateless chip row; everything derives from the criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveFilters;

impl ActiveFilters {
    /// Shown whenever the listing differs from the default, including sort.
    #[must_use]
    pub fn is_visible(criteria: &FilterCriteria) -> bool {
        criteria.has_active_filters()
    }

    #[must_use]
    pub fn chips(criteria: &FilterCriteria) -> Vec<ChipInfo> {
        criteria
            .active_filters()
            .into_iter()
            .map(|filter| ChipInfo {
                label: chip_label(&filter),
                remove_label: chip_remove_label(&filter),
                filter,
            })
            .collect()
    }

    #[must_use]
    pub fn remove(chip: ActiveFilter) -> Event {
        Event::RemoveFilterValue(chip)
    }

    #[must_use]
    pub const fn clear_all() -> Event {
        Event::ClearAllFilters
    }

    #[must_use]
    pub fn view(criteria: &FilterCriteria) -> ActiveFiltersInfo {
        ActiveFiltersInfo {
            visible: Self::is_visible(criteria),
            chips: Self::chips(criteria),
            clear_all_label: CLEAR_ALL_LABEL,
        }
    }
}
