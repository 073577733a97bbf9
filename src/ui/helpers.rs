//! Shared display formatting helpers.
//!
//! Small string builders used by the view models, the widgets and the
//! presentation bridge so every surface labels things the same way.
//!
//! # Example
//!
//! ```rust
//! use events_filter::ui::helpers::{chip_label, count_label};
//! use events_filter::ActiveFilter;
//!
//! assert_eq!(count_label(3, "events"), "3 events");
//! assert_eq!(chip_label(&ActiveFilter::Topic("rust".into())), "topic: rust");
//! ```

use crate::app::ViewMode;
use crate::domain::{ActiveFilter, FilterCriteria};
use crate::query;

/// Result count text, e.g. `"12 events"`.
#[must_use]
pub fn count_label(count: usize, noun: &str) -> String {
    format!("{count} {noun}")
}

/// Visible chip text, e.g. `"location: Tokyo"`.
#[must_use]
pub fn chip_label(chip: &ActiveFilter) -> String {
    format!("{}: {}", chip.kind(), chip.value())
}

/// Accessible name for a chip's remove button.
#[must_use]
pub fn chip_remove_label(chip: &ActiveFilter) -> String {
    format!("Remove {} filter: {}", chip.kind(), chip.value())
}

/// Link to `view` under `base_path` carrying the filter query string.
///
/// Default criteria produce a bare route with no `?`.
#[must_use]
pub fn view_href(view: ViewMode, base_path: &str, criteria: &FilterCriteria) -> String {
    let path = view.path(base_path);
    let query = query::to_query_string(criteria);
    if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FilterUpdate, SortOrder};

    #[test]
    fn test_chip_remove_label() {
        let chip = ActiveFilter::Search("go".into());
        assert_eq!(chip_remove_label(&chip), "Remove search filter: go");
    }

    #[test]
    fn test_view_href_without_filters() {
        assert_eq!(view_href(ViewMode::Grid, "/events", &FilterCriteria::default()), "/events");
    }

    #[test]
    fn test_view_href_carries_query() {
        let mut criteria = FilterCriteria::default();
        criteria.apply(FilterUpdate::Topics(vec!["go".into(), "rust".into()]));
        criteria.apply(FilterUpdate::Sort(SortOrder::DateAsc));
        assert_eq!(
            view_href(ViewMode::Compact, "/events", &criteria),
            "/events/compact?topics=go%2Crust&sort=date-asc"
        );
    }
}
