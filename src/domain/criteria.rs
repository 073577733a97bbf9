//! Filter criteria and the tagged mutation commands that change them.
//!
//! [`FilterCriteria`] is the complete set of user-selected filter and sort values
//! at a point in time. It is only ever changed through [`FilterUpdate`],
//! [`FilterField`] and [`ActiveFilter`] commands (or replaced wholesale when the
//! browser navigates back/forward), so every mutation path is an exhaustive
//! `match` rather than a branch on a field-name string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Date sort direction. Always one of the two variants once initialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Newest first.
    #[default]
    #[serde(rename = "date-desc")]
    DateDesc,
    /// Oldest first.
    #[serde(rename = "date-asc")]
    DateAsc,
}

impl SortOrder {
    /// Wire value used in query strings and sort option lists.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateDesc => "date-desc",
            Self::DateAsc => "date-asc",
        }
    }

    /// Parses a wire value, returning `None` for anything unrecognised.
    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "date-desc" => Some(Self::DateDesc),
            "date-asc" => Some(Self::DateAsc),
            _ => None,
        }
    }

    /// Parses a wire value, falling back to [`SortOrder::DateDesc`].
    ///
    /// # Examples
    ///
    /// ```
    /// use events_filter::SortOrder;
    ///
    /// assert_eq!(SortOrder::parse_or_default("date-asc"), SortOrder::DateAsc);
    /// assert_eq!(SortOrder::parse_or_default("name-asc"), SortOrder::DateDesc);
    /// ```
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        Self::from_param(value).unwrap_or_else(|| {
            tracing::debug!(value = %value, "unrecognised sort value, using date-desc");
            Self::default()
        })
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's current filter and sort selection.
///
/// Empty `search`, `topics` and `location` mean "no filter". `topics` behaves as
/// an ordered set: values are unique and keep their selection order so the
/// serialized query string is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search: String,
    pub topics: Vec<String>,
    pub location: String,
    pub sort: SortOrder,
}

/// A single mutation of one criteria field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    /// Replaces the search text.
    Search(String),
    /// Replaces the whole topic set. Empty names are dropped.
    Topics(Vec<String>),
    /// Adds the topic if absent, removes it if present. An empty name is a no-op.
    ToggleTopic(String),
    /// Replaces the location (empty clears it).
    Location(String),
    /// Replaces the sort order.
    Sort(SortOrder),
}

/// Identifies one criteria field for [`FilterCriteria::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Search,
    Topics,
    Location,
    Sort,
}

/// One removable "active filter" chip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActiveFilter {
    Search(String),
    Topic(String),
    Location(String),
}

impl ActiveFilter {
    /// Chip kind as displayed (`search`, `topic`, `location`).
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Search(_) => "search",
            Self::Topic(_) => "topic",
            Self::Location(_) => "location",
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Search(v) | Self::Topic(v) | Self::Location(v) => v,
        }
    }
}

/// The universe of selectable values, supplied by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailableFilters {
    pub topics: Vec<String>,
    pub locations: Vec<String>,
}

/// One entry of the sort select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    pub value: SortOrder,
    pub label: String,
}

impl SortOption {
    /// The two date options in display order.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self {
                value: SortOrder::DateDesc,
                label: "Newest first".to_string(),
            },
            Self {
                value: SortOrder::DateAsc,
                label: "Oldest first".to_string(),
            },
        ]
    }
}

impl FilterCriteria {
    /// Returns `true` if nothing narrows or reorders the default listing.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }

    /// Returns `true` if the active-filters bar should be shown.
    ///
    /// A non-default sort counts as active even though it has no chip.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.is_default()
    }

    /// Chips for every active search, topic and location value, in that order.
    #[must_use]
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut chips = Vec::with_capacity(self.topics.len() + 2);
        if !self.search.is_empty() {
            chips.push(ActiveFilter::Search(self.search.clone()));
        }
        chips.extend(self.topics.iter().cloned().map(ActiveFilter::Topic));
        if !self.location.is_empty() {
            chips.push(ActiveFilter::Location(self.location.clone()));
        }
        chips
    }

    /// Applies one update. Returns `true` if the criteria changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use events_filter::{FilterCriteria, FilterUpdate};
    ///
    /// let mut criteria = FilterCriteria::default();
    /// assert!(criteria.apply(FilterUpdate::ToggleTopic("go".into())));
    /// assert_eq!(criteria.topics, vec!["go"]);
    /// assert!(criteria.apply(FilterUpdate::ToggleTopic("go".into())));
    /// assert!(criteria.topics.is_empty());
    /// ```
    pub fn apply(&mut self, update: FilterUpdate) -> bool {
        let before = self.clone();
        match update {
            FilterUpdate::Search(value) => self.search = value,
            FilterUpdate::Location(value) => self.location = value,
            FilterUpdate::Sort(order) => self.sort = order,
            FilterUpdate::Topics(values) => {
                let mut topics: Vec<String> = Vec::with_capacity(values.len());
                for value in values {
                    if !value.is_empty() && !topics.contains(&value) {
                        topics.push(value);
                    }
                }
                self.topics = topics;
            }
            FilterUpdate::ToggleTopic(topic) => {
                if topic.is_empty() {
                    return false;
                }
                if let Some(pos) = self.topics.iter().position(|t| t == &topic) {
                    self.topics.remove(pos);
                } else {
                    self.topics.push(topic);
                }
            }
        }
        *self != before
    }

    /// Resets one field to its empty/default value. Returns `true` if it changed.
    pub fn clear(&mut self, field: FilterField) -> bool {
        match field {
            FilterField::Search => !std::mem::take(&mut self.search).is_empty(),
            FilterField::Topics => !std::mem::take(&mut self.topics).is_empty(),
            FilterField::Location => !std::mem::take(&mut self.location).is_empty(),
            FilterField::Sort => std::mem::take(&mut self.sort) != SortOrder::default(),
        }
    }

    /// Resets every field. Returns `true` if anything changed.
    pub fn clear_all(&mut self) -> bool {
        let changed = !self.is_default();
        *self = Self::default();
        changed
    }

    /// Removes one chip value. Scalar fields are cleared entirely.
    pub fn remove(&mut self, chip: &ActiveFilter) -> bool {
        match chip {
            ActiveFilter::Search(_) => self.clear(FilterField::Search),
            ActiveFilter::Location(_) => self.clear(FilterField::Location),
            ActiveFilter::Topic(topic) => {
                let before = self.topics.len();
                self.topics.retain(|t| t != topic);
                self.topics.len() != before
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria_with(search: &str, topics: &[&str], location: &str, sort: SortOrder) -> FilterCriteria {
        FilterCriteria {
            search: search.to_string(),
            topics: topics.iter().map(|t| (*t).to_string()).collect(),
            location: location.to_string(),
            sort,
        }
    }

    #[test]
    fn test_default_is_empty_with_date_desc() {
        let c = FilterCriteria::default();
        assert!(c.search.is_empty());
        assert!(c.topics.is_empty());
        assert!(c.location.is_empty());
        assert_eq!(c.sort, SortOrder::DateDesc);
        assert!(!c.has_active_filters());
    }

    #[test]
    fn test_scalar_updates_replace() {
        let mut c = FilterCriteria::default();
        assert!(c.apply(FilterUpdate::Search("rust".into())));
        assert!(c.apply(FilterUpdate::Search("go".into())));
        assert_eq!(c.search, "go");
        assert!(c.apply(FilterUpdate::Location("Tokyo".into())));
        assert_eq!(c.location, "Tokyo");
        assert!(c.apply(FilterUpdate::Sort(SortOrder::DateAsc)));
        assert!(!c.apply(FilterUpdate::Sort(SortOrder::DateAsc)));
    }

    #[test]
    fn test_topics_replace_dedupes_and_keeps_order() {
        let mut c = FilterCriteria::default();
        c.apply(FilterUpdate::Topics(vec!["b".into(), "a".into(), "b".into()]));
        assert_eq!(c.topics, vec!["b", "a"]);
    }

    #[test]
    fn test_toggle_topic_appends_then_removes() {
        let mut c = criteria_with("", &["go"], "", SortOrder::DateDesc);
        c.apply(FilterUpdate::ToggleTopic("rust".into()));
        assert_eq!(c.topics, vec!["go", "rust"]);
        c.apply(FilterUpdate::ToggleTopic("go".into()));
        assert_eq!(c.topics, vec!["rust"]);
    }

    #[test]
    fn test_empty_topic_names_are_dropped() {
        let mut c = FilterCriteria::default();
        assert!(!c.apply(FilterUpdate::ToggleTopic(String::new())));
        assert!(c.topics.is_empty());

        assert!(c.apply(FilterUpdate::Topics(vec![String::new(), "go".into(), String::new()])));
        assert_eq!(c.topics, vec!["go"]);
        assert!(!c.apply(FilterUpdate::ToggleTopic(String::new())));
        assert_eq!(c.topics, vec!["go"]);
    }

    #[test]
    fn test_clear_resets_single_field() {
        let mut c = criteria_with("x", &["go"], "Tokyo", SortOrder::DateAsc);
        assert!(c.clear(FilterField::Topics));
        assert!(c.topics.is_empty());
        assert_eq!(c.search, "x");
        assert!(c.clear(FilterField::Sort));
        assert_eq!(c.sort, SortOrder::DateDesc);
        assert!(!c.clear(FilterField::Sort));
    }

    #[test]
    fn test_clear_all() {
        let mut c = criteria_with("x", &["go"], "Tokyo", SortOrder::DateAsc);
        assert!(c.clear_all());
        assert!(c.is_default());
        assert!(!c.clear_all());
    }

    #[test]
    fn test_remove_chip() {
        let mut c = criteria_with("x", &["go", "rust"], "Tokyo", SortOrder::DateDesc);
        assert!(c.remove(&ActiveFilter::Topic("go".into())));
        assert_eq!(c.topics, vec!["rust"]);
        assert!(!c.remove(&ActiveFilter::Topic("go".into())));
        assert!(c.remove(&ActiveFilter::Search("anything".into())));
        assert!(c.search.is_empty());
        assert!(c.remove(&ActiveFilter::Location("Tokyo".into())));
        assert!(c.location.is_empty());
    }

    #[test]
    fn test_active_filters_order_and_sort_only_activity() {
        let c = criteria_with("x", &["go"], "Tokyo", SortOrder::DateDesc);
        assert_eq!(
            c.active_filters(),
            vec![
                ActiveFilter::Search("x".into()),
                ActiveFilter::Topic("go".into()),
                ActiveFilter::Location("Tokyo".into()),
            ]
        );

        let sort_only = criteria_with("", &[], "", SortOrder::DateAsc);
        assert!(sort_only.active_filters().is_empty());
        assert!(sort_only.has_active_filters());
    }

    #[test]
    fn test_criteria_serde_uses_wire_sort_values() {
        let c = criteria_with("x", &["go"], "", SortOrder::DateAsc);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["sort"], "date-asc");
        let back: FilterCriteria = serde_json::from_value(json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_partial_payload_fills_defaults() {
        let c: FilterCriteria = serde_json::from_str(r#"{"search": "go"}"#).unwrap();
        assert_eq!(c.search, "go");
        assert_eq!(c.sort, SortOrder::DateDesc);
    }
}
