//! The filter pipeline: search, topics, location, then date sort.
//!
//! [`filter_items`] is pure and deterministic for the same items, criteria and
//! index. The search index is requested lazily through a closure so a caller can
//! defer building it until the first non-empty search.

use crate::domain::{FilterCriteria, FilterableItem};

use super::dates::{compare_timestamps, parse_timestamp};
use super::fuzzy::{SearchIndex, DEFAULT_THRESHOLD};

/// Computes the filtered and sorted view of `items` under `criteria`.
///
/// # Algorithm
///
/// 1. **Search**: if `criteria.search` is non-empty, keep fuzzy hits in relevance
///    order (the final sort overrides that order except between equal dates)
/// 2. **Topics**: keep items carrying any selected topic
/// 3. **Location**: keep items whose location equals the selection ignoring case
/// 4. **Sort**: stable sort by date in the selected direction, invalid dates last
///
/// # Examples
///
/// ```
/// use events_filter::engine::matcher::filter_items;
/// use events_filter::engine::fuzzy::SearchIndex;
/// use events_filter::{FilterCriteria, FilterableItem};
///
/// let items = vec![
///     FilterableItem::new("1", "Intro to Go", "2024-01-01"),
///     FilterableItem::new("2", "Rust Basics", "2024-02-01"),
/// ];
/// let index = SearchIndex::build(&items);
/// let out = filter_items(&items, &FilterCriteria::default(), || &index);
/// let ids: Vec<&str> = out.iter().map(|item| item.id.as_str()).collect();
/// assert_eq!(ids, vec!["2", "1"]);
/// ```
pub fn filter_items<'a, F>(
    items: &'a [FilterableItem],
    criteria: &FilterCriteria,
    index: F,
) -> Vec<&'a FilterableItem>
where
    F: FnOnce() -> &'a SearchIndex,
{
    let _span = tracing::debug_span!(
        "filter_items",
        total_items = items.len(),
        search_len = criteria.search.len(),
        topics = criteria.topics.len(),
        has_location = !criteria.location.is_empty(),
        sort = %criteria.sort
    )
    .entered();

    // A blank query searches nothing; surrounding whitespace is trimmed by the index.
    let mut filtered: Vec<&FilterableItem> = if criteria.search.trim().is_empty() {
        items.iter().collect()
    } else {
        index()
            .search(&criteria.search, DEFAULT_THRESHOLD)
            .into_iter()
            .filter_map(|hit| items.get(hit.index))
            .collect()
    };

    if !criteria.topics.is_empty() {
        filtered.retain(|item| item.has_any_topic(&criteria.topics));
    }

    if !criteria.location.is_empty() {
        filtered.retain(|item| item.location_matches(&criteria.location));
    }

    let mut keyed: Vec<(Option<i64>, &FilterableItem)> = filtered
        .into_iter()
        .map(|item| (parse_timestamp(&item.date), item))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_timestamps(*a, *b, criteria.sort));

    tracing::debug!(filtered_count = keyed.len(), "filters applied");

    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Convenience form of [`filter_items`] that builds a throwaway index.
///
/// Prefer the store, which keeps its index across recomputations.
#[must_use]
pub fn filter(items: &[FilterableItem], criteria: &FilterCriteria) -> Vec<FilterableItem> {
    let index = SearchIndex::build(items);
    filter_items(items, criteria, || &index)
        .into_iter()
        .cloned()
        .collect()
}
