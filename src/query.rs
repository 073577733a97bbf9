//! Query-string encoding of [`FilterCriteria`].
//!
//! The public, bookmarkable keys are `search`, `topics` (comma-separated),
//! `location` and `sort`. A key is only written when its value differs from the
//! default, and an absent key reads back as the default, so parsing a URL built
//! by [`build_url`] yields the criteria it was built from.

use url::form_urlencoded::{self, Serializer};
use url::Url;

use crate::domain::{FilterCriteria, Result, SortOrder};

/// Query keys owned by the filter engine. Every other key is preserved.
pub const FILTER_KEYS: [&str; 4] = ["search", "topics", "location", "sort"];

/// Parses filter criteria from a raw query string (with or without `?`).
///
/// The first occurrence of each key wins. Empty topic segments and duplicate
/// topics are dropped; an unrecognised `sort` falls back to `date-desc`.
///
/// # Examples
///
/// ```
/// use events_filter::query::parse_query;
/// use events_filter::SortOrder;
///
/// let criteria = parse_query("?topics=go,,rust&sort=date-asc&view=grid");
/// assert_eq!(criteria.topics, vec!["go", "rust"]);
/// assert_eq!(criteria.sort, SortOrder::DateAsc);
/// ```
#[must_use]
pub fn parse_query(query: &str) -> FilterCriteria {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut criteria = FilterCriteria::default();
    let mut seen = [false; FILTER_KEYS.len()];

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let Some(slot) = FILTER_KEYS.iter().position(|k| *k == key) else {
            continue;
        };
        if seen[slot] {
            continue;
        }
        seen[slot] = true;

        match slot {
            0 => criteria.search = value.into_owned(),
            1 => {
                for topic in value.split(',').filter(|t| !t.is_empty()) {
                    if !criteria.topics.iter().any(|t| t == topic) {
                        criteria.topics.push(topic.to_string());
                    }
                }
            }
            2 => criteria.location = value.into_owned(),
            _ => criteria.sort = SortOrder::parse_or_default(&value),
        }
    }

    criteria
}

/// Parses filter criteria from an absolute URL's query string.
///
/// # Errors
///
/// Returns [`FilterError::Url`](crate::FilterError::Url) if `href` is not an
/// absolute URL.
pub fn parse_url(href: &str) -> Result<FilterCriteria> {
    let url = Url::parse(href)?;
    Ok(parse_query(url.query().unwrap_or_default()))
}

/// Appends the non-default filter keys, in canonical order, to `serializer`.
fn append_filters<T: form_urlencoded::Target>(serializer: &mut Serializer<'_, T>, criteria: &FilterCriteria) {
    if !criteria.search.is_empty() {
        serializer.append_pair("search", &criteria.search);
    }
    if !criteria.topics.is_empty() {
        serializer.append_pair("topics", &criteria.topics.join(","));
    }
    if !criteria.location.is_empty() {
        serializer.append_pair("location", &criteria.location);
    }
    if criteria.sort != SortOrder::default() {
        serializer.append_pair("sort", criteria.sort.as_str());
    }
}

/// Encodes only the filter keys as a query string without a leading `?`.
///
/// Returns an empty string for default criteria.
#[must_use]
pub fn to_query_string(criteria: &FilterCriteria) -> String {
    let mut serializer = Serializer::new(String::new());
    append_filters(&mut serializer, criteria);
    serializer.finish()
}

/// Rebuilds `current_href` with its filter keys replaced by `criteria`.
///
/// Non-filter keys (e.g. `view`) keep their order and the fragment is
/// untouched. When no keys remain the `?` is dropped entirely.
///
/// # Errors
///
/// Returns [`FilterError::Url`](crate::FilterError::Url) if `current_href` is
/// not an absolute URL.
///
/// # Examples
///
/// ```
/// use events_filter::query::build_url;
/// use events_filter::{FilterCriteria, FilterUpdate};
///
/// let mut criteria = FilterCriteria::default();
/// criteria.apply(FilterUpdate::Search("rust meetup".into()));
/// let url = build_url("https://example.com/events?view=grid&search=old", &criteria)?;
/// assert_eq!(url, "https://example.com/events?view=grid&search=rust+meetup");
/// # Ok::<(), events_filter::FilterError>(())
/// ```
pub fn build_url(current_href: &str, criteria: &FilterCriteria) -> Result<String> {
    let mut url = Url::parse(current_href)?;

    let preserved: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !FILTER_KEYS.contains(&&**key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if preserved.is_empty() && to_query_string(criteria).is_empty() {
        url.set_query(None);
    } else {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        pairs.extend_pairs(preserved);
        append_filters(&mut pairs, criteria);
    }

    Ok(url.to_string())
}
