//! Filterable item domain model.
//!
//! A [`FilterableItem`] is one listable entity (an event) as serialized by the
//! server into the listing container. Only the search- and filter-relevant fields
//! are interpreted; `venue`, `poster` and `slug` pass through untouched so the
//! filtered payload handed back to the page keeps everything it was given.

use serde::{Deserialize, Serialize};

use super::error::Result;

/// One listable record with search/filter-relevant fields.
///
/// `id` is unique within a list for the lifetime of one page load. The list
/// itself is immutable after the initial load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterableItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO-ish date string. Missing dates deserialize as empty and sort as invalid.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl FilterableItem {
    /// Creates an item with only the required fields set.
    ///
    /// # Examples
    ///
    /// ```
    /// use events_filter::FilterableItem;
    ///
    /// let item = FilterableItem::new("1", "Intro to Go", "2024-01-01")
    ///     .with_topics(["go"])
    ///     .with_location("Osaka");
    /// assert_eq!(item.topics, vec!["go"]);
    /// assert_eq!(item.location.as_deref(), Some("Osaka"));
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            date: date.into(),
            topics: Vec::new(),
            location: None,
            venue: None,
            poster: None,
            slug: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Returns `true` if the item carries at least one of `selected`.
    #[must_use]
    pub fn has_any_topic(&self, selected: &[String]) -> bool {
        self.topics.iter().any(|topic| selected.contains(topic))
    }

    /// Case-insensitive exact comparison against the item's location.
    ///
    /// Items without a location never match.
    #[must_use]
    pub fn location_matches(&self, location: &str) -> bool {
        self.location
            .as_deref()
            .is_some_and(|own| own.to_lowercase() == location.to_lowercase())
    }
}

/// Parses the JSON item array the server embeds in the listing container.
///
/// # Errors
///
/// Returns [`FilterError::Json`](super::FilterError::Json) if the payload is not
/// an array of items.
pub fn parse_items(json: &str) -> Result<Vec<FilterableItem>> {
    let items: Vec<FilterableItem> = serde_json::from_str(json)?;
    tracing::debug!(count = items.len(), "parsed filterable items");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_with_optional_fields_missing() {
        let json = r#"[
            {"id": "1", "title": "Intro to Go", "date": "2024-01-01", "topics": ["go"], "location": "Osaka"},
            {"id": "2", "title": "Undated"}
        ]"#;
        let items = parse_items(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].topics, vec!["go"]);
        assert!(items[1].date.is_empty());
        assert!(items[1].topics.is_empty());
        assert!(items[1].location.is_none());
    }

    #[test]
    fn test_passthrough_fields_survive_round_trip() {
        let json = r#"[{"id": "1", "title": "t", "date": "2024-01-01", "venue": {"name": "Hall"}, "poster": "p.png", "slug": "t"}]"#;
        let items = parse_items(json).unwrap();
        let back = serde_json::to_value(&items).unwrap();
        assert_eq!(back[0]["venue"]["name"], "Hall");
        assert_eq!(back[0]["poster"], "p.png");
        assert_eq!(back[0]["slug"], "t");
    }

    #[test]
    fn test_parse_items_rejects_non_array() {
        assert!(parse_items(r#"{"id": "1"}"#).is_err());
    }

    #[test]
    fn test_location_matches_is_case_insensitive_and_exact() {
        let item = FilterableItem::new("1", "t", "2024-01-01").with_location("Tokyo");
        assert!(item.location_matches("tokyo"));
        assert!(item.location_matches("TOKYO"));
        assert!(!item.location_matches("Tok"));
        assert!(!FilterableItem::new("2", "t", "2024-01-01").location_matches("tokyo"));
    }

    #[test]
    fn test_has_any_topic() {
        let item = FilterableItem::new("1", "t", "2024-01-01").with_topics(["go", "rust"]);
        assert!(item.has_any_topic(&["rust".to_string(), "zig".to_string()]));
        assert!(!item.has_any_topic(&["zig".to_string()]));
        assert!(!item.has_any_topic(&[]));
    }
}
