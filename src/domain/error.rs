//! Error types for the events filter engine.
//!
//! This module defines the centralized error type [`FilterError`] and a type alias
//! [`Result`] used throughout the crate. Filtering itself never fails; errors only
//! surface at the edges (wiring widgets to a store, parsing URLs, JSON payloads
//! and configuration).

use thiserror::Error;

/// The main error type for filter engine operations.
///
/// Most variants wrap errors from external crates using `#[from]` for automatic
/// conversion. [`FilterError::MissingProvider`] is the one integration error raised
/// by the engine itself.
///
/// # Examples
///
/// ```
/// use events_filter::FilterError;
///
/// fn lookup(found: bool) -> Result<(), FilterError> {
///     if found {
///         Ok(())
///     } else {
///         Err(FilterError::MissingProvider { widget: "SortSelect" })
///     }
/// }
/// assert!(lookup(false).is_err());
/// ```
#[derive(Debug, Error)]
pub enum FilterError {
    /// A widget was used without an enclosing filter store.
    ///
    /// Signals a wiring bug rather than bad data or user input, so it is raised
    /// to the caller immediately.
    #[error("{widget} must be used within EventFilterProvider")]
    MissingProvider {
        /// Name of the widget that looked up the store.
        widget: &'static str,
    },

    /// The current location could not be parsed as an absolute URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// An item list, filter payload or history state was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Reading a configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for filter engine operations.
pub type Result<T> = std::result::Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_provider_message_names_widget() {
        let err = FilterError::MissingProvider { widget: "SearchInput" };
        assert_eq!(
            err.to_string(),
            "SearchInput must be used within EventFilterProvider"
        );
    }

    #[test]
    fn test_url_error_converts() {
        let err: FilterError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, FilterError::Url(_)));
    }

    #[test]
    fn test_each_variant_comes_from_a_real_failure() {
        let failures: Vec<FilterError> = vec![
            crate::ui::components::use_events_filter(None, "SortSelect").unwrap_err(),
            crate::query::parse_url("/events?topics=go").unwrap_err(),
            crate::domain::parse_items("{").unwrap_err(),
            crate::Config::from_toml_str("debounce_ms = \"soon\"").unwrap_err(),
            crate::Config::from_file("/nonexistent/events-filter.toml").unwrap_err(),
        ];
        let kinds: Vec<&str> = failures
            .iter()
            .map(|err| match err {
                FilterError::MissingProvider { .. } => "provider",
                FilterError::Url(_) => "url",
                FilterError::Json(_) => "json",
                FilterError::Toml(_) => "toml",
                FilterError::Io(_) => "io",
            })
            .collect();
        assert_eq!(kinds, vec!["provider", "url", "json", "toml", "io"]);
    }
}
