//! Events Filter: a client-side filter engine for server-rendered event listings.
//!
//! The page is rendered once with every event in it. This crate provides:
//! - Fuzzy search over title, description, topics and location
//! - Topic (any-of) and location (exact, case-insensitive) filters
//! - Date sorting in either direction with invalid dates last
//! - Query-string sync with soft-navigation history and back/forward restore
//! - Deferred hide/reorder of the rendered list without re-rendering it

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Provider (provider.rs)                             │  ← Entry point
//! │  - Initial criteria resolution                      │
//! │  - Action execution (notify, history push)          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Filter store mutations                           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Engine        │   │ Query         │
//! │ (ui/)         │   │ (engine/)     │   │ (query.rs)    │
//! │ - Widgets     │   │ - Fuzzy index │   │ - Parse URL   │
//! │ - List bridge │   │ - Matching    │   │ - Build URL   │
//! │ - View models │   │ - Date order  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Location and history capabilities                │
//! │  - Error types (domain/error)                       │
//! │  - Item and criteria models                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Filter store with event/action model
//! - [`domain`]: Core domain types (items, criteria, errors)
//! - [`engine`]: Fuzzy search and the match pipeline
//! - [`query`]: Query-string encoding of criteria
//! - [`infrastructure`]: Location and history capabilities
//! - [`provider`]: Store owner wiring everything together
//! - [`ui`]: Widgets, view models and the list bridge
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! The listing container carries its settings as data attributes:
//!
//! ```html
//! <div data-collection="events"
//!      data-items='[{"id":"1","title":"Intro to Go","date":"2024-01-01"}]'
//!      data-available-filters='{"topics":["go"],"locations":["Osaka"]}'
//!      data-sort-options='[{"value":"date-desc","label":"Newest first"}]'
//!      data-debounce-ms="300"
//!      data-base-path="/events">
//! ```
//!
//! The same settings can be loaded from TOML with [`Config::from_file`].
//!
//! # Examples
//!
//! ```rust
//! use events_filter::infrastructure::MemoryHistory;
//! use events_filter::{initialize, Config, FilterUpdate, FilterableItem};
//!
//! let items = vec![
//!     FilterableItem::new("1", "Intro to Go", "2024-01-01").with_topics(["go"]),
//!     FilterableItem::new("2", "Rust Basics", "2024-02-01").with_topics(["rust"]),
//! ];
//! let history = MemoryHistory::new("https://example.com/events");
//! let mut provider = initialize(&Config::default(), items, history);
//!
//! provider.update_filter(FilterUpdate::Search("rust".into()));
//! assert_eq!(provider.store().filtered_items().len(), 1);
//! assert_eq!(provider.browser().current().url, "https://example.com/events?search=rust");
//! ```
//!
//! # Key Design Decisions
//!
//! ## Mount Without URL Write
//!
//! The initial mount never touches history, so query parameters supplied by
//! an incoming link survive intact until the user changes something.
//!
//! ## Deferred List Updates
//!
//! Store updates are synchronous, but element hiding and reordering wait for
//! the next animation frame and collapse to the latest result.
//!
//! ## Lazy Search Index
//!
//! The fuzzy index is built on the first non-empty search and reused for the
//! lifetime of the item list.

pub mod app;
pub mod domain;
pub mod engine;
pub mod infrastructure;
pub mod provider;
pub mod query;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, DropdownKind, Event, FilterStore, ViewMode};
pub use domain::{
    parse_items, ActiveFilter, AvailableFilters, FilterCriteria, FilterError, FilterField,
    FilterUpdate, FilterableItem, Result, SortOption, SortOrder,
};
pub use provider::{EventFilterProvider, FiltersObserver, ProviderProps};

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use infrastructure::{HistoryBackend, LocationProvider};

/// Listing configuration.
///
/// Usually parsed from the container's data attributes
/// ([`Config::from_dataset`]) or a TOML file ([`Config::from_file`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Noun used in the result count text (`"12 events"`). Default: `"events"`
    pub collection_noun: String,

    /// Search debounce in milliseconds. Default: 300
    pub debounce_ms: u64,

    /// Route of the grid view; other views live beneath it. Default: `"/events"`
    pub base_path: String,

    /// Tracing level. Options: `trace`, `debug`, `info`, `warn`, `error`.
    /// Default: `"info"`
    pub trace_level: Option<String>,

    pub available_filters: AvailableFilters,

    /// Sort select entries. Default: newest first, oldest first
    pub sort_options: Vec<SortOption>,

    /// When set, used instead of the URL on load.
    pub initial_filters: Option<FilterCriteria>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collection_noun: "events".to_string(),
            debounce_ms: ui::components::SEARCH_DEBOUNCE_MS,
            base_path: "/events".to_string(),
            trace_level: None,
            available_filters: AvailableFilters::default(),
            sort_options: SortOption::defaults(),
            initial_filters: None,
        }
    }
}

impl Config {
    /// Parses configuration from the listing container's data attributes.
    ///
    /// # Parsing Rules
    ///
    /// - `collection`: String → `collection_noun` (empty falls back to `events`)
    /// - `available-filters`: JSON `{topics, locations}`
    /// - `sort-options`: JSON `[{value, label}]` (empty falls back to defaults)
    /// - `initial-filters`: JSON criteria
    /// - `debounce-ms`: String → `u64` (falls back to 300 on parse error)
    /// - `base-path`, `trace-level`: String
    ///
    /// Every key falls back to its default when missing or unparseable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use events_filter::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("collection".to_string(), "talks".to_string());
    /// map.insert("debounce-ms".to_string(), "150".to_string());
    /// map.insert("available-filters".to_string(), r#"{"topics":["go"]}"#.to_string());
    ///
    /// let config = Config::from_dataset(&map);
    /// assert_eq!(config.collection_noun, "talks");
    /// assert_eq!(config.debounce_ms, 150);
    /// assert_eq!(config.available_filters.topics, vec!["go"]);
    /// ```
    #[must_use]
    pub fn from_dataset(dataset: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let collection_noun = dataset
            .get("collection")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or(defaults.collection_noun, String::from);

        let debounce_ms = dataset
            .get("debounce-ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.debounce_ms);

        let sort_options = parse_json_attr::<Vec<SortOption>>(dataset, "sort-options")
            .filter(|options| !options.is_empty())
            .unwrap_or(defaults.sort_options);

        Self {
            collection_noun,
            debounce_ms,
            base_path: dataset.get("base-path").cloned().unwrap_or(defaults.base_path),
            trace_level: dataset.get("trace-level").cloned(),
            available_filters: parse_json_attr(dataset, "available-filters").unwrap_or_default(),
            sort_options,
            initial_filters: parse_json_attr(dataset, "initial-filters"),
        }
    }

    /// Parses configuration from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Toml`] if the text is not valid TOML for this shape.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Io`] if the file cannot be read, or
    /// [`FilterError::Toml`] if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Provider construction inputs for `items` under this configuration.
    #[must_use]
    pub fn provider_props(&self, items: Vec<FilterableItem>) -> ProviderProps {
        ProviderProps {
            items,
            available_filters: self.available_filters.clone(),
            sort_options: self.sort_options.clone(),
            initial_filters: self.initial_filters.clone(),
        }
    }
}

fn parse_json_attr<T: serde::de::DeserializeOwned>(dataset: &BTreeMap<String, String>, key: &str) -> Option<T> {
    let raw = dataset.get(key)?;
    serde_json::from_str(raw)
        .map_err(|e| tracing::debug!(key, error = %e, "ignoring unparseable data attribute"))
        .ok()
}

/// Builds and mounts a provider for `items`.
///
/// Initial criteria come from `config.initial_filters`, else the browser's
/// current URL, else defaults. Observers registered after this call miss the
/// initial notification; use [`EventFilterProvider::new`] with
/// [`EventFilterProvider::with_observer`] before mounting to receive it.
///
/// # Example
///
/// ```rust
/// use events_filter::infrastructure::ServerContext;
/// use events_filter::{initialize, Config};
///
/// let provider = initialize(&Config::default(), Vec::new(), ServerContext);
/// assert!(provider.store().criteria().is_default());
/// ```
pub fn initialize<B>(config: &Config, items: Vec<FilterableItem>, browser: B) -> EventFilterProvider<B>
where
    B: LocationProvider + HistoryBackend,
{
    tracing::debug!(item_count = items.len(), noun = %config.collection_noun, "initializing events filter");
    EventFilterProvider::new(config.provider_props(items), browser).mount()
}

/// Parses the container's data attributes, including its `items` JSON, and
/// builds a mounted provider.
///
/// # Errors
///
/// Returns [`FilterError::Json`] if the `items` attribute is present but not a
/// valid item list. A missing `items` attribute yields an empty listing.
pub fn initialize_from_dataset<B>(
    dataset: &BTreeMap<String, String>,
    browser: B,
) -> Result<(Config, EventFilterProvider<B>)>
where
    B: LocationProvider + HistoryBackend,
{
    let config = Config::from_dataset(dataset);
    let items = match dataset.get("items") {
        Some(json) => parse_items(json)?,
        None => Vec::new(),
    };
    let provider = initialize(&config, items, browser);
    Ok((config, provider))
}
