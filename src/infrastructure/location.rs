//! Browser location and history capabilities.
//!
//! The engine never reads a global `window`. Everything it needs from the
//! address bar goes through [`LocationProvider`] and [`HistoryBackend`], so the
//! URL logic runs unchanged in a browser binding, during server rendering
//! ([`ServerContext`]) and in tests ([`MemoryHistory`]).

use serde_json::Value;

/// Read access to the current address.
pub trait LocationProvider {
    /// The current absolute URL, or `None` outside a browser context.
    fn href(&self) -> Option<String>;

    /// Returns `true` when running in a browser context.
    fn is_browser(&self) -> bool {
        self.href().is_some()
    }
}

/// Write access to session history.
pub trait HistoryBackend {
    /// Pushes a new entry carrying `state` without navigating.
    fn push_state(&mut self, state: Value, url: &str);
}

/// Server-rendering context: no address bar and nowhere to push.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerContext;

impl LocationProvider for ServerContext {
    fn href(&self) -> Option<String> {
        None
    }
}

impl HistoryBackend for ServerContext {
    fn push_state(&mut self, _state: Value, url: &str) {
        tracing::debug!(url = %url, "history push ignored outside a browser");
    }
}

/// One session history entry.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub url: String,
    pub state: Option<Value>,
}

/// In-memory session history with back/forward traversal.
///
/// Pushing discards any forward entries, like a browser does.
///
/// # Example
///
/// ```rust
/// use events_filter::infrastructure::{HistoryBackend, LocationProvider, MemoryHistory};
///
/// let mut history = MemoryHistory::new("https://example.com/events");
/// history.push_state(serde_json::json!({"search": "go"}), "https://example.com/events?search=go");
/// assert_eq!(history.href().as_deref(), Some("https://example.com/events?search=go"));
/// assert_eq!(history.back(), Some(None));
/// assert_eq!(history.href().as_deref(), Some("https://example.com/events"));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl MemoryHistory {
    /// Starts a history with a single stateless entry for `href`.
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            entries: vec![HistoryEntry {
                url: href.into(),
                state: None,
            }],
            index: 0,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    /// Moves one entry back and returns its state (the `popstate` payload).
    ///
    /// Returns `None` when already at the first entry.
    pub fn back(&mut self) -> Option<Option<Value>> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current().state.clone())
    }

    /// Moves one entry forward and returns its state.
    pub fn forward(&mut self) -> Option<Option<Value>> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.current().state.clone())
    }
}

impl LocationProvider for MemoryHistory {
    fn href(&self) -> Option<String> {
        Some(self.current().url.clone())
    }
}

impl HistoryBackend for MemoryHistory {
    fn push_state(&mut self, state: Value, url: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry {
            url: url.to_string(),
            state: Some(state),
        });
        self.index = self.entries.len() - 1;
    }
}
