//! Presentation bridge applying filter results to the server-rendered list.
//!
//! The listing markup is rendered once by the server with every item in it.
//! [`PresentationBridge`] never creates or removes elements: it hides the ones
//! that fail the filters and moves the passing ones into result order, leaving
//! hidden elements at the end in their previous relative order.
//!
//! Work is split in two phases:
//!
//! 1. **Notify** ([`FiltersObserver::filters_changed`]): runs synchronously
//!    with the store update. Writes the filtered payload to the container,
//!    dispatches the `items-filtered` notification and updates the count text.
//!    The filtered ids are stashed and a frame is requested.
//! 2. **Frame** ([`PresentationBridge::on_animation_frame`]): applies the
//!    latest stashed ids to the elements. Several notifications between two
//!    frames collapse into one application.
//!
//! The provider takes ownership of its observers, so a bridge registered
//! directly can no longer be driven by frames. Wrap it in a [`SharedBridge`],
//! register a clone with the provider and keep the other for the frame loop.
//!
//! # Example
//!
//! ```rust
//! use events_filter::provider::FiltersObserver;
//! use events_filter::ui::bridge::{ItemList, MemoryItemList, PresentationBridge};
//! use events_filter::{FilterCriteria, FilterableItem};
//!
//! let list = MemoryItemList::new(["1", "2"]);
//! let mut bridge = PresentationBridge::new(list, "events");
//! let kept = vec![FilterableItem::new("2", "Rust Basics", "2024-02-01")];
//! bridge.filters_changed(&FilterCriteria::default(), &kept);
//! assert!(bridge.on_animation_frame());
//! assert!(bridge.list().is_hidden("1"));
//! assert_eq!(bridge.list().item_ids(), vec!["2", "1"]);
//! ```
//!
//! Wired to a provider:
//!
//! ```rust
//! use events_filter::infrastructure::MemoryHistory;
//! use events_filter::ui::bridge::{MemoryItemList, PresentationBridge};
//! use events_filter::{EventFilterProvider, FilterUpdate, FilterableItem, ProviderProps};
//!
//! let bridge = PresentationBridge::new(MemoryItemList::new(["1"]), "events").into_shared();
//! let props = ProviderProps::new(vec![FilterableItem::new("1", "Intro to Go", "2024-01-01")]);
//! let mut provider = EventFilterProvider::new(props, MemoryHistory::new("https://example.com/events"))
//!     .with_observer(bridge.clone())
//!     .mount();
//!
//! provider.update_filter(FilterUpdate::Search("rust".into()));
//! assert!(bridge.on_animation_frame());
//! assert_eq!(bridge.borrow().list().count_text(), "0 events");
//! ```

use std::cell::{Ref, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use serde_json::json;

use crate::domain::{FilterCriteria, FilterableItem};
use crate::provider::FiltersObserver;
use crate::ui::helpers::count_label;

/// Name of the notification dispatched after every recomputation.
pub const ITEMS_FILTERED_EVENT: &str = "items-filtered";

/// The rendered list container and its item elements, keyed by item id.
pub trait ItemList {
    /// Ids of the item elements in current document order.
    fn item_ids(&self) -> Vec<String>;

    fn set_hidden(&mut self, id: &str, hidden: bool);

    fn is_hidden(&self, id: &str) -> bool;

    /// Moves elements into `order`; ids not in the container are skipped.
    fn reorder(&mut self, order: &[String]);

    /// Stores the serialized filtered items on the container.
    fn set_filtered_payload(&mut self, json: &str);

    /// Dispatches a named notification with a JSON detail.
    fn dispatch(&mut self, event: &str, detail: serde_json::Value);

    /// Replaces the result count text.
    fn set_count_text(&mut self, text: &str);
}

/// Observer that keeps an [`ItemList`] in step with the filter store.
#[derive(Debug)]
pub struct PresentationBridge<L> {
    list: L,
    noun: String,
    pending: Option<Vec<String>>,
}

impl<L: ItemList> PresentationBridge<L> {
    /// `noun` labels the count text (`"{n} {noun}"`).
    pub fn new(list: L, noun: impl Into<String>) -> Self {
        Self {
            list,
            noun: noun.into(),
            pending: None,
        }
    }

    #[must_use]
    pub const fn list(&self) -> &L {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut L {
        &mut self.list
    }

    /// Returns `true` while a result is waiting for the next frame.
    #[must_use]
    pub const fn needs_frame(&self) -> bool {
        self.pending.is_some()
    }

    /// Applies the latest pending result to the elements.
    ///
    /// Returns `false` when there was nothing to apply.
    pub fn on_animation_frame(&mut self) -> bool {
        let Some(filtered_ids) = self.pending.take() else {
            return false;
        };

        let _span = tracing::debug_span!("apply_frame", visible = filtered_ids.len()).entered();

        let current = self.list.item_ids();
        let visible: HashSet<&str> = filtered_ids.iter().map(String::as_str).collect();

        for id in &current {
            self.list.set_hidden(id, !visible.contains(id.as_str()));
        }

        if filtered_ids.is_empty() || current.is_empty() {
            tracing::debug!("no visible items, keeping document order");
            return true;
        }

        let present: HashSet<&str> = current.iter().map(String::as_str).collect();
        let order: Vec<String> = filtered_ids
            .iter()
            .filter(|id| present.contains(id.as_str()))
            .chain(current.iter().filter(|id| !visible.contains(id.as_str())))
            .cloned()
            .collect();

        self.list.reorder(&order);
        tracing::debug!(total = order.len(), "list reordered");
        true
    }

    /// Consumes the bridge, returning the list.
    pub fn into_list(self) -> L {
        self.list
    }

    /// Moves the bridge behind a cloneable handle.
    #[must_use]
    pub fn into_shared(self) -> SharedBridge<L> {
        SharedBridge(Rc::new(RefCell::new(self)))
    }
}

impl<L: ItemList> FiltersObserver for PresentationBridge<L> {
    fn filters_changed(&mut self, criteria: &FilterCriteria, items: &[FilterableItem]) {
        match serde_json::to_string(items) {
            Ok(payload) => self.list.set_filtered_payload(&payload),
            Err(e) => tracing::warn!(error = %e, "failed to serialize filtered items"),
        }

        self.list
            .dispatch(ITEMS_FILTERED_EVENT, json!({ "items": items, "filters": criteria }));
        self.list.set_count_text(&count_label(items.len(), &self.noun));

        if self.pending.is_some() {
            tracing::trace!("coalescing with pending frame");
        }
        self.pending = Some(items.iter().map(|item| item.id.clone()).collect());
    }
}

/// Cloneable handle to one [`PresentationBridge`].
///
/// Every clone observes and drives the same bridge.
#[derive(Debug)]
pub struct SharedBridge<L>(Rc<RefCell<PresentationBridge<L>>>);

impl<L> Clone for SharedBridge<L> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<L: ItemList> SharedBridge<L> {
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.0.borrow().needs_frame()
    }

    /// See [`PresentationBridge::on_animation_frame`].
    pub fn on_animation_frame(&self) -> bool {
        self.0.borrow_mut().on_animation_frame()
    }

    /// Borrows the bridge. Panics if called while the bridge is being notified.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, PresentationBridge<L>> {
        self.0.borrow()
    }
}

impl<L: ItemList> FiltersObserver for SharedBridge<L> {
    fn filters_changed(&mut self, criteria: &FilterCriteria, items: &[FilterableItem]) {
        self.0.borrow_mut().filters_changed(criteria, items);
    }
}

/// In-memory [`ItemList`] for server-side use and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryItemList {
    elements: Vec<(String, bool)>,
    payload: Option<String>,
    events: Vec<(String, serde_json::Value)>,
    count_text: String,
}

impl MemoryItemList {
    /// Creates a list with visible elements in the given order.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: ids.into_iter().map(|id| (id.into(), false)).collect(),
            ..Self::default()
        }
    }

    /// Ids of elements currently shown, in document order.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|(_, hidden)| !hidden)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    #[must_use]
    pub fn filtered_payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Dispatched notifications, oldest first.
    #[must_use]
    pub fn events(&self) -> &[(String, serde_json::Value)] {
        &self.events
    }

    #[must_use]
    pub fn count_text(&self) -> &str {
        &self.count_text
    }
}

impl ItemList for MemoryItemList {
    fn item_ids(&self) -> Vec<String> {
        self.elements.iter().map(|(id, _)| id.clone()).collect()
    }

    fn set_hidden(&mut self, id: &str, hidden: bool) {
        if let Some(entry) = self.elements.iter_mut().find(|(el, _)| el == id) {
            entry.1 = hidden;
        }
    }

    fn is_hidden(&self, id: &str) -> bool {
        self.elements.iter().any(|(el, hidden)| el == id && *hidden)
    }

    fn reorder(&mut self, order: &[String]) {
        let mut rest = std::mem::take(&mut self.elements);
        for id in order {
            if let Some(pos) = rest.iter().position(|(el, _)| el == id) {
                self.elements.push(rest.remove(pos));
            }
        }
        self.elements.append(&mut rest);
    }

    fn set_filtered_payload(&mut self, json: &str) {
        self.payload = Some(json.to_string());
    }

    fn dispatch(&mut self, event: &str, detail: serde_json::Value) {
        self.events.push((event.to_string(), detail));
    }

    fn set_count_text(&mut self, text: &str) {
        self.count_text = text.to_string();
    }
}
