//! Application layer coordinating the filter store, events, and actions.
//!
//! This module sits between the widgets/provider and the domain and engine
//! layers. It implements the event-driven flow that powers the filter bar.
//!
//! # Architecture
//!
//! ```text
//! Widget Input → Events → Event Handler → Store Mutations → Actions → Side Effects
//!                              ↑                                        ↓
//!                              └────────── popstate (history) ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Listing view and dropdown kinds
//! - [`state`]: The filter state store
//!
//! # Example
//!
//! ```rust
//! use events_filter::app::{handle_event, Event, FilterStore};
//! use events_filter::{AvailableFilters, FilterCriteria, SortOption};
//!
//! let mut store = FilterStore::new(Vec::new(), AvailableFilters::default(), SortOption::defaults(), FilterCriteria::default());
//! let (changed, actions) = handle_event(&mut store, Event::ClearAllFilters)?;
//! assert!(!changed && actions.is_empty());
//! # Ok::<(), events_filter::FilterError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{DropdownKind, ViewMode};
pub use state::FilterStore;
