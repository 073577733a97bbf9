//! Presentation layer: widgets, view models and the list bridge.
//!
//! Nothing here renders markup. The server renders the page once; this layer
//! describes what the filter bar should show and keeps the rendered item list
//! in step with the store.
//!
//! # Architecture
//!
//! ```text
//! FilterStore → compute_viewmodel → FilterBarViewModel → host rendering
//!      │
//!      └→ FiltersObserver → PresentationBridge → ItemList (hide/reorder)
//! ```
//!
//! # Modules
//!
//! - [`bridge`]: Applies filtered results to the server-rendered list
//! - [`components`]: Input widgets producing store events
//! - [`helpers`]: Shared label and link formatting
//! - [`viewmodel`]: Display-ready filter bar snapshot

pub mod bridge;
pub mod components;
pub mod helpers;
pub mod viewmodel;

pub use bridge::{ItemList, MemoryItemList, PresentationBridge, ITEMS_FILTERED_EVENT};
pub use viewmodel::{
    ActiveFiltersInfo, ChipInfo, DropdownInfo, FilterBarViewModel, OptionInfo, SearchBarInfo,
    SortOptionInfo, SortSelectInfo, ViewModeLink,
};
