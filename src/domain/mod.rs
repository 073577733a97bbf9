//! Domain layer for the events filter engine.
//!
//! Core types independent of any browser or rendering concern.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: The listable item model
//! - [`criteria`]: Filter criteria and the commands that mutate it
//!
//! # Examples
//!
//! ```
//! use events_filter::domain::{FilterCriteria, FilterUpdate, FilterableItem};
//!
//! let item = FilterableItem::new("1", "Rust Basics", "2024-02-01");
//! let mut criteria = FilterCriteria::default();
//! criteria.apply(FilterUpdate::Search("rust".to_string()));
//! assert_eq!(item.id, "1");
//! ```

pub mod criteria;
pub mod error;
pub mod item;

pub use criteria::{
    ActiveFilter, AvailableFilters, FilterCriteria, FilterField, FilterUpdate, SortOption,
    SortOrder,
};
pub use error::{FilterError, Result};
pub use item::{parse_items, FilterableItem};
