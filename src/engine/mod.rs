//! Match engine: fuzzy search, tag/location filters and date ordering.
//!
//! # Modules
//!
//! - [`fuzzy`]: Typo-tolerant scoring and the reusable [`SearchIndex`]
//! - [`dates`]: ISO-ish date parsing and invalid-date-aware ordering
//! - [`matcher`]: The ordered filter pipeline over an item slice

pub mod dates;
pub mod fuzzy;
pub mod matcher;

pub use fuzzy::{SearchHit, SearchIndex, DEFAULT_THRESHOLD};
pub use matcher::{filter, filter_items};
