//! Infrastructure layer for browser-environment interactions.
//!
//! Capabilities the engine needs from its host page, expressed as traits so the
//! application layer stays free of global browser state.

pub mod location;

pub use location::{HistoryBackend, HistoryEntry, LocationProvider, MemoryHistory, ServerContext};
