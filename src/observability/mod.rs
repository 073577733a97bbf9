//! Structured logging setup.
//!
//! The engine logs through `tracing` spans and events (`handle_event`,
//! `filter_items`, history pushes, frame application). This module installs a
//! `tracing-subscriber` pipeline for hosts that want those logs printed.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → stderr
//! ```
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use events_filter::observability::init_tracing;
//! use events_filter::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("filter engine starting");
//! ```

mod init;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL};
