//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Resolves the filter directive: `RUST_LOG`, then config, then `info`.
fn resolve_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
        // Unparseable levels fall back silently; logging is optional.
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL))
    })
}

/// Installs the global tracing subscriber.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters spans and events by the resolved level
/// 2. Formats them as human-readable lines on stderr
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times (only the first call takes effect,
/// later calls and conflicts with a host-installed subscriber are ignored).
///
/// # Example
///
/// ```rust
/// use events_filter::observability::init_tracing;
/// use events_filter::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let subscriber = tracing_subscriber::registry()
        .with(resolve_filter(config))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
