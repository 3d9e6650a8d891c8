//! Observability infrastructure for logging and cache metrics
//!
//! Cache lookup and store emit `tracing` events with a stable `event` field
//! (`memcache.entity.hit`, `memcache.string.add`, ...) inside the
//! `entity_request` span of each request. This module installs the
//! subscriber that renders them.

pub mod metrics;

use entcache_domain::{EntityCacheError, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Compact,
    /// One JSON object per event, including the current span
    Json,
}

entcache_domain::impl_domain_enum_conversions!(LogFormat {
    Compact => "compact",
    Json => "json",
});

/// Install the global tracing subscriber.
///
/// The level defaults to `info` and can be overridden with `RUST_LOG`.
///
/// # Errors
/// Returns `EntityCacheError::Internal` if a global subscriber is already
/// installed.
pub fn init_tracing(format: LogFormat) -> Result<()> {
    let env_filter =
        EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy();

    let fmt_layer = match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
        LogFormat::Compact => fmt::layer().compact().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| {
            EntityCacheError::Internal(format!("failed to install tracing subscriber: {err}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" compact ".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("pretty".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_second_init_fails() {
        // The first call may lose to another test that installed a subscriber.
        let _ = init_tracing(LogFormat::Compact);
        assert!(matches!(init_tracing(LogFormat::Json), Err(EntityCacheError::Internal(_))));
    }
}
