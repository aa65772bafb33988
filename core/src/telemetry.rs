//! Tracing bootstrap.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize tracing with an `EnvFilter` and fmt layer.
///
/// `RUST_LOG` takes precedence over `default_filter`. Safe to call more than
/// once: a second initialization is silently ignored, so tests can each call
/// it without coordinating.
pub fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
