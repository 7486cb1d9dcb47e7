//! # Logging setup
//!
//! `tracing` subscriber initialization. Filtering is controlled through
//! `RUST_LOG`; sqlx query logging is kept at `warn` by default to keep the
//! request logs readable.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `default_directive` overrides the fallback filter used when `RUST_LOG` is
/// unset. Calling this twice is a no-op (the second init fails silently),
/// which keeps tests that share a process safe.
pub fn init_logging(default_directive: Option<&str>) {
    let fallback = default_directive.unwrap_or("info,sqlx=warn,sea_orm=warn");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}
