//! Telemetry helpers for applications embedding `axis-math`.
//!
//! The crate only emits `tracing` events; it never installs a subscriber on
//! its own. Hosts either call `init_default_tracing` (with the `telemetry`
//! feature) or register their own subscriber.

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_TRACING_FILTER: &str = "info";

/// Installs a compact `tracing` fmt subscriber that honors `RUST_LOG`.
///
/// Returns `false` when the `telemetry` feature is disabled or when the host
/// application already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_TRACING_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback filter,
/// e.g. `"axis_math=trace"` when debugging tick generation.
#[must_use]
pub fn init_tracing_with_fallback(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
