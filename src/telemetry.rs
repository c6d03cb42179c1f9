//! Tracing setup for hosts embedding `chart-settings`.
//!
//! The engine only emits `tracing` events. Installing a subscriber is the
//! host's choice; `init_default_tracing` covers the common case.

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to `chart_settings=info`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chart_settings=info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
