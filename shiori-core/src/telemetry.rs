//! Telemetry initialization

use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize structured logging with console output.
///
/// Respects `RUST_LOG`; defaults to `info`. Safe to call more than once,
/// only the first call installs the subscriber.
///
/// # Example
/// ```
/// use shiori_core::init_telemetry;
/// init_telemetry("literature-agent");
/// ```
pub fn init_telemetry(service_name: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();

        tracing::info!(service.name = service_name, "Telemetry initialized");
    });
}
