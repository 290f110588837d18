//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the simulator's tracing/logging system.
///
/// Reads the `IVR_LOG` environment variable for per-crate log levels.
/// Format: `IVR_LOG=ivr_analysis=debug,ivr_core=info`
///
/// Falls back to `ivr=info` if `IVR_LOG` is not set or is invalid.
/// Output goes to stderr so reports on stdout stay machine-readable.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("ivr=info"));
    install(filter);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter));
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
