//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "PHISHLENS_LOG";

/// Initialize the phishlens tracing/logging system.
///
/// Reads `PHISHLENS_LOG` for per-module log levels, e.g.
/// `PHISHLENS_LOG=phishlens_analysis=debug`. Falls back to `phishlens=info`
/// when unset or invalid. Output goes to stderr so stdout stays clean for
/// reports.
///
/// Idempotent: later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("phishlens=info"));

        // A subscriber may already be installed by an embedding application.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
