//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "ERRLENS_LOG";

/// Filter directive used when `ERRLENS_LOG` is unset or invalid.
///
/// `verbosity` comes from repeated `-v` flags: 0 → warn, 1 → debug,
/// anything higher → trace.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "errlens=warn",
        1 => "errlens=debug",
        _ => "errlens=trace",
    }
}

/// Initialize the errlens tracing/logging system.
///
/// Reads `ERRLENS_LOG` for per-module log levels, e.g.
/// `ERRLENS_LOG=errlens_analysis=debug,errlens_core=warn`.
/// Falls back to [`default_directive`] when unset or invalid.
///
/// Events are written to stderr; stdout is reserved for the report.
/// Calling this more than once is a no-op.
pub fn init_tracing(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

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
